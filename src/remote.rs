use crate::error::{NexusError, NexusResult};
use crate::model::NexusConfig;

mod http_client;

mod types;
pub use self::types::*;
mod scripts;

/// Blocking HTTP client for the Nexus REST API.
pub struct NexusClient {
    config: NexusConfig,
    client: reqwest::blocking::Client,
}

impl NexusClient {
    pub fn new(config: NexusConfig) -> NexusResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("nexus3")
            .danger_accept_invalid_certs(!config.x509_verify)
            .build()
            .map_err(NexusError::Transport)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &NexusConfig {
        &self.config
    }
}
