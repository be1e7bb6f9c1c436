use std::path::PathBuf;

use thiserror::Error;

pub type NexusResult<T> = Result<T, NexusError>;

#[derive(Debug, Error)]
pub enum NexusError {
    /// The service answered, but not in the shape the script bridge expects.
    #[error("malformed response from script {script}: {reason} (raw: {raw})")]
    Protocol {
        script: String,
        reason: String,
        raw: String,
    },

    /// Non-success status, or a script that reported `success: false`.
    #[error("{message}")]
    Api {
        status: Option<u16>,
        message: String,
    },

    #[error("invalid credentials for {url} (check username/password in the nexus3 config)")]
    InvalidCredentials { url: String },

    #[error("could not connect to {url}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("http transport error")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("i/o error")]
    Io(#[from] std::io::Error),
}

impl NexusError {
    pub(crate) fn protocol(
        script: &str,
        reason: impl Into<String>,
        raw: impl ToString,
    ) -> Self {
        NexusError::Protocol {
            script: script.to_string(),
            reason: reason.into(),
            raw: raw.to_string(),
        }
    }

    pub(crate) fn api(message: impl Into<String>) -> Self {
        NexusError::Api {
            status: None,
            message: message.into(),
        }
    }
}
