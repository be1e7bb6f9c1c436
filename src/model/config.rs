use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NexusError, NexusResult};

pub const CONFIG_FILE_NAME: &str = ".nexus-cli";

fn default_url() -> String {
    "http://localhost:8081".to_string()
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "admin123".to_string()
}

fn default_true() -> bool {
    true
}

/// Connection settings for a Nexus service, read from `~/.nexus-cli`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NexusConfig {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_password")]
    pub password: String,

    /// Verify the server's TLS certificate.
    #[serde(default = "default_true")]
    pub x509_verify: bool,
}

impl Default for NexusConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            username: default_username(),
            password: default_password(),
            x509_verify: true,
        }
    }
}

impl NexusConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
    }

    /// Reads the config file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> NexusResult<Self> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file missing, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(NexusError::Config {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|err| NexusError::Config {
            path: path.to_path_buf(),
            reason: format!("parse: {}", err),
        })
    }

    /// Applies `NEXUS3_*` overrides. `lookup` is usually `std::env::var`.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> NexusResult<Self> {
        if let Some(url) = lookup("NEXUS3_URL") {
            self.url = url;
        }
        if let Some(username) = lookup("NEXUS3_USERNAME") {
            self.username = username;
        }
        if let Some(password) = lookup("NEXUS3_PASSWORD") {
            self.password = password;
        }
        if let Some(raw) = lookup("NEXUS3_X509_VERIFY") {
            self.x509_verify = parse_yes_no(&raw).ok_or_else(|| NexusError::Config {
                path: PathBuf::from("NEXUS3_X509_VERIFY"),
                reason: format!("expected yes/no/true/false, got {:?}", raw),
            })?;
        }
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod tests;
