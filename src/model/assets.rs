use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NexusError, NexusResult};

/// How the server interprets an asset pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchMode {
    ExactName,
    Wildcard,
    Regex,
}

impl MatchMode {
    /// Resolves the `--wildcard`/`--regex` flag pair. Neither flag means an
    /// exact name match; both is rejected.
    pub fn from_flags(wildcard: bool, regex: bool) -> NexusResult<Self> {
        match (wildcard, regex) {
            (true, true) => Err(NexusError::InvalidArgument(
                "Cannot provide both --regex and --wildcard".to_string(),
            )),
            (true, false) => Ok(MatchMode::Wildcard),
            (false, true) => Ok(MatchMode::Regex),
            (false, false) => Ok(MatchMode::ExactName),
        }
    }

    /// The `isWildcard` wire flag.
    ///
    /// The script protocol only knows wildcard vs. not-wildcard, so
    /// `ExactName` and `Regex` are sent identically: an exact name is
    /// evaluated server-side as a regular expression.
    pub fn is_wildcard(self) -> bool {
        matches!(self, MatchMode::Wildcard)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::ExactName => "EXACT_NAME",
            MatchMode::Wildcard => "WILDCARD",
            MatchMode::Regex => "REGEX",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeletionRequest {
    repository: String,
    pattern: String,
    mode: MatchMode,
    dry_run: bool,
}

impl DeletionRequest {
    pub fn new(
        repository: impl Into<String>,
        pattern: impl Into<String>,
        mode: MatchMode,
        dry_run: bool,
    ) -> NexusResult<Self> {
        let repository = repository.into();
        let pattern = pattern.into();
        if repository.is_empty() {
            return Err(NexusError::InvalidArgument(
                "repository name must not be empty".to_string(),
            ));
        }
        if pattern.is_empty() {
            return Err(NexusError::InvalidArgument(
                "asset pattern must not be empty".to_string(),
            ));
        }
        Ok(Self {
            repository,
            pattern,
            mode,
            dry_run,
        })
    }

    /// Same repository, pattern and mode with a different dry-run flag.
    pub fn with_dry_run(&self, dry_run: bool) -> Self {
        Self {
            dry_run,
            ..self.clone()
        }
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn to_payload(&self) -> AssetMatchPayload {
        AssetMatchPayload {
            repo_name: self.repository.clone(),
            asset_regex: self.pattern.clone(),
            is_wildcard: self.mode.is_wildcard(),
            dry_run: self.dry_run,
        }
    }
}

/// Input document of the delete-assets script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMatchPayload {
    pub repo_name: String,
    pub asset_regex: String,
    pub is_wildcard: bool,
    pub dry_run: bool,
}

/// Inner document of the delete-assets script result.
///
/// Presence of `assets` is checked on the raw JSON before this is decoded,
/// since serde cannot tell a missing key from an explicit `null`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DeletionOutcome {
    /// Only an explicit `false` marks a failure; absent or `null` does not.
    #[serde(default)]
    pub success: Option<bool>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub assets: Option<Vec<String>>,
}

impl DeletionOutcome {
    pub fn failed(&self) -> bool {
        self.success == Some(false)
    }

    pub fn into_assets(self) -> Vec<String> {
        self.assets.unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../tests/model/assets_tests.rs"]
mod tests;
