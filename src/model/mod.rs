mod assets;
mod config;

pub use self::assets::{AssetMatchPayload, DeletionOutcome, DeletionRequest, MatchMode};
pub use self::config::{CONFIG_FILE_NAME, NexusConfig};
