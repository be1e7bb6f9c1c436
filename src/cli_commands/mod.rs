use clap::Subcommand;

use crate::{RepositoryCommands, ScriptCommands};

pub(crate) mod assets;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Delete assets by repository path (exact name unless --wildcard/--regex)
    #[command(alias = "del")]
    Delete(assets::DeleteArgs),

    /// Manage repositories
    #[command(alias = "repo")]
    Repository {
        #[command(subcommand)]
        command: RepositoryCommands,
    },

    /// Manage server-side scripts
    Script {
        #[command(subcommand)]
        command: ScriptCommands,
    },
}
