use clap::Subcommand;

use crate::cli_commands::assets::DeleteAssetsArgs;

#[derive(Subcommand)]
pub(crate) enum RepositoryCommands {
    /// Delete assets matching a regular expression from a repository
    #[command(visible_alias = "del_assets_regex", alias = "delete_assets_regex")]
    DelAssetsRegex(DeleteAssetsArgs),

    /// Delete assets matching a wildcard (% as wildcard) from a repository
    #[command(visible_alias = "del_assets_wildcard", alias = "delete_assets_wildcard")]
    DelAssetsWildcard(DeleteAssetsArgs),
}
