use clap::Args;

#[derive(Args)]
pub(crate) struct DeleteArgs {
    /// <repository>/<directory>/<asset name or pattern>
    pub(crate) repository_path: String,
    /// Treat the asset name as a wildcard (% matches any run of characters)
    #[arg(long)]
    pub(crate) wildcard: bool,
    /// Treat the asset name as a regular expression
    #[arg(long)]
    pub(crate) regex: bool,
    /// Do not ask for confirmation before deleting
    #[arg(short, long)]
    pub(crate) force: bool,
}

#[derive(Args)]
pub(crate) struct DeleteAssetsArgs {
    /// Repository to delete assets from
    pub(crate) repository: String,
    /// Asset pattern
    pub(crate) pattern: String,
    /// Do not ask for confirmation before deleting
    #[arg(short, long)]
    pub(crate) force: bool,
}
