use nexus3::NexusError;
use nexus3::assets::{AssetMatcher, DeletionReport, DeletionWorkflow};
use nexus3::model::{DeletionRequest, MatchMode};
use nexus3::prompt::LinePrompt;

use super::*;
use crate::cli_commands::assets::DeleteArgs;

pub(super) fn handle_delete_command(ctx: &CliContext, args: DeleteArgs) -> Result<CliReturnCode> {
    let mode = MatchMode::from_flags(args.wildcard, args.regex)?;
    let (repository, asset) = split_repository_path(&args.repository_path)?;
    delete_assets(ctx, &repository, &asset, mode, args.force)
}

pub(super) fn handle_repository_command(
    ctx: &CliContext,
    command: RepositoryCommands,
) -> Result<CliReturnCode> {
    match command {
        RepositoryCommands::DelAssetsRegex(args) => delete_assets(
            ctx,
            &args.repository,
            &args.pattern,
            MatchMode::Regex,
            args.force,
        ),
        RepositoryCommands::DelAssetsWildcard(args) => delete_assets(
            ctx,
            &args.repository,
            &args.pattern,
            MatchMode::Wildcard,
            args.force,
        ),
    }
}

fn delete_assets(
    ctx: &CliContext,
    repository: &str,
    pattern: &str,
    mode: MatchMode,
    force: bool,
) -> Result<CliReturnCode> {
    let request = DeletionRequest::new(repository, pattern, mode, !force)?;
    let client = ctx.connect()?;
    let matcher = AssetMatcher::new(&client);

    let stdin = std::io::stdin();
    let mut prompt = LinePrompt::new(stdin.lock(), std::io::stdout());
    let mut out = std::io::stdout();
    let mut err = std::io::stderr();

    let report = DeletionWorkflow::new(&matcher, &mut prompt)
        .run(&request, force, &mut out, &mut err)
        .with_context(|| format!("delete assets from repository \"{}\"", repository))?;

    if let DeletionReport::Deleted(paths) = &report {
        tracing::info!(repository, count = paths.len(), "assets deleted");
    }
    Ok(CliReturnCode::Success)
}

/// Splits `repo/dir/name` into the repository and the asset name
/// (`dir/name`). Both a directory and a name are required.
pub(super) fn split_repository_path(path: &str) -> Result<(String, String), NexusError> {
    let invalid =
        || NexusError::InvalidArgument(format!("Invalid <repository_path> provided: {}", path));

    let (repository, rest) = path
        .trim_start_matches('/')
        .split_once('/')
        .ok_or_else(invalid)?;
    let (dir, name) = rest.rsplit_once('/').ok_or_else(invalid)?;
    if repository.is_empty() || dir.is_empty() || name.is_empty() {
        return Err(invalid());
    }
    Ok((repository.to_string(), format!("{}/{}", dir, name)))
}

#[cfg(test)]
#[path = "../tests/cli_exec/assets_tests.rs"]
mod tests;
