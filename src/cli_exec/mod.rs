use anyhow::{Context, Result};

use crate::cli_runtime::{CliContext, CliReturnCode};
use crate::{Commands, RepositoryCommands, ScriptCommands};

mod assets;
mod dispatch;
mod scripts;

pub(crate) fn handle_command(ctx: &CliContext, command: Commands) -> Result<CliReturnCode> {
    dispatch::handle_command(ctx, command)
}
