use super::assets::{handle_delete_command, handle_repository_command};
use super::scripts::handle_script_command;
use super::*;

pub(super) fn handle_command(ctx: &CliContext, command: Commands) -> Result<CliReturnCode> {
    match command {
        Commands::Delete(args) => handle_delete_command(ctx, args),
        Commands::Repository { command } => handle_repository_command(ctx, command),
        Commands::Script { command } => handle_script_command(ctx, command),
    }
}
