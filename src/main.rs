mod cli_commands;
mod cli_exec;
mod cli_runtime;
mod cli_subcommands;

pub(crate) use self::cli_commands::Commands;
pub(crate) use self::cli_subcommands::{RepositoryCommands, ScriptCommands};

fn main() {
    let code = match cli_runtime::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            cli_runtime::exit_code_for(&err)
        }
    };
    std::process::exit(code.as_i32());
}
