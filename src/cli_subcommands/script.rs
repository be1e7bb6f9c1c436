use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ScriptCommands {
    /// List scripts installed on the server
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Install a Groovy script unless one with that name exists
    Create {
        name: String,
        /// File holding the script body
        file: PathBuf,
    },
    /// Run an installed script and print its response
    Run {
        name: String,
        /// Payload passed to the script as its arguments
        #[arg(default_value = "")]
        payload: String,
    },
    /// Delete a script (succeeds if it is already gone)
    #[command(alias = "del")]
    Delete { name: String },
}
