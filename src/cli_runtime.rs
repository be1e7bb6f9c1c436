use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;

use nexus3::NexusError;
use nexus3::model::NexusConfig;
use nexus3::remote::NexusClient;

use crate::Commands;

pub(crate) const CONFIG_ENV: &str = "NEXUS3_CONFIG";

#[derive(Parser)]
#[command(name = "nexus3", version)]
#[command(about = "Nexus 3 repository manager command-line client", long_about = None)]
pub(crate) struct Cli {
    /// Config file (defaults to $NEXUS3_CONFIG, then ~/.nexus-cli)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More diagnostics on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Process exit codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CliReturnCode {
    Success = 0,
    ApiError = 2,
    InvalidCredentials = 3,
    ConnectionError = 4,
    InvalidSubcommand = 10,
    UnknownError = 99,
}

impl CliReturnCode {
    pub(crate) fn as_i32(self) -> i32 {
        self as i32
    }
}

pub(crate) struct CliContext {
    config_path: Option<PathBuf>,
}

pub(crate) fn run() -> Result<CliReturnCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return Ok(match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => CliReturnCode::Success,
                _ => CliReturnCode::InvalidSubcommand,
            });
        }
    };

    if let Err(err) = nexus3::logging::init(cli.verbose) {
        eprintln!("warning: logging unavailable: {}", err);
    }

    let ctx = CliContext {
        config_path: cli.config,
    };
    crate::cli_exec::handle_command(&ctx, cli.command)
}

impl CliContext {
    fn config_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.config_path {
            return Ok(path.clone());
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        NexusConfig::default_path()
            .context("cannot locate home directory for ~/.nexus-cli (use --config)")
    }

    pub(crate) fn load_config(&self) -> Result<NexusConfig> {
        let path = self.config_path()?;
        load_config_from(&path)
    }

    pub(crate) fn connect(&self) -> Result<NexusClient> {
        let client = NexusClient::new(self.load_config()?).context("build nexus client")?;
        let cfg = client.config();
        tracing::debug!(
            url = cfg.base_url(),
            user = %cfg.username,
            x509_verify = cfg.x509_verify,
            "using nexus"
        );
        Ok(client)
    }
}

fn load_config_from(path: &Path) -> Result<NexusConfig> {
    let cfg = NexusConfig::load(path)?;
    let cfg = cfg.with_overrides(|key| std::env::var(key).ok())?;
    Ok(cfg)
}

pub(crate) fn exit_code_for(err: &anyhow::Error) -> CliReturnCode {
    let Some(nexus_err) = err.chain().find_map(|e| e.downcast_ref::<NexusError>()) else {
        return CliReturnCode::UnknownError;
    };
    match nexus_err {
        NexusError::Protocol { .. } | NexusError::Api { .. } => CliReturnCode::ApiError,
        NexusError::InvalidCredentials { .. } => CliReturnCode::InvalidCredentials,
        NexusError::Connection { .. } | NexusError::Transport(_) => CliReturnCode::ConnectionError,
        NexusError::InvalidArgument(_) => CliReturnCode::InvalidSubcommand,
        NexusError::Config { .. } | NexusError::Io(_) => CliReturnCode::UnknownError,
    }
}

#[cfg(test)]
#[path = "tests/cli_runtime_tests.rs"]
mod tests;
