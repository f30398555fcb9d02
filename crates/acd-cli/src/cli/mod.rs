//! CLI for the acd remote storage client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use acd_core::config;

use commands::{run_check_id, run_codes, run_get};

/// Top-level CLI for acd.
#[derive(Debug, Parser)]
#[command(name = "acd")]
#[command(about = "acd: remote storage client request layer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check that one or more node ids have the 22-character id shape.
    CheckId {
        /// Node ids to check.
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// GET a URL, retrying connection failures and read timeouts.
    Get {
        /// Absolute HTTP/HTTPS URL, or a path relative to the metadata endpoint.
        url: String,

        /// Resolve a relative path against the content endpoint instead.
        #[arg(long)]
        content: bool,
    },

    /// List reserved error codes and the OK / retryable status sets.
    Codes {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::CheckId { ids } => run_check_id(&ids)?,
            CliCommand::Get { url, content } => run_get(&cfg, &url, content)?,
            CliCommand::Codes { json } => run_codes(json)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
