//! CLI for SiteLens.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sitelens_core::config;
use std::path::PathBuf;

use commands::{run_analyze, run_config, run_resolve};

/// Top-level CLI for SiteLens.
#[derive(Debug, Parser)]
#[command(name = "sitelens")]
#[command(about = "SiteLens: inspect a HAX site through its site.json", long_about = None)]
pub struct Cli {
    /// Read settings from this file instead of ~/.config/sitelens/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a site's site.json and show its overview and item cards.
    Analyze {
        /// Site base URL (e.g. https://haxtheweb.org) or full site.json URL.
        url: String,

        /// Print the loaded site as JSON instead of cards.
        #[arg(long)]
        json: bool,
    },

    /// Print the site.json URL an input resolves to.
    Resolve {
        /// Site base URL or site.json URL.
        input: String,
    },

    /// Show the config file location and effective settings.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Analyze { url, json } => run_analyze(&cfg, &url, json).await?,
            CliCommand::Resolve { input } => run_resolve(&input)?,
            CliCommand::Config => run_config(&cfg, cli.config.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
