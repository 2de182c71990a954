//! Cloud Migration Analyzer CLI
//!
//! A command-line tool for submitting server inventories to the
//! migration analysis API and viewing cost breakdowns and roadmaps.

mod client;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{analyze, costs, roadmap};

/// Cloud Migration Analyzer CLI
#[derive(Parser)]
#[command(name = "mca")]
#[command(author, version, about = "CLI for the Cloud Migration Analyzer", long_about = None)]
pub struct Cli {
    /// API endpoint URL (can also be set via MCA_API_URL env var)
    #[arg(long, env = "MCA_API_URL")]
    pub api_url: Option<String>,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze an inventory and show the portfolio summary
    Analyze {
        /// Path to the inventory JSON file
        file: String,
    },

    /// Show per-server cost breakdowns
    Costs {
        /// Path to the inventory JSON file
        file: String,

        /// Filter by server ID substring
        #[arg(long, short)]
        server: Option<String>,
    },

    /// Show the summarized migration roadmap
    Roadmap {
        /// Path to the inventory JSON file
        file: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config file fills in whatever the flags and env leave unset
    let config = config::Config::load().unwrap_or_default();
    let api_url = cli
        .api_url
        .or(config.api_url.clone())
        .unwrap_or_else(|| "http://localhost:8080".to_string());
    let currency = config.currency().to_string();

    let client = client::ApiClient::new(&api_url)?;

    match cli.command {
        Commands::Analyze { file } => {
            analyze::run(&client, &file, &currency, cli.format).await?;
        }
        Commands::Costs { file, server } => {
            costs::run(&client, &file, server, &currency, cli.format).await?;
        }
        Commands::Roadmap { file } => {
            roadmap::run(&client, &file, cli.format).await?;
        }
    }

    Ok(())
}
