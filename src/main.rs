//! Main entry point for the DeepL client CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deepl_client::cli::commands::{self, Commands};
use deepl_client::DeeplClient;

/// DeepL Client - translate texts and manage glossaries
#[derive(Parser, Debug)]
#[command(name = "deepl-client", version, about, long_about = None)]
struct Args {
    /// API key (optional, defaults to DEEPL_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// API root without trailing slash (defaults to DEEPL_BASE_URL or the free endpoint)
    #[arg(long)]
    base_url: Option<String>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("deepl_client={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = commands::load_config(args.config.as_deref(), args.api_key, args.base_url)?;
    let client = DeeplClient::from_config(config)?;

    commands::run(&client, args.command).await
}
