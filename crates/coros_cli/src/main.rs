use std::path::PathBuf;

use clap::{Parser, Subcommand};
use coros_cli::commands;
use coros_cli::error::CliResult;
use coros_client::ActivityDescriptor;
use coros_client::config::Config;
use coros_client::http_client::ReqwestCorosClient;

#[derive(Parser)]
#[command(name = "coros", version, about = "List and download COROS workout activities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recent activities
    List {
        /// Number of activities to show
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: u32,
    },
    /// Download an activity file interactively
    Download {
        /// File format: gpx, fit, tcx, kml, csv
        #[arg(short, long, default_value = "gpx")]
        format: String,
        /// Number of activities to show for selection
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: u32,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

/// Interactive 1-based selection prompt.
fn prompt_selection(_activities: &[ActivityDescriptor]) -> CliResult<usize> {
    let n: usize = dialoguer::Input::new()
        .with_prompt("Enter activity number")
        .interact_text()?;
    Ok(n)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configure logging from `COROS_LOG_LEVEL` (or fallback to `RUST_LOG`,
    // default `info`).
    let log_env = std::env::var("COROS_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let cli = Cli::parse();

    let cfg = Config::from_env()
        .map_err(|e| anyhow::anyhow!("{e}; set COROS_EMAIL and COROS_PASSWORD"))?;
    let mut client = ReqwestCorosClient::from_config(cfg);
    let mut out = std::io::stdout();

    match cli.command {
        Commands::List { limit } => commands::list(&mut client, limit, &mut out).await?,
        Commands::Download {
            format,
            limit,
            output,
        } => {
            commands::download(&mut client, &format, limit, &output, prompt_selection, &mut out)
                .await?
        }
    }
    Ok(())
}
