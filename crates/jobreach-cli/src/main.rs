mod distance;
mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "jobreach")]
#[command(about = "Job search with distance-aware results")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search job listings and print them with distances.
    Search(search::SearchArgs),
    /// Compute the distance between two locations (zip or city).
    Distance(distance::DistanceArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => {
            let config = jobreach_core::load_app_config_from_env()?;
            init_tracing(&config.log_level)?;
            search::run(&config, args).await
        }
        Commands::Distance(args) => {
            // Table-only; no config needed.
            init_tracing("info")?;
            distance::run(&args)
        }
    }
}

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
