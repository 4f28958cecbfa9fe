mod commands;
mod output;
mod source;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prodcal")]
#[command(about = "Generate .ics calendars from the Russian production calendar feed")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every available year and refresh the .ics artifacts
    Sync {
        /// Directory the artifacts are written to
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
    /// Print one year's calendar to stdout without writing anything
    Preview {
        /// Year to fetch (e.g. 2024)
        year: i32,
    },
    /// List the years available in the feed
    Years,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sync { dir } => commands::sync::run(&dir).await,
        Commands::Preview { year } => commands::preview::run(year).await,
        Commands::Years => commands::years::run().await,
    }
}
