mod config;
mod models;
mod output;
mod pipeline;
mod scraper;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::pipeline::Pipeline;
use crate::scraper::{ConcertSource, QueenConcertsScraper};

#[derive(Parser)]
#[command(name = "concert-etl", about = "Queen concert listings ETL", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch every tour page and write the combined events CSV
    Scrape {
        /// Output file (overrides output.csv_path from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print tour links discovered on the listing page
    Tours,

    /// Show stats for a previously written events file
    Stats {
        /// Events file to inspect
        #[arg(short, long, default_value = "events.csv")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "concert_etl=info,warn",
        1 => "concert_etl=debug,info",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut config = AppConfig::load()?;

    match cli.command {
        Command::Scrape { output } => {
            if let Some(path) = output {
                config.output.csv_path = path;
            }

            let started = Instant::now();
            let stats = Pipeline::new(config).run().await?;
            info!(
                "Done: {} tours, {} events in {:.2?}",
                stats.tours_processed,
                stats.events_collected,
                started.elapsed()
            );
        }

        Command::Tours => {
            let scraper = QueenConcertsScraper::new(&config.scraper)?;
            let links = scraper.fetch_tour_links().await?;
            if links.is_empty() {
                println!("No tour links found on {}", config.scraper.base_url);
            } else {
                println!("{} tours:", links.len());
                for link in &links {
                    println!("  {}", link);
                }
            }
        }

        Command::Stats { file } => {
            let events = output::read_events(&file)?;
            let tours: HashSet<&str> = events.iter().map(|e| e.tour_name.as_str()).collect();
            let min = events.iter().map(|e| e.date).min();
            let max = events.iter().map(|e| e.date).max();
            println!("─────────────────────────────────");
            println!("  Concert ETL — Events File");
            println!("─────────────────────────────────");
            println!("  Events : {}", events.len());
            println!("  Tours  : {}", tours.len());
            println!("  From   : {}", min.map(|d| d.to_string()).unwrap_or("—".into()));
            println!("  To     : {}", max.map(|d| d.to_string()).unwrap_or("—".into()));
            println!("─────────────────────────────────");
        }
    }

    Ok(())
}
