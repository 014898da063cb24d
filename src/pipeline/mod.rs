//! Pipeline orchestrator: ties scraper → CSV output together.
//!
//! `run()` performs one whole batch:
//!   1. Fetch the tour listing page → collect tour links
//!   2. Fetch every tour page in discovery order, feeding one shared
//!      extractor so events accumulate across all pages
//!   3. Write the combined event list to the output CSV
//!
//! Any fetch or extract failure aborts the run; the CSV is only written
//! once every page has parsed, so a failed run leaves no partial output.

use crate::config::AppConfig;
use crate::output;
use crate::scraper::{ConcertSource, QueenConcertsScraper, TourPageExtractor};
use anyhow::{Context, Result};
use tracing::info;

pub struct Pipeline {
    config: AppConfig,
}

impl Pipeline {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<PipelineStats> {
        let scraper = QueenConcertsScraper::new(&self.config.scraper)
            .context("Failed to build scraper")?;

        // ── 1. Discover tour pages ─────────────────────────────────────────────
        info!("=== Step 1: Discovering tour pages ===");
        let links = scraper
            .fetch_tour_links()
            .await
            .context("Tour listing fetch failed")?;
        info!("{} tour pages discovered", links.len());

        // ── 2. Extract events from every tour page ────────────────────────────
        info!("=== Step 2: Extracting events ({} tour pages) ===", links.len());

        // One extractor across every page: the tour name read from a page
        // heading carries over to pages that lack their own.
        let mut extractor = TourPageExtractor::new();

        for (i, link) in links.iter().enumerate() {
            let html = scraper
                .fetch_tour_page(link)
                .await
                .with_context(|| format!("fetch_tour_page({})", link))?;

            let before = extractor.events().len();
            extractor
                .feed(&html)
                .with_context(|| format!("extract events from {}", link))?;

            info!(
                "[{}/{}] {}: {} events (tour: {})",
                i + 1,
                links.len(),
                link,
                extractor.events().len() - before,
                extractor.tour_name().unwrap_or("?"),
            );
        }

        // ── 3. Serialize ──────────────────────────────────────────────────────
        let events = extractor.into_events();
        let stats = PipelineStats {
            tours_processed: links.len(),
            events_collected: events.len(),
        };

        output::write_events(&self.config.output.csv_path, &events)
            .with_context(|| format!("write events to {:?}", self.config.output.csv_path))?;

        info!(
            "=== Done: {} tours | {} events → {:?} ===",
            stats.tours_processed, stats.events_collected, self.config.output.csv_path,
        );

        Ok(stats)
    }
}

#[derive(Debug)]
pub struct PipelineStats {
    pub tours_processed: usize,
    pub events_collected: usize,
}
