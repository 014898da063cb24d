pub mod cleaner;
pub mod http_client;
pub mod parsers;

use crate::config::ScraperConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use self::http_client::HttpClient;
use self::parsers::ListingExtractor;

pub use self::parsers::TourPageExtractor;

// ── Source trait ──────────────────────────────────────────────────────────────

/// Swappable page source abstraction.
#[async_trait]
pub trait ConcertSource: Send + Sync {
    async fn fetch_tour_links(&self) -> Result<Vec<String>>;
    async fn fetch_tour_page(&self, href: &str) -> Result<String>;
}

// ── queenconcerts scraper ─────────────────────────────────────────────────────

pub struct QueenConcertsScraper {
    client: HttpClient,
    base_url: Url,
    listing_path: String,
}

impl QueenConcertsScraper {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid base URL {:?}", config.base_url))?;

        Ok(Self {
            client: HttpClient::new(config)?,
            base_url,
            listing_path: config.listing_path.clone(),
        })
    }

    /// Resolve a (usually site-relative) href against the base URL.
    fn page_url(&self, href: &str) -> Result<Url> {
        self.base_url
            .join(href)
            .with_context(|| format!("Unresolvable link {:?}", href))
    }
}

#[async_trait]
impl ConcertSource for QueenConcertsScraper {
    async fn fetch_tour_links(&self) -> Result<Vec<String>> {
        let url = self.page_url(&self.listing_path)?;
        info!("Fetching tour listing ({})", url);

        let html = self
            .client
            .get_text(url.as_str())
            .await
            .context("Failed to fetch tour listing page")?;

        let mut extractor = ListingExtractor::new();
        extractor.feed(&html);
        let links = extractor.into_links();

        debug!("Listing page yielded {} links", links.len());
        Ok(links)
    }

    async fn fetch_tour_page(&self, href: &str) -> Result<String> {
        let url = self.page_url(href)?;
        debug!("Fetching tour page: {}", url);

        self.client
            .get_text(url.as_str())
            .await
            .with_context(|| format!("Failed to fetch tour page {}", href))
    }
}
