use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub scraper: ScraperConfig,
    pub output: OutputConfig,
}

/// Scraper configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScraperConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_listing_path")]
    pub listing_path: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
}

// ── Defaults ─────────────────────────────────────────────────────────────────

fn default_base_url() -> String {
    "https://www.queenconcerts.com".to_string()
}
fn default_listing_path() -> String {
    "/live/queen.html".to_string()
}
fn default_timeout_secs() -> u64 {
    5
}
fn default_user_agent() -> String {
    // The site answers plain bot agents with an error page.
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppWebKit/537.36 (KHTML, like Gecko) \
     Chrome/94.0.4606.81 Safari/537.36"
        .to_string()
}
fn default_csv_path() -> PathBuf {
    PathBuf::from("events.csv")
}

// ── Loader ───────────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load configuration from file + environment overrides
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(
                config::File::with_name("config/default")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(
                config::File::with_name("config/local")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(config::Environment::with_prefix("CONCERT").separator("__"))
            .build()?;

        let app_cfg: AppConfig = cfg.try_deserialize().unwrap_or_else(|_| AppConfig::default());
        Ok(app_cfg)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scraper: ScraperConfig {
                base_url: default_base_url(),
                listing_path: default_listing_path(),
                timeout_secs: default_timeout_secs(),
                user_agent: default_user_agent(),
            },
            output: OutputConfig {
                csv_path: default_csv_path(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pin_the_site_contract() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.scraper.base_url, "https://www.queenconcerts.com");
        assert_eq!(cfg.scraper.listing_path, "/live/queen.html");
        assert_eq!(cfg.scraper.timeout_secs, 5);
        assert!(cfg.scraper.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(cfg.output.csv_path, PathBuf::from("events.csv"));
    }
}
