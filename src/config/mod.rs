//! # Configuration
//!
//! Where the bundled data lives, where an exported player progress snapshot
//! can be found, and how logging behaves.
//!
//! ```toml
//! [data]
//! dir = "./data"
//! toc_file = "./toc.json"
//! news_file = "./data/news.json"
//! drawers = ["2.x/2.0/1-msq.json"]
//!
//! [player]
//! progress_file = "progress.json"
//!
//! [logging]
//! level = "info"
//! file = "memoria.log"
//! ```
//!
//! Every section is optional; missing values fall back to [`Config::default`].

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::tracker::ARR_MSQ_DRAWERS;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Data root; drawer paths resolve under it.
    pub dir: String,
    pub toc_file: String,
    pub news_file: String,
    /// Main scenario drawers, relative to `dir`, in display order.
    pub drawers: Vec<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: "./data".to_string(),
            toc_file: "./toc.json".to_string(),
            news_file: "./data/news.json".to_string(),
            drawers: ARR_MSQ_DRAWERS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlayerConfig {
    /// Exported progress (`{"completed": [...], "grandCompany": n}`). Without
    /// one, the character counts as having completed nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parse `level`; unknown values fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
