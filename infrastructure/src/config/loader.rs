//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Missing required configuration: {0}")]
    MissingKey(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `REELBOT_`-prefixed environment variables
    ///    (double underscore separates sections: `REELBOT_TMDB__API_KEY`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./reelbot.toml` or `./.reelbot.toml`
    /// 4. Global: `~/.config/reelbot/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        for filename in &["reelbot.toml", ".reelbot.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("REELBOT_").split("__"));

        figment.extract().map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// The global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("reelbot").join("config.toml"))
    }

    /// The watched-list file: configured path, or the platform data dir.
    pub fn watched_store_path(config: &FileConfig) -> PathBuf {
        if !config.storage.watched_path.is_empty() {
            return PathBuf::from(&config.storage.watched_path);
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("reelbot")
            .join("watched.json")
    }
}
