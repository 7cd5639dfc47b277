//! Raw TOML configuration data types
//!
//! These structs mirror the structure of `reelbot.toml`. Credentials can
//! also arrive through `REELBOT_`-prefixed environment variables (see
//! [`ConfigLoader`](super::loader::ConfigLoader)); validation of what is
//! actually required for the selected mode happens in [`FileConfig::validate`].

use reelbot_application::UnderstandingMode;
use serde::{Deserialize, Serialize};

use super::loader::ConfigError;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Understanding-path selection
    pub engine: FileEngineConfig,
    /// TMDb movie metadata provider
    pub tmdb: FileTmdbConfig,
    /// OpenAI-compatible text generation (model path only)
    pub openai: FileOpenAiConfig,
    /// Twilio WhatsApp delivery (only when sending replies out)
    pub twilio: FileTwilioConfig,
    /// Watched-list storage
    pub storage: FileStorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEngineConfig {
    /// "rules" (default) or "model"
    pub understanding: String,
}

impl Default for FileEngineConfig {
    fn default() -> Self {
        Self {
            understanding: "rules".to_string(),
        }
    }
}

impl FileEngineConfig {
    pub fn parse_understanding(&self) -> Result<UnderstandingMode, ConfigError> {
        self.understanding
            .parse::<UnderstandingMode>()
            .map_err(ConfigError::Invalid)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTmdbConfig {
    pub api_key: String,
    pub base_url: String,
}

impl Default for FileTmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.themoviedb.org/3".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

impl FileTwilioConfig {
    pub fn is_complete(&self) -> bool {
        !self.account_sid.is_empty() && !self.auth_token.is_empty() && !self.from_number.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Path of the watched-list JSON file. Empty means the platform data
    /// directory (`<data_dir>/reelbot/watched.json`).
    pub watched_path: String,
}

impl FileConfig {
    /// Check that everything the selected mode needs is present.
    ///
    /// A missing credential here is fatal at startup: the process cannot
    /// serve a single request without it, so it must not come up at all.
    pub fn validate(&self, mode: UnderstandingMode, with_delivery: bool) -> Result<(), ConfigError> {
        if self.tmdb.api_key.is_empty() {
            return Err(ConfigError::MissingKey("tmdb.api_key"));
        }
        if mode == UnderstandingMode::Model && self.openai.api_key.is_empty() {
            return Err(ConfigError::MissingKey("openai.api_key"));
        }
        if with_delivery && !self.twilio.is_complete() {
            return Err(ConfigError::MissingKey(
                "twilio.account_sid / twilio.auth_token / twilio.from_number",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_tmdb_key() -> FileConfig {
        let mut config = FileConfig::default();
        config.tmdb.api_key = "k".to_string();
        config
    }

    #[test]
    fn test_defaults_point_at_public_endpoints() {
        let config = FileConfig::default();
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.openai.base_url, "https://api.openai.com/v1");
        assert_eq!(config.engine.understanding, "rules");
    }

    #[test]
    fn test_validate_requires_tmdb_key() {
        let config = FileConfig::default();
        assert!(config.validate(UnderstandingMode::Rules, false).is_err());
        assert!(with_tmdb_key().validate(UnderstandingMode::Rules, false).is_ok());
    }

    #[test]
    fn test_validate_model_mode_requires_openai_key() {
        let mut config = with_tmdb_key();
        assert!(config.validate(UnderstandingMode::Model, false).is_err());
        config.openai.api_key = "sk-test".to_string();
        assert!(config.validate(UnderstandingMode::Model, false).is_ok());
    }

    #[test]
    fn test_validate_delivery_requires_full_twilio_trio() {
        let mut config = with_tmdb_key();
        config.twilio.account_sid = "AC123".to_string();
        assert!(config.validate(UnderstandingMode::Rules, true).is_err());
        config.twilio.auth_token = "t".to_string();
        config.twilio.from_number = "+15550000000".to_string();
        assert!(config.validate(UnderstandingMode::Rules, true).is_ok());
    }

    #[test]
    fn test_parse_understanding() {
        let mut engine = FileEngineConfig::default();
        assert_eq!(engine.parse_understanding().unwrap(), UnderstandingMode::Rules);
        engine.understanding = "model".to_string();
        assert_eq!(engine.parse_understanding().unwrap(), UnderstandingMode::Model);
        engine.understanding = "psychic".to_string();
        assert!(engine.parse_understanding().is_err());
    }
}
