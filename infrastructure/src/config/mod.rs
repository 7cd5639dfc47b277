//! Configuration loading and validation

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileConfig, FileEngineConfig, FileOpenAiConfig, FileStorageConfig, FileTmdbConfig,
    FileTwilioConfig,
};
pub use loader::{ConfigError, ConfigLoader};
