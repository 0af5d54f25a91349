use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid max_interactions: {0}. Must be at least 1")]
    InvalidMaxInteractions(u32),

    #[error("Invalid gateway provider: {0}. Must be one of: openai, mock")]
    InvalidProvider(String),

    #[error("Gateway base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("Gateway {0} model cannot be empty")]
    EmptyModel(&'static str),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. adjutant.yaml in the working directory (optional)
    /// 3. Environment variables (ADJUTANT_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("adjutant.yaml"))
            .merge(Env::prefixed("ADJUTANT_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("ADJUTANT_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_providers = ["openai", "mock"];
        if !valid_providers.contains(&config.gateway.provider.as_str()) {
            return Err(ConfigError::InvalidProvider(config.gateway.provider.clone()));
        }

        if config.gateway.base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        if config.gateway.completion_model.is_empty() {
            return Err(ConfigError::EmptyModel("completion"));
        }

        if config.gateway.embedding_model.is_empty() {
            return Err(ConfigError::EmptyModel("embedding"));
        }

        if config.gateway.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.gateway.timeout_secs));
        }

        if config.evaluation.max_interactions == 0 {
            return Err(ConfigError::InvalidMaxInteractions(
                config.evaluation.max_interactions,
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
