//! Configuration management for the `TripBud` backend
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables, and validates the result.

use crate::TripBudError;
use crate::catalog::{Catalog, DEFAULT_CITY};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the provider credential
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "TRIPBUD_CONFIG";

/// Root configuration structure for the `TripBud` backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TripBudConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Language-model provider settings
    pub provider: ProviderConfig,
    /// Live generation settings
    pub generation: GenerationConfig,
    /// Catalog fallback settings
    pub fallback: FallbackConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Credential; falls back to `ANTHROPIC_API_KEY` when unset
    pub api_key: Option<String>,
    /// Base URL of the Messages API
    #[serde(default = "default_provider_base_url")]
    pub base_url: String,
    /// Model identifier sent with every request
    #[serde(default = "default_provider_model")]
    pub model: String,
    /// Maximum output tokens per reply
    #[serde(default = "default_provider_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds, none when unset
    pub timeout_seconds: Option<u64>,
}

/// Live generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Cap on recommendations taken from a provider reply
    #[serde(default = "default_max_live_results")]
    pub max_live_results: usize,
}

/// Catalog fallback settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Catalog key used for unknown cities
    #[serde(default = "default_fallback_city")]
    pub default_city: String,
    /// Cap on catalog entries returned
    #[serde(default = "default_fallback_max_results")]
    pub max_results: usize,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_provider_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_provider_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_provider_max_tokens() -> u32 {
    2000
}

fn default_max_live_results() -> usize {
    12
}

fn default_fallback_city() -> String {
    DEFAULT_CITY.to_string()
}

fn default_fallback_max_results() -> usize {
    crate::fallback::DEFAULT_MAX_RESULTS
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_provider_base_url(),
            model: default_provider_model(),
            max_tokens: default_provider_max_tokens(),
            timeout_seconds: None,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_live_results: default_max_live_results(),
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            default_city: default_fallback_city(),
            max_results: default_fallback_max_results(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TripBudConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
        Self::load_from_path(path)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("tripbud.toml"));
        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. TRIPBUD_SERVER__PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("TRIPBUD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripBudConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        if config.provider.api_key.is_none() {
            config.provider.api_key = std::env::var(API_KEY_ENV).ok();
        }

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Normalize empty values
    pub fn apply_defaults(&mut self) {
        // An empty credential means "not configured"
        if self
            .provider
            .api_key
            .as_deref()
            .is_some_and(|key| key.trim().is_empty())
        {
            self.provider.api_key = None;
        }
        if self.provider.base_url.is_empty() {
            self.provider.base_url = default_provider_base_url();
        }
        if self.provider.model.is_empty() {
            self.provider.model = default_provider_model();
        }
        if self.fallback.default_city.is_empty() {
            self.fallback.default_city = default_fallback_city();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// The provider credential, if one is configured
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.provider.api_key.as_deref()
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if !(1..=8192).contains(&self.provider.max_tokens) {
            return Err(
                TripBudError::config("Provider max_tokens must be between 1 and 8192").into(),
            );
        }

        if self.provider.timeout_seconds == Some(0) {
            return Err(
                TripBudError::config("Provider timeout must be positive when set").into(),
            );
        }

        if self.generation.max_live_results == 0 {
            return Err(TripBudError::config("max_live_results must be at least 1").into());
        }

        if self.fallback.max_results == 0 {
            return Err(
                TripBudError::config("Fallback max_results must be at least 1").into(),
            );
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripBudError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripBudError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.provider.base_url.starts_with("http://")
            && !self.provider.base_url.starts_with("https://")
        {
            return Err(
                TripBudError::config("Provider base URL must be a valid HTTP or HTTPS URL").into(),
            );
        }

        if !Catalog::global().contains(&self.fallback.default_city) {
            return Err(TripBudError::config(format!(
                "Fallback default city '{}' is not in the catalog",
                self.fallback.default_city
            ))
            .into());
        }

        Ok(())
    }
}
