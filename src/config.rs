//! Configuration management for the `Eventcast` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::EventcastError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `Eventcast` application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventcastConfig {
    /// Weather and geocoding API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Alternative-date search configuration
    #[serde(default)]
    pub search: SearchConfig,
    /// Outfit image provider configuration
    #[serde(default)]
    pub outfits: OutfitsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the forecast API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Base URL for the geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for failed requests
    #[serde(default = "default_weather_max_retries")]
    pub max_retries: u32,
}

/// Alternative-date search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search radius around the target date, in days
    #[serde(default = "default_radius_days")]
    pub radius_days: u32,
    /// Maximum number of alternatives shown to the user
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,
    /// Concurrency cap for per-date weather fetches
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,
}

/// Outfit image provider settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutfitsConfig {
    /// Unsplash access key; outfit suggestions are disabled without one
    pub unsplash_access_key: Option<String>,
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
fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_weather_timeout() -> u32 {
    30
}

fn default_weather_max_retries() -> u32 {
    3
}

fn default_radius_days() -> u32 {
    7
}

fn default_max_alternatives() -> usize {
    5
}

fn default_max_concurrent_fetches() -> usize {
    4
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            geocoding_base_url: default_geocoding_base_url(),
            timeout_seconds: default_weather_timeout(),
            max_retries: default_weather_max_retries(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius_days: default_radius_days(),
            max_alternatives: default_max_alternatives(),
            max_concurrent_fetches: default_max_concurrent_fetches(),
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

impl EventcastConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides with EVENTCAST_ prefix
        builder = builder.add_source(
            Environment::with_prefix("EVENTCAST")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: EventcastConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("eventcast").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds == 0 || self.weather.timeout_seconds > 300 {
            return Err(
                EventcastError::config("Weather API timeout must be between 1 and 300 seconds")
                    .into(),
            );
        }

        if self.weather.max_retries > 10 {
            return Err(
                EventcastError::config("Weather API max retries cannot exceed 10").into(),
            );
        }

        if self.search.radius_days > 30 {
            return Err(EventcastError::config("Search radius cannot exceed 30 days").into());
        }

        if self.search.max_concurrent_fetches == 0 || self.search.max_concurrent_fetches > 16 {
            return Err(
                EventcastError::config("Concurrent fetch cap must be between 1 and 16").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(EventcastError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(EventcastError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for url in [&self.weather.base_url, &self.weather.geocoding_base_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(EventcastError::config(
                    "API base URLs must be valid HTTP or HTTPS URLs",
                )
                .into());
            }
        }

        if let Some(key) = &self.outfits.unsplash_access_key {
            if key.is_empty() {
                return Err(EventcastError::config(
                    "Unsplash access key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }
        }

        Ok(())
    }
}
