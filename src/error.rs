//! Error types and handling for the `Eventcast` application

use thiserror::Error;

/// Main error type for the `Eventcast` application
#[derive(Error, Debug)]
pub enum EventcastError {
    /// Geocoding yielded no candidate for a venue query
    #[error("Location not found: {query}")]
    LocationNotFound { query: String },

    /// Weather data could not be fetched or parsed
    #[error("Weather unavailable: {message}")]
    WeatherUnavailable { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl EventcastError {
    /// Create a new location-not-found error
    pub fn location_not_found<S: Into<String>>(query: S) -> Self {
        Self::LocationNotFound {
            query: query.into(),
        }
    }

    /// Create a new weather-unavailable error
    pub fn weather_unavailable<S: Into<String>>(message: S) -> Self {
        Self::WeatherUnavailable {
            message: message.into(),
        }
    }

    /// Create a new input validation error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            EventcastError::LocationNotFound { query } => {
                format!("'{query}' was not found. Please check the spelling and try again.")
            }
            EventcastError::WeatherUnavailable { .. } => {
                "Unable to fetch weather data. Please check your internet connection and try again."
                    .to_string()
            }
            EventcastError::InvalidInput { message } => {
                format!("Invalid input: {message}")
            }
            EventcastError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            EventcastError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            EventcastError::General { message } => message.clone(),
        }
    }
}

impl From<reqwest::Error> for EventcastError {
    fn from(source: reqwest::Error) -> Self {
        Self::WeatherUnavailable {
            message: source.to_string(),
        }
    }
}

impl From<reqwest_middleware::Error> for EventcastError {
    fn from(source: reqwest_middleware::Error) -> Self {
        Self::WeatherUnavailable {
            message: source.to_string(),
        }
    }
}
