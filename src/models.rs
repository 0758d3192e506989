//! Data models for weather observations, locations and event plans
//!
//! This module contains the core domain types shared by the classifier,
//! the suitability engine and the plan assembler.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single per-date weather observation for a location
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WeatherObservation {
    /// Timestamp of the sampled observation
    pub timestamp: DateTime<Utc>,
    /// Air temperature in Celsius
    pub temperature_c: f32,
    /// Apparent ("feels like") temperature in Celsius
    pub apparent_temperature_c: f32,
    /// Wind speed in km/h
    pub wind_speed_kmh: f32,
    /// Relative humidity percentage (0-100)
    pub relative_humidity_pct: u8,
    /// WMO weather code
    pub weather_code: u8,
    /// UV index, when the provider reports one
    pub uv_index: Option<f32>,
    /// PM2.5 concentration in µg/m³, when the provider reports one
    pub pm2_5: Option<f32>,
}

/// Geocoded location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Location name (city, venue, etc.)
    pub name: String,
    /// Country code (ISO 3166-1 alpha-2)
    pub country_code: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        country_code: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            country_code: country_code.into(),
            latitude,
            longitude,
        }
    }

    /// Format location as a coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Ordered event-suitability tier for a day's weather
///
/// Variants are declared worst-first so the derived `Ord` gives
/// `Unsuitable < Risky < Good < Perfect`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SuitabilityTier {
    /// Rain or storm expected
    Unsuitable,
    /// Marginal conditions (light precipitation, temperature extremes or wind)
    Risky,
    /// Acceptable conditions
    Good,
    /// Clear, mild, calm and dry
    Perfect,
}

impl SuitabilityTier {
    /// Weight of this tier in the alternative-date composite score
    #[must_use]
    pub const fn tier_weight(self) -> i32 {
        match self {
            SuitabilityTier::Perfect => 100,
            SuitabilityTier::Good => 75,
            SuitabilityTier::Risky => 40,
            SuitabilityTier::Unsuitable => 10,
        }
    }
}

impl std::fmt::Display for SuitabilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuitabilityTier::Perfect => write!(f, "Perfect"),
            SuitabilityTier::Good => write!(f, "Good"),
            SuitabilityTier::Risky => write!(f, "Risky"),
            SuitabilityTier::Unsuitable => write!(f, "Unsuitable"),
        }
    }
}

/// Classified forecast for one calendar date at one location
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DateForecast {
    /// Calendar date of this forecast
    pub date: NaiveDate,
    /// Observation the classification is based on
    pub observation: WeatherObservation,
    /// Location the observation was fetched for
    pub location: Location,
    /// Assessed suitability tier
    pub tier: SuitabilityTier,
}

/// Result of one analysis request
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Plan {
    /// Target date and time of the event
    pub target_date_time: DateTime<Utc>,
    /// Venue query the location was resolved from
    pub venue_query: String,
    /// Forecast for the target date
    pub primary_forecast: DateForecast,
    /// Ranked alternative dates; empty when the primary tier is Perfect
    pub alternatives: Vec<DateForecast>,
}

impl Plan {
    /// Whether the target date itself already has top-tier weather
    #[must_use]
    pub fn target_is_perfect(&self) -> bool {
        self.primary_forecast.tier == SuitabilityTier::Perfect
    }
}
