//! `Eventcast` - Outdoor-event weather suitability and date planning
//!
//! This library classifies per-date weather into event-suitability
//! tiers, searches nearby dates for better conditions, and assembles
//! the result into a plan for a venue and target date.

pub mod alternatives;
pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod models;
pub mod outfits;
pub mod planner;
pub mod suitability;

// Re-export core types for public API
pub use alternatives::AlternativeDateSearch;
pub use api::{Geocoder, OpenMeteoClient, WeatherProvider};
pub use classify::{AirQualityLevel, ConditionTag, UvLevel};
pub use config::EventcastConfig;
pub use error::EventcastError;
pub use models::{DateForecast, Location, Plan, SuitabilityTier, WeatherObservation};
pub use outfits::{OutfitItem, OutfitProvider, UnsplashClient};
pub use planner::PlanAssembler;
pub use suitability::SuitabilityEngine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, EventcastError>;
