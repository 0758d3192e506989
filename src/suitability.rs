//! Event-suitability assessment
//!
//! Maps a weather observation to one of four suitability tiers using a
//! fixed ordered decision list. Order matters: the ranges overlap, so a
//! rainy and cold day is `Unsuitable` (rule 1) rather than `Risky`
//! (rule 3).

use crate::models::{SuitabilityTier, WeatherObservation};

/// WMO codes that rule a day out entirely (rain and thunderstorms)
const RAIN_STORM_CODES: [u8; 9] = [61, 63, 65, 80, 81, 82, 95, 96, 99];

/// WMO codes for drizzle and light precipitation
const DRIZZLE_CODES: [u8; 5] = [51, 53, 55, 56, 57];

/// Assessment engine for event-day weather
pub struct SuitabilityEngine;

impl SuitabilityEngine {
    /// Assess an observation against the fixed threshold rules
    ///
    /// First matching rule wins; do not reorder.
    #[must_use]
    pub fn assess(observation: &WeatherObservation) -> SuitabilityTier {
        let code = observation.weather_code;
        let temperature = observation.temperature_c;
        let wind = observation.wind_speed_kmh;
        let humidity = observation.relative_humidity_pct;

        if RAIN_STORM_CODES.contains(&code) {
            return SuitabilityTier::Unsuitable;
        }

        if DRIZZLE_CODES.contains(&code) {
            return SuitabilityTier::Risky;
        }

        if temperature < 10.0 || temperature > 32.0 {
            return SuitabilityTier::Risky;
        }

        if wind > 25.0 {
            return SuitabilityTier::Risky;
        }

        if matches!(code, 0 | 1)
            && (18.0..=26.0).contains(&temperature)
            && wind < 15.0
            && humidity < 70
        {
            return SuitabilityTier::Perfect;
        }

        // Catch-all: partly-cloudy-acceptable days and every remaining
        // combination land here, including clear mild days that only
        // miss on humidity.
        SuitabilityTier::Good
    }
}
