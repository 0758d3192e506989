//! Weather condition and health-risk classification
//!
//! Pure mappings from raw observation values to discrete tags: WMO
//! weather code to condition, UV index to exposure level, PM2.5 to air
//! quality level. No I/O.

use serde::{Deserialize, Serialize};

/// Discrete weather condition derived from a WMO code
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionTag {
    Clear,
    PartlyCloudy,
    Cloudy,
    Foggy,
    Drizzle,
    Rainy,
    Snowy,
    Stormy,
}

impl ConditionTag {
    /// Map a WMO weather code to a condition tag
    ///
    /// Total: unknown codes fall through to `Cloudy` rather than erroring.
    #[must_use]
    pub const fn from_wmo_code(code: u8) -> Self {
        match code {
            0 => ConditionTag::Clear,
            1..=3 => ConditionTag::PartlyCloudy,
            45 | 48 => ConditionTag::Foggy,
            51 | 53 | 55 | 56 | 57 => ConditionTag::Drizzle,
            61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => ConditionTag::Rainy,
            71 | 73 | 75 | 77 | 85 | 86 => ConditionTag::Snowy,
            95 | 96 | 99 => ConditionTag::Stormy,
            _ => ConditionTag::Cloudy,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            ConditionTag::Clear => "Clear",
            ConditionTag::PartlyCloudy => "Partly Cloudy",
            ConditionTag::Cloudy => "Cloudy",
            ConditionTag::Foggy => "Foggy",
            ConditionTag::Drizzle => "Drizzle",
            ConditionTag::Rainy => "Rainy",
            ConditionTag::Snowy => "Snowy",
            ConditionTag::Stormy => "Stormy",
        }
    }
}

impl std::fmt::Display for ConditionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// UV exposure level derived from the UV index
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UvLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvLevel {
    #[must_use]
    pub fn from_index(uv_index: f32) -> Self {
        match uv_index {
            i if i <= 2.0 => UvLevel::Low,
            i if i <= 5.0 => UvLevel::Moderate,
            i if i <= 7.0 => UvLevel::High,
            i if i <= 10.0 => UvLevel::VeryHigh,
            _ => UvLevel::Extreme,
        }
    }

    /// Advisory text for elevated levels; benign levels carry none
    #[must_use]
    pub const fn warning(self) -> Option<&'static str> {
        match self {
            UvLevel::Low | UvLevel::Moderate => None,
            UvLevel::High => Some("Wear sunscreen and protective clothing"),
            UvLevel::VeryHigh => Some("Avoid sun exposure between 10 AM - 4 PM"),
            UvLevel::Extreme => Some("Stay indoors! Dangerous UV levels"),
        }
    }
}

/// Air quality level derived from PM2.5 concentration
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AirQualityLevel {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AirQualityLevel {
    #[must_use]
    pub fn from_pm2_5(pm2_5: f32) -> Self {
        match pm2_5 {
            p if p <= 12.0 => AirQualityLevel::Good,
            p if p <= 35.0 => AirQualityLevel::Moderate,
            p if p <= 55.0 => AirQualityLevel::UnhealthyForSensitive,
            p if p <= 150.0 => AirQualityLevel::Unhealthy,
            p if p <= 250.0 => AirQualityLevel::VeryUnhealthy,
            _ => AirQualityLevel::Hazardous,
        }
    }

    /// Advisory text for elevated levels; benign levels carry none
    #[must_use]
    pub const fn warning(self) -> Option<&'static str> {
        match self {
            AirQualityLevel::Good | AirQualityLevel::Moderate => None,
            AirQualityLevel::UnhealthyForSensitive => {
                Some("Sensitive people should limit outdoor activities")
            }
            AirQualityLevel::Unhealthy => Some("Everyone should limit outdoor activities"),
            AirQualityLevel::VeryUnhealthy => Some("Avoid outdoor activities!"),
            AirQualityLevel::Hazardous => Some("Emergency conditions! Stay indoors!"),
        }
    }
}
