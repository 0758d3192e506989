//! Open-Meteo API client for weather and geocoding
//!
//! This module defines the collaborator contracts consumed by the core
//! (weather provider and geocoder) and the HTTP implementation backed
//! by the Open-Meteo forecast and geocoding APIs, with retrying
//! middleware and request timeouts. Transport failures surface as
//! `WeatherUnavailable`; an empty geocoding result surfaces as
//! `LocationNotFound`.

use crate::config::EventcastConfig;
use crate::models::{Location, WeatherObservation};
use crate::{EventcastError, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Per-date weather lookup capability
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the representative observation for a location on a date
    async fn fetch_for_date(
        &self,
        location: &Location,
        date: NaiveDate,
    ) -> Result<WeatherObservation>;
}

/// Free-text place resolution capability
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a place name to its best-matching location
    async fn resolve(&self, place_name: &str) -> Result<Location>;

    /// Offer candidate matches for an incomplete query
    async fn suggest(&self, prefix: &str, limit: usize) -> Result<Vec<Location>>;
}

/// HTTP client for the Open-Meteo forecast and geocoding APIs
pub struct OpenMeteoClient {
    client: ClientWithMiddleware,
    forecast_base_url: String,
    geocoding_base_url: String,
}

impl OpenMeteoClient {
    /// Create a client from configuration
    pub fn new(config: &EventcastConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.weather.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("Eventcast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| EventcastError::config(format!("Failed to create HTTP client: {e}")))?;

        let retry_policy =
            ExponentialBackoff::builder().build_with_max_retries(config.weather.max_retries);
        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            forecast_base_url: config.weather.base_url.clone(),
            geocoding_base_url: config.weather.geocoding_base_url.clone(),
        })
    }

    async fn geocode(&self, query: &str, count: usize) -> Result<Vec<Location>> {
        let url = format!(
            "{}/search?name={}&count={}&language=en&format=json",
            self.geocoding_base_url,
            urlencoding::encode(query),
            count
        );
        debug!("Geocoding request URL: {}", url);

        let response: open_meteo::GeocodingResponse =
            self.client.get(&url).send().await?.json().await?;

        Ok(response
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Location::from)
            .collect())
    }
}

#[async_trait]
impl Geocoder for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn resolve(&self, place_name: &str) -> Result<Location> {
        let mut candidates = self.geocode(place_name, 1).await?;
        if candidates.is_empty() {
            return Err(EventcastError::location_not_found(place_name));
        }
        let location = candidates.remove(0);
        info!(
            "Resolved '{}' to {} ({})",
            place_name,
            location.name,
            location.format_coordinates()
        );
        Ok(location)
    }

    #[instrument(skip(self))]
    async fn suggest(&self, prefix: &str, limit: usize) -> Result<Vec<Location>> {
        if prefix.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.geocode(prefix, limit).await
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    #[instrument(skip(self, location), fields(name = %location.name))]
    async fn fetch_for_date(
        &self,
        location: &Location,
        date: NaiveDate,
    ) -> Result<WeatherObservation> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&hourly=temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,weather_code,uv_index&wind_speed_unit=kmh&timezone=auto&start_date={date}&end_date={date}",
            self.forecast_base_url, location.latitude, location.longitude
        );
        debug!("Forecast request URL: {}", url);

        let response: open_meteo::ForecastResponse =
            self.client.get(&url).send().await?.json().await?;

        let hourly = response.hourly.ok_or_else(|| {
            EventcastError::weather_unavailable(format!("No hourly data returned for {date}"))
        })?;

        let observation = open_meteo::midday_observation(&hourly).ok_or_else(|| {
            EventcastError::weather_unavailable(format!("Empty hourly series for {date}"))
        })?;

        debug!(
            "Fetched observation for {} on {}: {:.1}°C, code {}",
            location.name, date, observation.temperature_c, observation.weather_code
        );

        Ok(observation)
    }
}

/// `Open-Meteo` API response structures and conversion utilities
mod open_meteo {
    use super::*;
    use serde::Deserialize;

    /// Forecast response from the `Open-Meteo` API
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub hourly: Option<HourlyData>,
    }

    /// Hourly weather data from `Open-Meteo`
    #[derive(Debug, Deserialize)]
    pub struct HourlyData {
        pub time: Vec<String>,
        #[serde(rename = "temperature_2m")]
        pub temperature: Option<Vec<Option<f32>>>,
        #[serde(rename = "apparent_temperature")]
        pub apparent_temperature: Option<Vec<Option<f32>>>,
        #[serde(rename = "relative_humidity_2m")]
        pub relative_humidity: Option<Vec<Option<u8>>>,
        #[serde(rename = "wind_speed_10m")]
        pub wind_speed: Option<Vec<Option<f32>>>,
        #[serde(rename = "weather_code")]
        pub weather_code: Option<Vec<Option<u8>>>,
        #[serde(rename = "uv_index")]
        pub uv_index: Option<Vec<Option<f32>>>,
    }

    /// Geocoding response from `Open-Meteo`
    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub country: Option<String>,
        #[serde(rename = "country_code")]
        pub country_code: Option<String>,
    }

    impl From<GeocodingResult> for Location {
        fn from(result: GeocodingResult) -> Self {
            Location {
                name: result.name,
                country_code: result
                    .country_code
                    .or(result.country)
                    .unwrap_or_else(|| "??".to_string()),
                latitude: result.latitude,
                longitude: result.longitude,
            }
        }
    }

    fn value_at<T: Copy>(series: &Option<Vec<Option<T>>>, index: usize) -> Option<T> {
        series.as_ref().and_then(|values| *values.get(index)?)
    }

    /// Pick the midday slot as the day's representative observation
    ///
    /// Falls back to the middle of whatever slots were returned when
    /// the series is shorter than a full day. Returns `None` when any
    /// required series is absent or null at the chosen slot.
    pub fn midday_observation(hourly: &HourlyData) -> Option<WeatherObservation> {
        if hourly.time.is_empty() {
            return None;
        }

        let index = if hourly.time.len() > 12 {
            12
        } else {
            hourly.time.len() / 2
        };

        let timestamp = NaiveDateTime::parse_from_str(&hourly.time[index], "%Y-%m-%dT%H:%M")
            .map_or_else(|_| Utc::now(), |dt| dt.and_utc());

        Some(WeatherObservation {
            timestamp,
            temperature_c: value_at(&hourly.temperature, index)?,
            apparent_temperature_c: value_at(&hourly.apparent_temperature, index)
                .or_else(|| value_at(&hourly.temperature, index))?,
            wind_speed_kmh: value_at(&hourly.wind_speed, index)?,
            relative_humidity_pct: value_at(&hourly.relative_humidity, index)?,
            weather_code: value_at(&hourly.weather_code, index)?,
            uv_index: value_at(&hourly.uv_index, index),
            pm2_5: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::open_meteo::{midday_observation, HourlyData};

    fn series<T: Copy>(value: T, len: usize) -> Option<Vec<Option<T>>> {
        Some(vec![Some(value); len])
    }

    fn hourly(len: usize) -> HourlyData {
        HourlyData {
            time: (0..len)
                .map(|h| format!("2026-06-15T{h:02}:00"))
                .collect(),
            temperature: series(21.5, len),
            apparent_temperature: series(22.0, len),
            relative_humidity: series(45u8, len),
            wind_speed: series(8.0, len),
            weather_code: series(1u8, len),
            uv_index: series(4.0, len),
        }
    }

    #[test]
    fn test_midday_observation_picks_noon_slot() {
        let observation = midday_observation(&hourly(24)).unwrap();
        assert_eq!(
            observation.timestamp.to_rfc3339(),
            "2026-06-15T12:00:00+00:00"
        );
        assert_eq!(observation.temperature_c, 21.5);
        assert_eq!(observation.relative_humidity_pct, 45);
        assert_eq!(observation.weather_code, 1);
        assert_eq!(observation.uv_index, Some(4.0));
    }

    #[test]
    fn test_midday_observation_short_series_uses_middle() {
        let observation = midday_observation(&hourly(6)).unwrap();
        assert_eq!(
            observation.timestamp.to_rfc3339(),
            "2026-06-15T03:00:00+00:00"
        );
    }

    #[test]
    fn test_midday_observation_empty_series() {
        let mut empty = hourly(0);
        empty.time.clear();
        assert!(midday_observation(&empty).is_none());
    }

    #[test]
    fn test_missing_temperature_yields_none() {
        let mut data = hourly(24);
        data.temperature = None;
        assert!(midday_observation(&data).is_none());
    }

    #[test]
    fn test_missing_humidity_yields_none() {
        let mut data = hourly(24);
        data.relative_humidity = None;
        assert!(midday_observation(&data).is_none());
    }

    #[test]
    fn test_missing_weather_code_yields_none() {
        let mut data = hourly(24);
        data.weather_code = None;
        assert!(midday_observation(&data).is_none());
    }

    #[test]
    fn test_null_slot_in_required_series_yields_none() {
        let mut data = hourly(24);
        if let Some(codes) = data.weather_code.as_mut() {
            codes[12] = None;
        }
        assert!(midday_observation(&data).is_none());
    }
}
