//! Plan assembly and orchestration
//!
//! Resolves the venue, fetches and classifies the target-date forecast
//! and, when the target is not top-tier, runs the alternative-date
//! search. The venue is geocoded exactly once per request; the resolved
//! location is reused for every per-date lookup.

use crate::alternatives::AlternativeDateSearch;
use crate::api::{Geocoder, WeatherProvider};
use crate::models::{DateForecast, Plan, SuitabilityTier};
use crate::suitability::SuitabilityEngine;
use crate::{EventcastError, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

/// Orchestrates one analysis request into a [`Plan`]
pub struct PlanAssembler {
    geocoder: Arc<dyn Geocoder>,
    provider: Arc<dyn WeatherProvider>,
    search: AlternativeDateSearch,
}

impl PlanAssembler {
    pub fn new(geocoder: Arc<dyn Geocoder>, provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            geocoder,
            provider,
            search: AlternativeDateSearch::default(),
        }
    }

    /// Replace the default alternative-date search configuration
    #[must_use]
    pub fn with_search(mut self, search: AlternativeDateSearch) -> Self {
        self.search = search;
        self
    }

    /// Build a plan for an event at `venue_query` on `date_time`
    ///
    /// Fails with `InvalidInput` for a blank venue (before any network
    /// activity), `LocationNotFound` when geocoding yields no candidate
    /// and `WeatherUnavailable` when the primary forecast fetch fails.
    /// Per-date failures inside the alternative search are recovered by
    /// omission and never surface here.
    pub async fn build_plan(&self, venue_query: &str, date_time: DateTime<Utc>) -> Result<Plan> {
        let venue = venue_query.trim();
        if venue.is_empty() {
            return Err(EventcastError::invalid_input("Venue cannot be empty"));
        }

        let target_date = date_time.date_naive();
        info!("Analyzing {} on {}", venue, target_date);

        // Resolved once, reused for the primary and every alternative lookup.
        let location = self.geocoder.resolve(venue).await?;
        debug!(
            "Venue resolved to {} ({})",
            location.name,
            location.format_coordinates()
        );

        let observation = self.provider.fetch_for_date(&location, target_date).await?;
        let tier = SuitabilityEngine::assess(&observation);
        let primary_forecast = DateForecast {
            date: target_date,
            observation,
            location: location.clone(),
            tier,
        };
        info!("Target date {} assessed as {}", target_date, tier);

        let alternatives = if tier == SuitabilityTier::Perfect {
            Vec::new()
        } else {
            self.search
                .search(self.provider.as_ref(), &location, target_date)
                .await
        };

        Ok(Plan {
            target_date_time: date_time,
            venue_query: venue.to_string(),
            primary_forecast,
            alternatives,
        })
    }
}
