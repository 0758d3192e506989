//! Alternative-date search and ranking
//!
//! Enumerates a window of dates around a target, fetches a weather
//! observation for each through the provider, classifies them and
//! returns the candidates ranked by a composite of weather quality and
//! temporal proximity to the target.

use crate::api::WeatherProvider;
use crate::models::{DateForecast, Location, SuitabilityTier};
use crate::suitability::SuitabilityEngine;
use chrono::{Duration, NaiveDate};
use futures::{stream, StreamExt};
use tracing::{debug, warn};

/// Default search radius around the target date, in days
pub const DEFAULT_RADIUS_DAYS: u32 = 7;

/// Default cap on concurrent per-date weather fetches
pub const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Composite score for an alternative date
///
/// Weather-quality weight plus a proximity term that decays linearly to
/// zero at 10 days from the target.
#[must_use]
pub fn composite_score(tier: SuitabilityTier, days_from_target: i64) -> i32 {
    let proximity = (50 - 5 * days_from_target.unsigned_abs() as i32).max(0);
    tier.tier_weight() + proximity
}

/// Windowed search for better event dates near a target date
pub struct AlternativeDateSearch {
    radius_days: u32,
    max_concurrent: usize,
}

impl Default for AlternativeDateSearch {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS_DAYS, DEFAULT_MAX_CONCURRENT)
    }
}

impl AlternativeDateSearch {
    pub fn new(radius_days: u32, max_concurrent: usize) -> Self {
        Self {
            radius_days,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Search the window around `target_date` and return ranked candidates
    ///
    /// The target date itself is never a candidate. A failed per-date
    /// fetch drops that date from the result set; it never aborts the
    /// search. The returned sequence is the full ranked set, sorted by
    /// score descending with earlier dates winning ties.
    pub async fn search(
        &self,
        provider: &dyn WeatherProvider,
        location: &Location,
        target_date: NaiveDate,
    ) -> Vec<DateForecast> {
        let radius = i64::from(self.radius_days);
        let candidate_dates: Vec<NaiveDate> = (-radius..=radius)
            .filter(|offset| *offset != 0)
            .map(|offset| target_date + Duration::days(offset))
            .collect();

        debug!(
            "Searching {} candidate dates within {} days of {}",
            candidate_dates.len(),
            self.radius_days,
            target_date
        );

        // buffered() preserves submission order, so results come back
        // collated by date even though fetches overlap.
        let results: Vec<(NaiveDate, Option<DateForecast>)> = stream::iter(candidate_dates)
            .map(|date| async move {
                match provider.fetch_for_date(location, date).await {
                    Ok(observation) => {
                        let tier = SuitabilityEngine::assess(&observation);
                        let forecast = DateForecast {
                            date,
                            observation,
                            location: location.clone(),
                            tier,
                        };
                        (date, Some(forecast))
                    }
                    Err(e) => {
                        debug!("Skipping {}: {}", date, e);
                        (date, None)
                    }
                }
            })
            .buffered(self.max_concurrent)
            .collect()
            .await;

        let skipped = results.iter().filter(|(_, f)| f.is_none()).count();
        if skipped > 0 {
            warn!(
                "Skipped {} of {} candidate dates due to fetch failures",
                skipped,
                2 * self.radius_days
            );
        }

        let mut scored: Vec<(i32, DateForecast)> = results
            .into_iter()
            .filter_map(|(date, forecast)| {
                forecast.map(|f| {
                    let days_away = (date - target_date).num_days();
                    (composite_score(f.tier, days_away), f)
                })
            })
            .collect();

        // Score descending; equal scores resolve to the earlier date so
        // the ranking is deterministic.
        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.date.cmp(&b.1.date)));

        scored.into_iter().map(|(_, forecast)| forecast).collect()
    }
}
