use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eventcast::{
    classify::{ConditionTag, UvLevel},
    outfits, AlternativeDateSearch, EventcastConfig, OpenMeteoClient, Plan, PlanAssembler,
};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Eventcast - outdoor event weather planning (powered by Open-Meteo, no API key required)");
    println!();
    println!("Usage: eventcast <venue> <date: YYYY-MM-DD> [time: HH:MM]");
    println!();
    println!("Example: eventcast \"Lake Bled\" 2026-09-12 15:30");
}

fn parse_target(date: &str, time: Option<&str>) -> Result<DateTime<Utc>> {
    let date: NaiveDate = date
        .parse()
        .with_context(|| format!("Invalid date '{date}', expected YYYY-MM-DD"))?;
    let time = match time {
        Some(t) => NaiveTime::parse_from_str(t, "%H:%M")
            .with_context(|| format!("Invalid time '{t}', expected HH:MM"))?,
        None => NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
    };
    Ok(date.and_time(time).and_utc())
}

fn uv_advisory(uv_index: Option<f32>) -> Option<&'static str> {
    uv_index.and_then(|uv| UvLevel::from_index(uv).warning())
}

fn print_plan(plan: &Plan, max_alternatives: usize) {
    let primary = &plan.primary_forecast;
    let condition = ConditionTag::from_wmo_code(primary.observation.weather_code);

    println!(
        "Venue:  {} ({})",
        primary.location.name, primary.location.country_code
    );
    println!("Date:   {}", primary.date);
    println!(
        "Weather: {}, {:.1}°C (feels like {:.1}°C), wind {:.0} km/h, humidity {}%",
        condition,
        primary.observation.temperature_c,
        primary.observation.apparent_temperature_c,
        primary.observation.wind_speed_kmh,
        primary.observation.relative_humidity_pct
    );
    if let Some(advisory) = uv_advisory(primary.observation.uv_index) {
        println!("UV advisory: {advisory}");
    }
    println!("Suitability: {}", primary.tier);
    println!(
        "Outfit idea: search for \"{}\"",
        outfits::outfit_keyword(condition)
    );

    if plan.target_is_perfect() {
        println!();
        println!("Your date looks perfect - no alternatives needed.");
        return;
    }

    if plan.alternatives.is_empty() {
        println!();
        println!("No alternative dates could be evaluated.");
        return;
    }

    println!();
    println!("Better nearby dates:");
    for forecast in plan.alternatives.iter().take(max_alternatives) {
        let condition = ConditionTag::from_wmo_code(forecast.observation.weather_code);
        println!(
            "  {} - {} ({}, {:.1}°C, wind {:.0} km/h)",
            forecast.date,
            forecast.tier,
            condition,
            forecast.observation.temperature_c,
            forecast.observation.wind_speed_kmh
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = EventcastConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let venue = &args[0];
    let target = parse_target(&args[1], args.get(2).map(String::as_str))?;

    let client = Arc::new(OpenMeteoClient::new(&config)?);
    let assembler = PlanAssembler::new(client.clone(), client).with_search(
        AlternativeDateSearch::new(
            config.search.radius_days,
            config.search.max_concurrent_fetches,
        ),
    );

    match assembler.build_plan(venue, target).await {
        Ok(plan) => {
            print_plan(&plan, config.search.max_alternatives);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_defaults_to_noon() {
        let target = parse_target("2026-09-12", None).unwrap();
        assert_eq!(target.to_rfc3339(), "2026-09-12T12:00:00+00:00");
    }

    #[test]
    fn test_uv_advisory_only_above_moderate() {
        assert!(uv_advisory(None).is_none());
        assert!(uv_advisory(Some(3.0)).is_none());
        assert_eq!(
            uv_advisory(Some(7.0)),
            Some("Wear sunscreen and protective clothing")
        );
        assert!(uv_advisory(Some(11.0)).is_some());
    }
}
