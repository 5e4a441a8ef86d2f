//! Arrival reports.

use chrono::{DateTime, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Tz;
use std::collections::HashSet;

use super::siri::{MonitoredVisit, parse_visits};
use super::stops::{BUS_QUERIES, BusQuery};
use super::{Sink, StopMonitoring, TransitError, has_api_key};

const VISIT_SEPARATOR_WIDTH: usize = 20;
const QUERY_SEPARATOR_WIDTH: usize = 20;

/// Runs every configured query in order, all writing to `sink`.
///
/// Without a usable API key nothing is requested and the sink receives
/// setup instructions instead.
pub fn run_all_checks(feed: &dyn StopMonitoring, api_key: &str, sink: &mut dyn Sink) {
    if !has_api_key(api_key) {
        sink.emit("Please set your MTA_API_KEY in your environment variables".to_string());
        sink.emit("or pass --mta-api-key when starting the server.".to_string());
        return;
    }

    for query in &BUS_QUERIES {
        fetch_arrivals(feed, api_key, query, sink);
    }
}

/// Reports buses approaching one stop, timed against the current Eastern
/// time.
pub fn fetch_arrivals(
    feed: &dyn StopMonitoring,
    api_key: &str,
    query: &BusQuery,
    sink: &mut dyn Sink,
) {
    let now = Utc::now().with_timezone(&New_York);
    fetch_arrivals_at(feed, api_key, query, now, sink);
}

/// Reports buses approaching one stop relative to `now`.
///
/// Errors end this query's report with a single message line. The
/// closing separator is always written.
pub fn fetch_arrivals_at(
    feed: &dyn StopMonitoring,
    api_key: &str,
    query: &BusQuery,
    now: DateTime<Tz>,
    sink: &mut dyn Sink,
) {
    sink.emit(format!(
        "=== 🚌 Next {} Buses for Stop {} ===",
        query.route.id(),
        query.stop.name()
    ));
    sink.emit(format!("Current Time: {}", now.format("%I:%M:%S %p")));
    sink.emit(String::new());

    if let Err(e) = report_visits(feed, api_key, query, now, sink) {
        tracing::warn!(
            stop = query.stop.name(),
            route = query.route.id(),
            error = %e,
            "Bus arrival check failed"
        );
        sink.emit(error_line(&e));
    }

    sink.emit("=".repeat(QUERY_SEPARATOR_WIDTH));
}

fn report_visits(
    feed: &dyn StopMonitoring,
    api_key: &str,
    query: &BusQuery,
    now: DateTime<Tz>,
    sink: &mut dyn Sink,
) -> Result<(), TransitError> {
    let monitoring_ref = query.stop.monitoring_ref();
    let response = feed.fetch(monitoring_ref, api_key)?;
    let visits = parse_visits(&response)?;

    if visits.is_empty() {
        sink.emit(format!(
            "No buses are currently scheduled to arrive at stop {}.",
            monitoring_ref
        ));
        return Ok(());
    }

    // Bus Time repeats a vehicle when it serves the stop more than once
    let mut seen: HashSet<(String, u64)> = HashSet::new();

    for visit in visits {
        if visit.route != query.route.id()
            || visit.distance_miles >= query.max_distance_miles
            || !seen.insert((visit.route.clone(), visit.distance_miles.to_bits()))
        {
            continue;
        }

        sink.emit(format!("Route: {} (to {})", visit.route, visit.destination));
        sink.emit(format!("  Status: {}", visit.presentable_distance));
        sink.emit(format!(
            "  Calculated distance: {:.2} miles",
            visit.distance_miles
        ));
        if let Some(line) = arrival_line(&visit, now)? {
            sink.emit(line);
        }
        sink.emit("-".repeat(VISIT_SEPARATOR_WIDTH));
    }

    Ok(())
}

/// Arrival line from the live prediction, else the timetable.
fn arrival_line(visit: &MonitoredVisit, now: DateTime<Tz>) -> Result<Option<String>, TransitError> {
    if let Some(expected) = &visit.expected_arrival {
        let at = parse_time(expected)?;
        let delta = at.with_timezone(&Utc) - now.with_timezone(&Utc);
        // Whole minutes, truncated toward zero
        let minutes = delta.num_seconds() / 60;

        let line = match minutes {
            m if m < 0 => "  Arrival: Arriving now (or just departed)".to_string(),
            0 => "  Arrival: < 1 minute away".to_string(),
            m => format!(
                "  Arrival: {} min away (at {})",
                m,
                at.with_timezone(&New_York).format("%I:%M %p")
            ),
        };
        return Ok(Some(line));
    }

    if let Some(aimed) = &visit.aimed_arrival {
        let at = parse_time(aimed)?;
        return Ok(Some(format!(
            "  Arrival: Scheduled for {} (no live data)",
            at.with_timezone(&New_York).format("%I:%M %p")
        )));
    }

    Ok(None)
}

fn parse_time(value: &str) -> Result<DateTime<chrono::FixedOffset>, TransitError> {
    DateTime::parse_from_rfc3339(value).map_err(|source| TransitError::Timestamp {
        value: value.to_string(),
        source,
    })
}

fn error_line(error: &TransitError) -> String {
    match error {
        TransitError::Status { .. } | TransitError::Transport(_) => {
            format!("Error fetching data from the MTA API: {}", error)
        }
        TransitError::Shape(_) => {
            "Could not parse the API response. This may mean no buses are running.".to_string()
        }
        TransitError::Timestamp { .. } => format!("An error occurred: {}", error),
    }
}
