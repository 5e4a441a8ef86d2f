//! Shared test utilities for integration tests.
//!
//! Provides a populated post store, simulated stop monitoring feeds and
//! helpers for writing post files.

#![allow(dead_code)]

use anyhow::Result;
use blogsite::server::AppState;
use blogsite::transit::{StopMonitoring, TransitError};
use blogsite::{Category, MarkdownRenderer, MemoryStore, NewPost, Profile};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fixed instant the sample posts are arranged around.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
}

/// Builds a store with two published posts, a draft and a post scheduled
/// far in the future.
///
/// Listing order of the published posts is "Rust Lifetimes" then
/// "Weekend in Lisbon".
pub fn sample_store() -> MemoryStore {
    let t = base_time();
    let mut store = MemoryStore::new();

    store
        .insert(
            NewPost::new("Weekend in Lisbon", Category::Travel, "Trams, tiles and pastel de nata.")
                .published(t),
            t,
        )
        .unwrap();
    store
        .insert(
            NewPost::new(
                "Rust Lifetimes",
                Category::Tech,
                "Borrowing explained.\n\n```rust\nfn main() {}\n```\n",
            )
            .published(t + Duration::days(1)),
            t,
        )
        .unwrap();
    store
        .insert(
            NewPost::new("Unfinished Budget", Category::Finance, "Draft numbers."),
            t,
        )
        .unwrap();
    store
        .insert(
            NewPost::new("Future Deck Build", Category::Diy, "Coming soon.")
                .published(Utc::now() + Duration::days(3650)),
            t,
        )
        .unwrap();

    store
}

/// Feed that fails for one monitoring reference and answers every other
/// request with the same document.
pub struct FakeFeed {
    response: Value,
    failing_ref: Option<&'static str>,
    calls: AtomicUsize,
}

impl FakeFeed {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            failing_ref: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_for(mut self, monitoring_ref: &'static str) -> Self {
        self.failing_ref = Some(monitoring_ref);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StopMonitoring for FakeFeed {
    fn fetch(&self, monitoring_ref: &str, _api_key: &str) -> Result<Value, TransitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_ref == Some(monitoring_ref) {
            return Err(TransitError::Status {
                status: 500,
                body: "upstream unavailable".to_string(),
            });
        }
        Ok(self.response.clone())
    }
}

/// One visit on `route`, `miles` from the stop, with timetable time only.
pub fn visit_json(route: &str, miles: f64) -> Value {
    json!({
        "MonitoredVehicleJourney": {
            "LineRef": format!("MTA NYCT_{}", route),
            "DestinationName": "ST GEORGE FERRY",
            "MonitoredCall": {
                "AimedArrivalTime": "2025-03-03T08:20:00-05:00",
                "Extensions": {
                    "Distances": {
                        "PresentableDistance": "2 stops away",
                        "DistanceFromCall": miles * 1609.344
                    }
                }
            }
        }
    })
}

/// Wraps visits in a SIRI stop monitoring envelope.
pub fn siri_response(visits: Vec<Value>) -> Value {
    json!({
        "Siri": {
            "ServiceDelivery": {
                "StopMonitoringDelivery": [{ "MonitoredStopVisit": visits }]
            }
        }
    })
}

/// Builds router state over `store` and `feed`.
pub fn test_state(store: MemoryStore, feed: Arc<dyn StopMonitoring>, api_key: &str) -> Arc<AppState> {
    Arc::new(AppState {
        posts: Box::new(store),
        renderer: MarkdownRenderer::new(),
        transit: feed,
        api_key: api_key.to_string(),
        profile: Profile {
            author: "Test Author".to_string(),
            github_url: Some("https://github.com/test-author".to_string()),
            linkedin_url: None,
            profile_image: None,
        },
    })
}

/// Writes a post file, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let file_path = dir.join(name);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
