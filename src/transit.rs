//! Real time bus arrivals from the MTA Bus Time SIRI API.
//!
//! Reports are text, written line by line to a [`Sink`]. Every failure is
//! turned into a line of that report: upstream trouble with one stop never
//! stops the remaining queries and never reaches the caller.

mod feed;
mod report;
mod siri;
mod stops;

pub use feed::{BusTimeClient, DEFAULT_API_URL, StopMonitoring};
pub use report::{fetch_arrivals, fetch_arrivals_at, run_all_checks};
pub use siri::{MonitoredVisit, parse_visits};
pub use stops::{BUS_QUERIES, BusQuery, BusStop, Route};

use std::io::Write;

/// Placeholder API key that means "not configured".
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

/// Longest error body quoted in a report line.
const MAX_BODY_EXCERPT: usize = 200;

/// Whether `key` is a real key rather than blank or the placeholder.
pub fn has_api_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != PLACEHOLDER_API_KEY
}

/// Destination for report lines.
pub trait Sink {
    fn emit(&mut self, line: String);
}

impl Sink for Vec<String> {
    fn emit(&mut self, line: String) {
        self.push(line);
    }
}

/// Writes each line, newline terminated, to an [`std::io::Write`].
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriteSink<W> {
    fn emit(&mut self, line: String) {
        if let Err(e) = writeln!(self.writer, "{}", line) {
            tracing::warn!(error = %e, "Failed to write report line");
        }
    }
}

/// Failure talking to the stop monitoring endpoint.
#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    /// Endpoint answered with a non success status.
    #[error("HTTP {status}: {}", body_excerpt(.body))]
    Status { status: u16, body: String },

    /// Connection, TLS, timeout or body read failure.
    #[error("{0}")]
    Transport(#[from] ureq::Error),

    /// JSON without the expected SIRI structure.
    #[error("Unexpected response: {0}")]
    Shape(#[from] serde_json::Error),

    /// Arrival time not in RFC 3339 form.
    #[error("Invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },
}

/// Error body on one line, cut to [`MAX_BODY_EXCERPT`] chars.
fn body_excerpt(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(MAX_BODY_EXCERPT) {
        Some((cut, _)) => format!("{}...", &flat[..cut]),
        None => flat,
    }
}
