//! Stop monitoring transport.

use serde_json::Value;
use std::time::Duration;
use ureq::Agent;

use super::TransitError;

/// MTA Bus Time SIRI stop monitoring endpoint.
pub const DEFAULT_API_URL: &str = "http://bustime.mta.info/api/siri/stop-monitoring.json";

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Source of raw stop monitoring responses.
pub trait StopMonitoring: Send + Sync {
    /// Fetches the JSON document for one monitoring reference.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non success status, or a body
    /// that is not JSON.
    fn fetch(&self, monitoring_ref: &str, api_key: &str) -> Result<Value, TransitError>;
}

/// Blocking Bus Time client.
pub struct BusTimeClient {
    agent: Agent,
    url: String,
}

impl BusTimeClient {
    /// Creates client for the given endpoint URL.
    pub fn new(url: impl Into<String>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for BusTimeClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl StopMonitoring for BusTimeClient {
    fn fetch(&self, monitoring_ref: &str, api_key: &str) -> Result<Value, TransitError> {
        tracing::debug!(url = %self.url, monitoring_ref, "Requesting stop monitoring");

        let response = self
            .agent
            .get(&self.url)
            .query("key", api_key)
            .query("MonitoringRef", monitoring_ref)
            .query("StopMonitoringDetailLevel", "minimum")
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_string());
            return Err(TransitError::Status { status, body });
        }

        Ok(body_reader.read_json()?)
    }
}
