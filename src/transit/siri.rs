//! SIRI stop monitoring response model.
//!
//! Only the fields the report reads are modelled. A missing required field
//! or an empty delivery list is a shape error, reported separately from
//! transport failures.

use serde::Deserialize;
use serde_json::Value;

use super::TransitError;

/// Meters to miles.
const MILES_PER_METER: f64 = 0.000621371;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Envelope {
    siri: Siri,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Siri {
    service_delivery: ServiceDelivery,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ServiceDelivery {
    stop_monitoring_delivery: Vec<StopMonitoringDelivery>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct StopMonitoringDelivery {
    monitored_stop_visit: Vec<StopVisit>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct StopVisit {
    monitored_vehicle_journey: VehicleJourney,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct VehicleJourney {
    line_ref: String,
    destination_name: Value,
    monitored_call: MonitoredCall,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MonitoredCall {
    extensions: CallExtensions,
    #[serde(default)]
    expected_arrival_time: Option<String>,
    #[serde(default)]
    aimed_arrival_time: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CallExtensions {
    distances: Distances,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Distances {
    presentable_distance: String,
    distance_from_call: f64,
}

/// One approaching vehicle, flattened from the SIRI structure.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitoredVisit {
    /// Route id: text after the last `_` of the line reference.
    pub route: String,
    pub destination: String,
    /// Upstream wording such as "approaching" or "2.1 miles away".
    pub presentable_distance: String,
    pub distance_miles: f64,
    /// Live prediction, RFC 3339. Empty strings are treated as absent.
    pub expected_arrival: Option<String>,
    /// Timetable time, RFC 3339.
    pub aimed_arrival: Option<String>,
}

fn flatten(visit: StopVisit) -> MonitoredVisit {
    let journey = visit.monitored_vehicle_journey;
    let call = journey.monitored_call;
    let route = journey
        .line_ref
        .rsplit('_')
        .next()
        .unwrap_or_default()
        .to_string();

    MonitoredVisit {
        route,
        destination: display_text(&journey.destination_name),
        presentable_distance: call.extensions.distances.presentable_distance,
        distance_miles: call.extensions.distances.distance_from_call * MILES_PER_METER,
        expected_arrival: call.expected_arrival_time.filter(|t| !t.is_empty()),
        aimed_arrival: call.aimed_arrival_time.filter(|t| !t.is_empty()),
    }
}

/// Destination names arrive either as a string or a list of strings.
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_text)
            .collect::<Vec<_>>()
            .join(" / "),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Extracts the monitored visits of the first delivery.
///
/// # Errors
///
/// Returns [`TransitError::Shape`] when the response lacks the expected
/// keys, or has no delivery.
pub fn parse_visits(response: &Value) -> Result<Vec<MonitoredVisit>, TransitError> {
    let envelope = Envelope::deserialize(response)?;
    let delivery = envelope
        .siri
        .service_delivery
        .stop_monitoring_delivery
        .into_iter()
        .next()
        .ok_or_else(|| {
            TransitError::Shape(serde::de::Error::custom("empty StopMonitoringDelivery"))
        })?;

    Ok(delivery
        .monitored_stop_visit
        .into_iter()
        .map(flatten)
        .collect())
}
