//! Data transfer objects for web responses and query parsing.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::Station;
use crate::geo::DEFAULT_RADIUS_MILES;

/// A station as returned by the API.
#[derive(Debug, Serialize)]
pub struct StationResponse {
    pub station_id: String,
    pub lat: f64,
    pub lon: f64,
    pub name: Option<String>,
    pub num_docks_available: u32,
    pub is_renting: bool,
    pub is_returning: bool,
    pub num_ebikes_available: i64,
    pub num_regular_bikes_available: i64,
    /// RFC 3339 timestamp of the upstream status snapshot.
    pub last_reported: DateTime<Utc>,
    /// Miles from the query point; null outside the nearby path.
    pub distance: Option<f64>,
}

impl From<Station> for StationResponse {
    fn from(station: Station) -> Self {
        Self {
            station_id: station.station_id,
            lat: station.lat,
            lon: station.lon,
            name: station.name,
            num_docks_available: station.num_docks_available,
            is_renting: station.is_renting,
            is_returning: station.is_returning,
            num_ebikes_available: station.num_ebikes_available,
            num_regular_bikes_available: station.num_regular_bikes_available,
            last_reported: station.last_reported,
            distance: station.distance,
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Validated parameters of the nearby query.
///
/// Parsed by hand from the raw query map rather than through a typed
/// `Query` extractor: a rejected extraction would be a bare 400, and the
/// API promises a 422 that names every missing or malformed parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyParams {
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
}

impl NearbyParams {
    /// Parse `lat`, `lon`, and optional `radius` (default 1.0 miles).
    ///
    /// On failure returns one message per offending parameter.
    pub fn from_query(query: &HashMap<String, String>) -> Result<Self, Vec<String>> {
        let mut problems = Vec::new();

        let lat = parse_required(query, "lat", &mut problems);
        let lon = parse_required(query, "lon", &mut problems);
        let radius = match query.get("radius") {
            None => Some(DEFAULT_RADIUS_MILES),
            Some(raw) => match raw.parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    problems.push(format!("invalid value for query parameter: radius ({raw:?})"));
                    None
                }
            },
        };

        match (lat, lon, radius) {
            (Some(lat), Some(lon), Some(radius)) => Ok(Self { lat, lon, radius }),
            _ => Err(problems),
        }
    }
}

fn parse_required(
    query: &HashMap<String, String>,
    name: &str,
    problems: &mut Vec<String>,
) -> Option<f64> {
    match query.get(name) {
        None => {
            problems.push(format!("missing required query parameter: {name}"));
            None
        }
        Some(raw) => match raw.parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => {
                problems.push(format!("invalid value for query parameter: {name} ({raw:?})"));
                None
            }
        },
    }
}
