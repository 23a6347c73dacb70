//! The normalized station record.

use chrono::{DateTime, Utc};

/// A bike-share station, normalized across operators.
///
/// One of these exists only when the upstream feed provided both an
/// information record and a status record for the station, and the
/// information record did not mark it as a virtual (dockless-zone)
/// station.
///
/// Stations are built fresh from upstream JSON on every request and never
/// outlive the request that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Opaque identifier, unique within one operator's feed.
    pub station_id: String,

    /// Latitude in degrees (WGS84).
    pub lat: f64,

    /// Longitude in degrees (WGS84).
    pub lon: f64,

    /// Display name, when the feed provides one.
    pub name: Option<String>,

    /// Open docks at the station.
    pub num_docks_available: u32,

    /// Whether the station is currently renting bikes. Upstream omission
    /// means true.
    pub is_renting: bool,

    /// Whether the station is currently accepting returns. Upstream
    /// omission means true.
    pub is_returning: bool,

    /// Available e-bikes.
    pub num_ebikes_available: i64,

    /// Available regular (non-electric) bikes. Signed: when derived by
    /// subtraction from inconsistent upstream counts this can go
    /// negative, and we deliberately do not clamp it.
    pub num_regular_bikes_available: i64,

    /// Timestamp of the upstream status snapshot.
    pub last_reported: DateTime<Utc>,

    /// Distance in miles from the query point. Populated only by the
    /// nearby-search path; `None` everywhere else.
    pub distance: Option<f64>,
}

impl Station {
    /// Copy of this station with `distance` attached, for nearby results.
    pub fn with_distance(mut self, miles: f64) -> Self {
        self.distance = Some(miles);
        self
    }
}
