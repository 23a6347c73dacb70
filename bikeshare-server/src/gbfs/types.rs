//! Raw GBFS feed DTOs.
//!
//! These mirror the upstream JSON closely and stay inside the gateway;
//! everything downstream works with the normalized [`crate::domain::Station`].

use serde::{Deserialize, Deserializer};

/// The `gbfs.json` discovery document.
#[derive(Debug, Deserialize)]
pub struct DiscoveryDocument {
    pub data: DiscoveryData,
}

#[derive(Debug, Deserialize)]
pub struct DiscoveryData {
    /// Feeds are published per language; the operators we aggregate all
    /// publish under "en".
    pub en: LanguageFeeds,
}

#[derive(Debug, Deserialize)]
pub struct LanguageFeeds {
    pub feeds: Vec<FeedRef>,
}

/// One entry in the discovery feed list.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedRef {
    pub name: String,
    pub url: String,
}

/// The `station_information` feed.
#[derive(Debug, Deserialize)]
pub struct StationInformationFeed {
    pub data: StationInformationData,
}

#[derive(Debug, Deserialize)]
pub struct StationInformationData {
    pub stations: Vec<StationInformationDto>,
}

/// Static per-station facts: location and identity.
#[derive(Debug, Clone, Deserialize)]
pub struct StationInformationDto {
    pub station_id: String,
    pub lat: f64,
    pub lon: f64,
    pub name: Option<String>,

    /// Virtual stations are floating/dockless zones, not physical docks.
    /// Absent means false.
    #[serde(default)]
    pub is_virtual_station: bool,
}

/// The `station_status` feed.
#[derive(Debug, Deserialize)]
pub struct StationStatusFeed {
    pub data: StationStatusData,
}

#[derive(Debug, Deserialize)]
pub struct StationStatusData {
    pub stations: Vec<StationStatusDto>,
}

/// Live per-station state.
#[derive(Debug, Clone, Deserialize)]
pub struct StationStatusDto {
    pub station_id: String,

    pub num_docks_available: u32,

    /// GBFS 1.x encodes these flags as 0/1 integers, 2.x as booleans;
    /// `flag` accepts both. `None` means the feed omitted the field, and
    /// the normalizer treats omission as true.
    #[serde(default, deserialize_with = "flag")]
    pub is_renting: Option<bool>,

    #[serde(default, deserialize_with = "flag")]
    pub is_returning: Option<bool>,

    /// Epoch seconds of the status snapshot.
    pub last_reported: i64,

    /// Per-vehicle-type counts, when the feed breaks them out.
    pub vehicle_types_available: Option<Vec<VehicleTypeCount>>,

    /// Direct e-bike count, the older way of reporting the split.
    pub num_ebikes_available: Option<i64>,

    /// Total available bikes, used with `num_ebikes_available` to derive
    /// the regular-bike count.
    pub num_bikes_available: Option<i64>,
}

/// One entry of `vehicle_types_available`.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleTypeCount {
    pub vehicle_type_id: String,
    pub count: i64,
}

/// Deserialize a GBFS boolean that may be a JSON bool or a 0/1 integer.
fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(raw.map(|r| match r {
        Raw::Bool(b) => b,
        Raw::Int(n) => n != 0,
    }))
}
