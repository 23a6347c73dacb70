//! Per-operator configuration tables.
//!
//! Every operator serves the same GBFS layout; the differences between
//! them are pure data (base URL, vehicle-type ids), so the normalizer is
//! shared and each operator is just one of these values.

/// Vehicle-type ids used by an operator's `station_status` feed.
///
/// GBFS leaves vehicle-type ids up to the operator; the Lyft-run systems
/// we aggregate all use "1" for regular bikes and "2" for e-bikes. Ids
/// outside this mapping are ignored during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleTypeIds {
    pub regular: &'static str,
    pub ebike: &'static str,
}

impl Default for VehicleTypeIds {
    fn default() -> Self {
        Self {
            regular: "1",
            ebike: "2",
        }
    }
}

/// One bike-share operator's feed configuration.
#[derive(Debug, Clone)]
pub struct Operator {
    /// URL path segment the operator is mounted under (`/api/v1/{slug}`).
    pub slug: &'static str,

    /// Human-readable operator name.
    pub name: &'static str,

    /// GBFS base URL; `{base_url}/gbfs.json` is the discovery document.
    pub base_url: String,

    /// Vehicle-type id mapping for bike counts.
    pub vehicle_types: VehicleTypeIds,
}

impl Operator {
    fn new(slug: &'static str, name: &'static str, base_url: &str) -> Self {
        Self {
            slug,
            name,
            base_url: base_url.to_string(),
            vehicle_types: VehicleTypeIds::default(),
        }
    }

    /// Bay Wheels (San Francisco Bay Area).
    pub fn baywheels() -> Self {
        Self::new("baywheels", "Bay Wheels", "https://gbfs.baywheels.com/gbfs/en")
    }

    /// Biketown (Portland, OR).
    pub fn biketown() -> Self {
        Self::new("biketown", "Biketown", "https://gbfs.biketownpdx.com/gbfs/en")
    }

    /// Citi Bike (New York City).
    pub fn citibike() -> Self {
        Self::new("citibike", "Citi Bike", "https://gbfs.citibikenyc.com/gbfs/en")
    }

    /// Divvy (Chicago).
    pub fn divvy() -> Self {
        Self::new("divvy", "Divvy", "https://gbfs.divvybikes.com/gbfs/en")
    }

    /// Capital Bikeshare (Washington, DC).
    pub fn cabi() -> Self {
        Self::new("cabi", "Capital Bikeshare", "https://gbfs.capitalbikeshare.com/gbfs/en")
    }

    /// Every operator this deployment aggregates.
    pub fn all() -> Vec<Self> {
        vec![
            Self::baywheels(),
            Self::biketown(),
            Self::citibike(),
            Self::divvy(),
            Self::cabi(),
        ]
    }

    /// Replace the base URL (for tests against a local fake feed).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}
