//! Per-operator service facade.
//!
//! One `BikeShareService` value exists per operator, constructed at
//! startup and handed to the router explicitly. It owns no mutable state;
//! every call re-fetches the upstream feeds.

use crate::domain::Station;
use crate::gbfs::types::{StationInformationFeed, StationStatusFeed};
use crate::gbfs::{self, GbfsClient, GbfsError, convert};
use crate::geo;
use crate::operator::Operator;

/// Facade over one operator's GBFS feeds.
#[derive(Debug, Clone)]
pub struct BikeShareService {
    client: GbfsClient,
    operator: Operator,
}

impl BikeShareService {
    /// Create a facade for `operator`, sharing `client`'s connection pool.
    pub fn new(client: GbfsClient, operator: Operator) -> Self {
        Self { client, operator }
    }

    /// The operator this facade serves.
    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    /// Fetch and normalize all of this operator's stations.
    ///
    /// Discovers the feed URLs, fetches `station_information` and
    /// `station_status` concurrently, and merges them. Any upstream
    /// failure aborts the whole call; there are no partial results.
    pub async fn stations(&self) -> Result<Vec<Station>, GbfsError> {
        let feeds = self.client.discover_feeds(&self.operator.base_url).await?;

        let info_url = feeds
            .get(gbfs::STATION_INFORMATION)
            .ok_or_else(|| GbfsError::missing_feed(gbfs::STATION_INFORMATION))?;
        let status_url = feeds
            .get(gbfs::STATION_STATUS)
            .ok_or_else(|| GbfsError::missing_feed(gbfs::STATION_STATUS))?;

        let (info, status) = tokio::try_join!(
            self.client.fetch::<StationInformationFeed>(info_url),
            self.client.fetch::<StationStatusFeed>(status_url)
        )?;

        let stations = convert::build_stations(&self.operator, info, status);
        tracing::debug!(
            operator = self.operator.slug,
            count = stations.len(),
            "normalized stations"
        );

        Ok(stations)
    }

    /// Stations within `radius` miles of `(lat, lon)`, sorted by distance.
    pub async fn nearby_stations(
        &self,
        lat: f64,
        lon: f64,
        radius: f64,
    ) -> Result<Vec<Station>, GbfsError> {
        let stations = self.stations().await?;
        Ok(geo::nearby(stations, lat, lon, radius))
    }
}
