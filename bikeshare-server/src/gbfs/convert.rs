//! Feed normalization: raw GBFS DTOs to the domain `Station` shape.
//!
//! This is the one shared normalizer for every operator. Operator
//! variation (vehicle-type ids) comes in through the [`Operator`] table,
//! not through separate code paths.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::Station;
use crate::operator::Operator;

use super::types::{StationInformationDto, StationInformationFeed, StationStatusDto, StationStatusFeed};

/// Merge an information feed and a status feed into normalized stations.
///
/// A station is emitted only when both feeds know it and the information
/// record does not mark it virtual. Status records for unknown or virtual
/// stations are dropped silently. Output order follows the status feed.
pub fn build_stations(
    operator: &Operator,
    info: StationInformationFeed,
    status: StationStatusFeed,
) -> Vec<Station> {
    let info_by_id: HashMap<String, StationInformationDto> = info
        .data
        .stations
        .into_iter()
        .filter(|station| !station.is_virtual_station)
        .map(|station| (station.station_id.clone(), station))
        .collect();

    let mut stations = Vec::with_capacity(status.data.stations.len());

    for status_record in status.data.stations {
        let Some(info_record) = info_by_id.get(&status_record.station_id) else {
            continue;
        };

        let (num_regular_bikes_available, num_ebikes_available) =
            bike_counts(operator, &status_record);

        stations.push(Station {
            station_id: status_record.station_id,
            lat: info_record.lat,
            lon: info_record.lon,
            name: info_record.name.clone(),
            num_docks_available: status_record.num_docks_available,
            is_renting: status_record.is_renting.unwrap_or(true),
            is_returning: status_record.is_returning.unwrap_or(true),
            num_ebikes_available,
            num_regular_bikes_available,
            last_reported: epoch_to_timestamp(status_record.last_reported),
            distance: None,
        });
    }

    stations
}

/// Split available bikes into (regular, e-bike) counts.
///
/// Precedence: a `vehicle_types_available` list wins, summing counts per
/// the operator's id mapping and ignoring unknown ids. Failing that, a
/// direct `num_ebikes_available` is used and the regular count derived by
/// subtraction from `num_bikes_available` (default 0) — which can go
/// negative on inconsistent upstream data and is intentionally left so.
/// With neither present, both counts are 0.
fn bike_counts(operator: &Operator, status: &StationStatusDto) -> (i64, i64) {
    if let Some(vehicle_types) = &status.vehicle_types_available {
        let mut regular = 0;
        let mut ebikes = 0;
        for vt in vehicle_types {
            if vt.vehicle_type_id == operator.vehicle_types.regular {
                regular += vt.count;
            } else if vt.vehicle_type_id == operator.vehicle_types.ebike {
                ebikes += vt.count;
            }
        }
        (regular, ebikes)
    } else if let Some(ebikes) = status.num_ebikes_available {
        let total = status.num_bikes_available.unwrap_or(0);
        (total - ebikes, ebikes)
    } else {
        (0, 0)
    }
}

/// Convert upstream epoch seconds to a timestamp.
///
/// Epoch values outside chrono's representable range fall back to the
/// Unix epoch rather than failing the whole feed.
fn epoch_to_timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}
