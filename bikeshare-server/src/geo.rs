//! Great-circle distance and the nearby-station filter.
//!
//! Distances are in miles throughout; clients of the API pass a radius in
//! miles and get a `distance` field in miles back.

use crate::domain::Station;

/// Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Default search radius in miles when the caller does not supply one.
pub const DEFAULT_RADIUS_MILES: f64 = 1.0;

/// Great-circle distance between two points, in miles, via the haversine
/// formula.
///
/// Symmetric in its arguments and ~0 for coincident points. Inputs are not
/// validated; out-of-range coordinates produce garbage distances rather
/// than errors.
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Filter stations to those within `radius` miles of `(lat, lon)`, attach
/// the computed distance to each, and sort by ascending distance.
///
/// The boundary is inclusive (`distance <= radius`). Ties keep their
/// relative order from the input (the sort is stable). An empty result is
/// an ordinary answer, not an error.
pub fn nearby(stations: Vec<Station>, lat: f64, lon: f64, radius: f64) -> Vec<Station> {
    let mut matched: Vec<Station> = stations
        .into_iter()
        .filter_map(|station| {
            let distance = haversine_miles(lat, lon, station.lat, station.lon);
            (distance <= radius).then(|| station.with_distance(distance))
        })
        .collect();

    // Distances here are always finite, so total_cmp agrees with the
    // ordinary float ordering.
    matched.sort_by(|a, b| {
        a.distance
            .unwrap_or(f64::INFINITY)
            .total_cmp(&b.distance.unwrap_or(f64::INFINITY))
    });

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use proptest::prelude::*;

    fn station(id: &str, lat: f64, lon: f64) -> Station {
        Station {
            station_id: id.to_string(),
            lat,
            lon,
            name: None,
            num_docks_available: 0,
            is_renting: true,
            is_returning: true,
            num_ebikes_available: 0,
            num_regular_bikes_available: 0,
            last_reported: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
            distance: None,
        }
    }

    #[test]
    fn coincident_points_are_zero_distance() {
        let d = haversine_miles(37.7749, -122.4194, 37.7749, -122.4194);
        assert!(d.abs() < 1e-9, "expected ~0, got {d}");
    }

    #[test]
    fn known_distance_sf_to_la() {
        // San Francisco to Los Angeles is about 347 miles.
        let d = haversine_miles(37.7749, -122.4194, 34.0522, -118.2437);
        assert!((d - 347.0).abs() < 2.0, "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let d = haversine_miles(0.0, 0.0, 0.0, 180.0);
        let half_circumference = std::f64::consts::PI * 3958.8;
        assert!((d - half_circumference).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn nearby_filters_on_inclusive_boundary() {
        let origin = (37.0, -122.0);
        let stations = vec![
            station("at-origin", 37.0, -122.0),
            station("far-away", 38.0, -122.0), // ~69 miles north
        ];

        let result = nearby(stations.clone(), origin.0, origin.1, 0.0);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].station_id, "at-origin");
        assert!(result[0].distance.unwrap().abs() < 1e-9);

        let result = nearby(stations, origin.0, origin.1, 100.0);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn nearby_sorts_ascending_by_distance() {
        let stations = vec![
            station("c", 37.03, -122.0),
            station("a", 37.01, -122.0),
            station("b", 37.02, -122.0),
        ];

        let result = nearby(stations, 37.0, -122.0, 10.0);
        let ids: Vec<&str> = result.iter().map(|s| s.station_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        for pair in result.windows(2) {
            assert!(pair[0].distance.unwrap() <= pair[1].distance.unwrap());
        }
    }

    #[test]
    fn nearby_ties_keep_input_order() {
        // Two stations at the same coordinates: equal distance, so the
        // stable sort must preserve their relative order.
        let stations = vec![
            station("first", 37.01, -122.0),
            station("second", 37.01, -122.0),
        ];

        let result = nearby(stations, 37.0, -122.0, 10.0);
        let ids: Vec<&str> = result.iter().map(|s| s.station_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn nearby_with_no_matches_is_empty() {
        let stations = vec![station("far", 40.0, -120.0)];
        assert!(nearby(stations, 37.0, -122.0, 1.0).is_empty());
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..90.0,
            lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0,
            lon2 in -180.0f64..180.0,
        ) {
            let forward = haversine_miles(lat1, lon1, lat2, lon2);
            let backward = haversine_miles(lat2, lon2, lat1, lon1);
            prop_assert!((forward - backward).abs() < 1e-9);
        }

        #[test]
        fn distance_to_self_is_zero(
            lat in -90.0f64..90.0,
            lon in -180.0f64..180.0,
        ) {
            prop_assert!(haversine_miles(lat, lon, lat, lon).abs() < 1e-6);
        }

        #[test]
        fn nearby_never_exceeds_radius(
            lat in -80.0f64..80.0,
            lon in -170.0f64..170.0,
            radius in 0.0f64..50.0,
            offsets in proptest::collection::vec((-1.0f64..1.0, -1.0f64..1.0), 0..20),
        ) {
            let stations = offsets
                .iter()
                .enumerate()
                .map(|(i, (dlat, dlon))| station(&format!("s{i}"), lat + dlat, lon + dlon))
                .collect();

            for s in nearby(stations, lat, lon, radius) {
                prop_assert!(s.distance.unwrap() <= radius);
            }
        }
    }
}
