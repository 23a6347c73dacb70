//! GBFS upstream gateway and feed normalization.
//!
//! Talks to each operator's public GBFS endpoints: the discovery document
//! (`gbfs.json`), `station_information`, and `station_status`. Raw feed
//! DTOs live in [`types`]; [`convert`] merges them into the normalized
//! [`crate::domain::Station`] shape.

mod client;
pub mod convert;
mod error;
pub mod types;

pub use client::{FeedUrls, GbfsClient, GbfsClientConfig};
pub use error::GbfsError;

/// Feed name of the station information document in a GBFS discovery list.
pub const STATION_INFORMATION: &str = "station_information";

/// Feed name of the station status document in a GBFS discovery list.
pub const STATION_STATUS: &str = "station_status";
