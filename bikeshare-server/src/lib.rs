//! Bike-share aggregation server.
//!
//! Fetches live GBFS feeds from several bike-share operators, normalizes
//! them into a single station shape, and serves them over a REST API with
//! a geospatial "nearby" query.

pub mod domain;
pub mod gbfs;
pub mod geo;
pub mod operator;
pub mod service;
pub mod web;
