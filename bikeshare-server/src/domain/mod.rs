//! Normalized domain types shared across operators.

mod station;

pub use station::Station;
