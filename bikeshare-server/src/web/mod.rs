//! Web layer: router, handlers, and response DTOs.

mod dto;
mod routes;
mod state;


pub use dto::{ErrorResponse, NearbyParams, StationResponse};
pub use routes::{AppError, create_router};
pub use state::OperatorState;
