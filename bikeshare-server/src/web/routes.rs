//! HTTP route handlers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::cors::CorsLayer;

use crate::gbfs::GbfsError;
use crate::service::BikeShareService;

use super::dto::{ErrorResponse, NearbyParams, StationResponse};
use super::state::OperatorState;

/// Create the application router.
///
/// Each operator's facade gets its own sub-router nested under
/// `/api/v1/{slug}`. The services are passed in explicitly; nothing is
/// reached through globals.
pub fn create_router(services: Vec<Arc<BikeShareService>>) -> Router {
    let mut router = Router::new().route("/", get(root));

    for service in services {
        let slug = service.operator().slug;
        let operator_routes = Router::new()
            .route("/stations", get(list_stations))
            .route("/stations/nearby", get(list_nearby_stations))
            .with_state(OperatorState { service });

        router = router.nest(&format!("/api/v1/{slug}"), operator_routes);
    }

    router.layer(CorsLayer::permissive())
}

/// Static welcome payload at the unprefixed root.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": "Welcome to the Bikesharing API"}))
}

/// All of one operator's stations.
async fn list_stations(
    State(state): State<OperatorState>,
) -> Result<Json<Vec<StationResponse>>, AppError> {
    let stations = state.service.stations().await?;
    Ok(Json(stations.into_iter().map(StationResponse::from).collect()))
}

/// Stations near a point, sorted by distance.
///
/// Parameter validation happens before any upstream fetch: a bad request
/// never costs a feed round-trip.
async fn list_nearby_stations(
    State(state): State<OperatorState>,
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<Vec<StationResponse>>, AppError> {
    let params = NearbyParams::from_query(&raw).map_err(|problems| AppError::Validation { problems })?;

    let stations = state
        .service
        .nearby_stations(params.lat, params.lon, params.radius)
        .await?;

    Ok(Json(stations.into_iter().map(StationResponse::from).collect()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed request parameters; one message per field.
    Validation { problems: Vec<String> },

    /// An upstream feed fetch failed.
    Upstream(GbfsError),
}

impl From<GbfsError> for AppError {
    fn from(e: GbfsError) -> Self {
        AppError::Upstream(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Validation { problems } => {
                (StatusCode::UNPROCESSABLE_ENTITY, problems.join("; "))
            }
            AppError::Upstream(e) => {
                tracing::error!(error = %e, "upstream feed failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("upstream feed failure: {e}"),
                )
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
