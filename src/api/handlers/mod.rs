use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::directory::{Directory, DEFAULT_NEARBY_RADIUS_KM};
use crate::models::*;

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Locations
// ============================================================

pub async fn list_locations(State(directory): State<Directory>) -> Json<Vec<LocationRecord>> {
    Json(directory.locations().to_vec())
}

pub async fn get_location(
    State(directory): State<Directory>,
    Path(id): Path<u32>,
) -> Result<Json<LocationRecord>, (StatusCode, String)> {
    directory
        .get(id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Location not found".to_string()))
}

// ============================================================
// Selection
// ============================================================

/// Fire-and-forget selection. An id with no matching location clears the
/// current selection rather than failing, so this always answers 204.
pub async fn select_location(
    State(directory): State<Directory>,
    Path(id): Path<u32>,
) -> StatusCode {
    directory.select(id);
    StatusCode::NO_CONTENT
}

/// The currently selected location, or JSON `null` when nothing is
/// selected.
pub async fn current_location(
    State(directory): State<Directory>,
) -> Json<Option<LocationRecord>> {
    Json(directory.current())
}

// ============================================================
// Nearby
// ============================================================

/// Query parameters for the nearby-locations query.
#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    /// Inclusive distance threshold in kilometers. Defaults to 10.
    pub max_distance_km: Option<f64>,
}

/// Locations within the threshold of the given location, nearest first.
/// An unknown id yields an empty list.
pub async fn nearby_locations(
    State(directory): State<Directory>,
    Path(id): Path<u32>,
    Query(query): Query<NearbyQuery>,
) -> Json<Vec<NearbyLocation>> {
    let max_distance_km = query.max_distance_km.unwrap_or(DEFAULT_NEARBY_RADIUS_KM);
    Json(directory.nearby(id, max_distance_km))
}
