mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::directory::Directory;

pub fn create_router(directory: Directory) -> Router {
    let api = Router::new()
        // Catalogue
        .route("/locations", get(handlers::list_locations))
        // Selection
        .route("/locations/current", get(handlers::current_location))
        // Per-location
        .route("/locations/{id}", get(handlers::get_location))
        .route("/locations/{id}/select", post(handlers::select_location))
        .route("/locations/{id}/nearby", get(handlers::nearby_locations))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(directory)
}
