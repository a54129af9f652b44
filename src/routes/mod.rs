use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppResult;
use crate::handlers::{geo, programs};
use crate::middleware::rate_limit::{create_public_governor, log_request};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Program catalog (cards, stats, locations)
    let program_routes = Router::new()
        .route("/", get(programs::list_programs))
        .route("/{id}", get(programs::get_program))
        .route("/{id}/locations", get(programs::list_locations))
        .route("/{id}/nearest", get(programs::nearest_location))
        .route("/{id}/locations/{location_id}", get(programs::get_location))
        .route(
            "/{id}/locations/{location_id}/register",
            post(programs::register_interest),
        );

    // Geo helpers
    let geo_routes = Router::new()
        .route("/health", get(geo::health))
        .route("/connections", get(programs::resolve_program_connections))
        .route("/distance", get(geo::distance))
        .route("/geocode/reverse", get(geo::reverse_geocode))
        .route("/location/default", get(geo::default_location));

    Router::new()
        .nest("/api/programs", program_routes)
        .nest("/api", geo_routes)
        .with_state(state)
}

/// Router with the full middleware stack, outermost last:
/// governor, CORS, tracing, then request logging around all of them.
///
/// Needs to be served with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn create_app(state: AppState) -> AppResult<Router> {
    Ok(create_router(state)
        .layer(create_public_governor()?)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(log_request)))
}
