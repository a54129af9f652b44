use axum::{
    extract::State,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::handlers::{require_coordinate, ApiQuery};
use crate::utils::geo::{haversine, Coordinate, DistanceResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DistanceQuery {
    pub from_lat: f64,
    pub from_lng: f64,
    pub to_lat: f64,
    pub to_lng: f64,
}

#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    #[serde(flatten)]
    pub distance: DistanceResult,
    pub distance_km_text: String,
}

#[derive(Debug, Deserialize)]
pub struct CoordinateQuery {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Serialize)]
pub struct LocalityResponse {
    pub coordinate: Coordinate,
    pub locality: String,
}

/// Distance and travel-time estimates between two points
pub async fn distance(ApiQuery(query): ApiQuery<DistanceQuery>) -> AppResult<Json<DistanceResponse>> {
    let from = require_coordinate(query.from_lat, query.from_lng)?;
    let to = require_coordinate(query.to_lat, query.to_lng)?;

    let distance = haversine(from, to);
    Ok(Json(DistanceResponse {
        distance,
        distance_km_text: distance.km_text(),
    }))
}

/// Display name for a coordinate; "Unknown location" when the lookup fails
pub async fn reverse_geocode(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CoordinateQuery>,
) -> AppResult<Json<LocalityResponse>> {
    let coordinate = require_coordinate(query.lat, query.lng)?;
    let locality = state.geocoder.locality(coordinate).await;

    Ok(Json(LocalityResponse {
        coordinate,
        locality,
    }))
}

/// Fallback coordinate used when the client has no position
pub async fn default_location(State(state): State<AppState>) -> Json<Coordinate> {
    Json(state.config.default_location)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
