pub mod geo;
pub mod programs;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::utils::geo::Coordinate;

/// `Query` whose rejections use the API's JSON error shape
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ApiQuery(value))
    }
}

/// Optional user position passed as `?lat=..&lng=..`
#[derive(Debug, Default, Deserialize)]
pub struct PositionQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Validate an optional lat/lng pair. Both absent means "no position".
pub fn parse_position(lat: Option<f64>, lng: Option<f64>) -> AppResult<Option<Coordinate>> {
    match (lat, lng) {
        (None, None) => Ok(None),
        (Some(lat), Some(lng)) => require_coordinate(lat, lng).map(Some),
        _ => Err(AppError::BadRequest(
            "lat and lng must be given together".to_string(),
        )),
    }
}

pub fn require_coordinate(lat: f64, lng: f64) -> AppResult<Coordinate> {
    let coordinate = Coordinate::new(lat, lng);
    if !coordinate.is_valid() {
        return Err(AppError::BadRequest(format!(
            "Coordinate out of range: {}, {}",
            lat, lng
        )));
    }
    Ok(coordinate)
}
