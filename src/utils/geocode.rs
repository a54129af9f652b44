use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::error::{AppError, AppResult};
use crate::utils::geo::Coordinate;

/// Returned whenever a lookup cannot produce a name
pub const UNKNOWN_LOCATION: &str = "Unknown location";

#[derive(Debug, Error)]
enum GeocodeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No locality in response")]
    Empty,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeocodeResponse {
    #[serde(default)]
    locality: Option<String>,
    #[serde(default)]
    city: Option<String>,
}

impl GeocodeResponse {
    fn name(self) -> Option<String> {
        [self.locality, self.city]
            .into_iter()
            .flatten()
            .map(|n| n.trim().to_string())
            .find(|n| !n.is_empty())
    }
}

/// Client for a public reverse-geocoding endpoint. Only used for display
/// text, so every failure collapses into [`UNKNOWN_LOCATION`].
#[derive(Debug, Clone)]
pub struct ReverseGeocoder {
    client: reqwest::Client,
    url: String,
}

impl ReverseGeocoder {
    pub fn new(url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Locality name for `coordinate`, or [`UNKNOWN_LOCATION`]
    pub async fn locality(&self, coordinate: Coordinate) -> String {
        match self.lookup(coordinate).await {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(
                    lat = coordinate.lat,
                    lng = coordinate.lng,
                    error = %e,
                    "Reverse geocoding failed"
                );
                UNKNOWN_LOCATION.to_string()
            }
        }
    }

    async fn lookup(&self, coordinate: Coordinate) -> Result<String, GeocodeError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("latitude", coordinate.lat.to_string()),
                ("longitude", coordinate.lng.to_string()),
                ("localityLanguage", "en".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: GeocodeResponse = response.json().await?;
        body.name().ok_or(GeocodeError::Empty)
    }
}
