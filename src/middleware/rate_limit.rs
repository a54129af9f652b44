use axum::{
    body::Body,
    extract::{ConnectInfo, Request},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_governor::{governor::GovernorConfigBuilder, GovernorError, GovernorLayer};

use crate::error::{AppError, AppResult};

/// Type alias for the public governor layer (IP-based rate limiting)
pub type PublicGovernorLayer = GovernorLayer<
    tower_governor::key_extractor::PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware<governor::clock::QuantaInstant>,
    Body,
>;

/// Create a GovernorLayer for public rate limiting (per IP address)
/// - One token every 600ms (100 per minute)
/// - Bursts of up to 100 requests
pub fn create_public_governor() -> AppResult<PublicGovernorLayer> {
    let config = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(600)
            .burst_size(100)
            .finish()
            .ok_or_else(|| AppError::Config("Invalid rate limit configuration".to_string()))?,
    );

    Ok(GovernorLayer::new(config).error_handler(rate_limit_error_handler))
}

/// Turn governor rejections into the API's JSON error shape
pub fn rate_limit_error_handler(err: GovernorError) -> Response<Body> {
    match err {
        GovernorError::TooManyRequests { wait_time, .. } => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "error": "Too many requests",
                "retry_after_secs": wait_time,
            })),
        )
            .into_response(),
        GovernorError::Other { code, msg, .. } => (
            code,
            Json(json!({ "error": msg.unwrap_or_else(|| "Request rejected".to_string()) })),
        )
            .into_response(),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Unable to identify client" })),
        )
            .into_response(),
    }
}

/// How a finished request is reported in the logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    RateLimited,
    Failed,
    Completed,
}

impl RequestOutcome {
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::TOO_MANY_REQUESTS {
            RequestOutcome::RateLimited
        } else if status.is_client_error() || status.is_server_error() {
            RequestOutcome::Failed
        } else {
            RequestOutcome::Completed
        }
    }
}

/// Program id segment of `/api/programs/{id}/...` paths
pub fn program_id_from_path(path: &str) -> Option<&str> {
    path.strip_prefix("/api/programs/")?
        .split('/')
        .next()
        .filter(|id| !id.is_empty())
}

/// Log every request with its client, program and outcome.
///
/// Must wrap the governor layer so rejected requests are logged too.
pub async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let program = program_id_from_path(&path).unwrap_or("-").to_string();

    tracing::debug!(client_ip = %addr.ip(), %method, %path, %program, "Incoming request");

    let response = next.run(request).await;
    let status = response.status();

    match RequestOutcome::from_status(status) {
        RequestOutcome::RateLimited => tracing::warn!(
            client_ip = %addr.ip(),
            %method,
            %path,
            %program,
            "RATE LIMITED - volunteer map request rejected"
        ),
        RequestOutcome::Failed => tracing::warn!(
            client_ip = %addr.ip(),
            %method,
            %path,
            %program,
            %status,
            "Request failed"
        ),
        RequestOutcome::Completed => tracing::debug!(
            client_ip = %addr.ip(),
            %method,
            %path,
            %program,
            %status,
            "Request completed"
        ),
    }

    response
}
