use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body},
    extract::ConnectInfo,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use volunteer_map_backend::{routes, AppState, Config};

fn test_state() -> AppState {
    let config = Config {
        catalog_seed: Some(7),
        geocoder_url: "http://127.0.0.1:9/reverse".to_string(),
        geocoder_timeout_secs: 1,
        ..Config::default()
    };
    AppState::from_config(config).unwrap()
}

async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri).await
}

#[tokio::test]
async fn health_is_ok() {
    let app = routes::create_router(test_state());

    let (status, body) = get(app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn list_programs_returns_all_cards() {
    let app = routes::create_router(test_state());

    let (status, body) = get(app, "/api/programs").await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["rehab", "education", "homeless_shelter"]);
    assert_eq!(body[0]["stats"]["locations"], 5);
}

#[tokio::test]
async fn list_programs_search_and_filter() {
    let state = test_state();

    let (status, body) = get(routes::create_router(state.clone()), "/api/programs?search=mentor").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "education");

    let (status, body) = get(routes::create_router(state.clone()), "/api/programs?filter=featured").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "rehab");

    let (status, _) = get(routes::create_router(state), "/api/programs?filter=popular").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_program_is_not_found() {
    let app = routes::create_router(test_state());

    let (status, body) = get(app, "/api/programs/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("nonexistent"));
}

#[tokio::test]
async fn nearest_returns_location_at_reference() {
    let state = test_state();
    let target = state.catalog.locations("education").unwrap()[2].clone();
    let app = routes::create_router(state);

    let uri = format!(
        "/api/programs/education/nearest?lat={}&lng={}",
        target.coordinate.lat, target.coordinate.lng
    );
    let (status, body) = get(app, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"]["id"], target.id.as_str());
    assert_eq!(body["distance"]["distance_km"], 0.0);
    assert_eq!(body["distance"]["walking_minutes"], 0);
}

#[tokio::test]
async fn nearest_without_position_uses_default_location() {
    let state = test_state();
    let default_location = state.config.default_location;
    let app = routes::create_router(state);

    let (status, body) = get(app, "/api/programs/rehab/nearest").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reference"]["lat"], default_location.lat);
    assert_eq!(body["reference"]["lng"], default_location.lng);
}

#[tokio::test]
async fn half_a_position_is_rejected() {
    let app = routes::create_router(test_state());

    let (status, _) = get(app, "/api/programs/rehab/locations?lat=-33.9").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_locations_includes_distance_text() {
    let app = routes::create_router(test_state());

    let (status, body) = get(app, "/api/programs/homeless_shelter/locations").await;
    assert_eq!(status, StatusCode::OK);

    let locations = body.as_array().unwrap();
    assert_eq!(locations.len(), 5);
    for entry in locations {
        let text = entry["distance_km_text"].as_str().unwrap();
        assert_eq!(text.split('.').nth(1).map(str::len), Some(2));
    }
}

#[tokio::test]
async fn connections_skip_unknown_programs() {
    let app = routes::create_router(test_state());

    let (status, body) = get(app, "/api/connections?programs=rehab,nonexistent,education").await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["program"]["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["rehab", "education"]);
}

#[tokio::test]
async fn location_detail_resolves_connected_programs() {
    let state = test_state();
    let location = state.catalog.locations("rehab").unwrap()[0].clone();
    let app = routes::create_router(state);

    let uri = format!("/api/programs/rehab/locations/{}", location.id);
    let (status, body) = get(app, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"]["id"], location.id.as_str());
    let connected = body["connected_programs"].as_array().unwrap();
    assert_eq!(connected.len(), location.connected_programs.len());
    assert_eq!(connected[0]["program"]["id"], "education");
}

#[tokio::test]
async fn unknown_location_is_not_found() {
    let app = routes::create_router(test_state());

    let (status, _) = get(app, "/api/programs/rehab/locations/nowhere_9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn distance_between_city_center_and_education_center() {
    let app = routes::create_router(test_state());

    let (status, body) = get(
        app,
        "/api/distance?from_lat=-33.9249&from_lng=18.4241&to_lat=-33.9049&to_lng=18.4041",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["distance_km"], 2.89);
    assert_eq!(body["distance_km_text"], "2.89");
    assert_eq!(body["walking_minutes"], 35);
    assert_eq!(body["driving_minutes"], 7);
}

#[tokio::test]
async fn distance_rejects_out_of_range_coordinates() {
    let app = routes::create_router(test_state());

    let (status, _) = get(app, "/api/distance?from_lat=95&from_lng=0&to_lat=0&to_lng=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reverse_geocode_failure_returns_sentinel() {
    let app = routes::create_router(test_state());

    let (status, body) = get(app, "/api/geocode/reverse?lat=-33.9249&lng=18.4241").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["locality"], "Unknown location");
}

#[tokio::test]
async fn default_location_is_cape_town() {
    let app = routes::create_router(test_state());

    let (status, body) = get(app, "/api/location/default").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lat"], -33.9249);
    assert_eq!(body["lng"], 18.4241);
}

#[tokio::test]
async fn register_is_a_placeholder() {
    let state = test_state();
    let location = state.catalog.locations("homeless_shelter").unwrap()[0].clone();
    let app = routes::create_router(state);

    let uri = format!("/api/programs/homeless_shelter/locations/{}/register", location.id);
    let (status, body) = send(app, Method::POST, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["registered"], false);
    assert!(body["message"].as_str().unwrap().contains("Safe Harbor Shelter"));
}

#[tokio::test]
async fn malformed_query_value_returns_json_error() {
    let state = test_state();

    let (status, body) = get(
        routes::create_router(state.clone()),
        "/api/programs/rehab/nearest?lat=abc&lng=1",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("lat"));

    let (status, body) = get(routes::create_router(state), "/api/distance?from_lat=1&from_lng=2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

/// Shared sink for captured log output
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[tokio::test]
async fn rate_limited_requests_are_logged() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = routes::create_app(test_state()).unwrap();
    let client: SocketAddr = ([10, 0, 0, 7], 41000).into();

    let mut statuses = Vec::new();
    for _ in 0..105 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/programs/rehab")
                    .extension(ConnectInfo(client))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        statuses.push(response.status());
    }

    assert!(statuses[..100].iter().all(|s| *s == StatusCode::OK));
    let limited = statuses
        .iter()
        .filter(|s| **s == StatusCode::TOO_MANY_REQUESTS)
        .count();
    assert!(limited >= 1);

    let output = logs.contents();
    assert_eq!(output.matches("RATE LIMITED").count(), limited);
    assert!(output.contains("rehab"));
}
