//! Router-level tests for the HTTP boundary, with mock upstream
//! sources.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::connect_info::ConnectInfo;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use holiday_clock_core::{GeoResolver, HolidayClient};
use holiday_clock_server::{app, config::Config, state::AppState};

const HOLIDAYS_JSON: &str = r#"[
    {"date": "2025-01-01", "localName": "New Year's Day", "name": "New Year's Day"},
    {"date": "2025-11-27", "localName": "Thanksgiving Day", "name": "Thanksgiving Day"},
    {"date": "2025-12-25", "localName": "Christmas Day", "name": "Christmas Day"}
]"#;

fn test_state(holidays: HolidayClient, geo: GeoResolver, geo_lookup: bool) -> Arc<AppState> {
    let config = Config {
        geo_lookup,
        ..Config::default()
    };
    AppState::with_clients(config, holidays, geo)
}

fn request(path: &str) -> Request<Body> {
    let peer: SocketAddr = "127.0.0.1:9999".parse().unwrap();
    Request::builder()
        .uri(path)
        .extension(ConnectInfo(peer))
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn holiday_path() -> mockito::Matcher {
    mockito::Matcher::Regex(r"^/api/v3/PublicHolidays/\d{4}/US$".to_string())
}

#[tokio::test]
async fn time_endpoint_reports_countdowns() {
    let mut holiday_server = mockito::Server::new_async().await;
    holiday_server
        .mock("GET", holiday_path())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(HOLIDAYS_JSON)
        .create_async()
        .await;

    let state = test_state(
        HolidayClient::with_base_url(&holiday_server.url()),
        GeoResolver::new(),
        false,
    );
    let response = app(state)
        .oneshot(request("/api/time?timezone=Europe/London"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;

    assert_eq!(json["timezone"], "Europe/London");
    assert_eq!(json["currentTime"].as_str().unwrap().len(), 19);
    assert!(json["weekendCountdown"]["days"].is_u64());

    let names: Vec<&str> = json["holidayCountdowns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Thanksgiving", "Christmas", "New Year"]);
    assert_eq!(json["holidayCountdowns"][0]["vacationDays"], 4);
}

#[tokio::test]
async fn invalid_timezone_falls_back_to_default() {
    let mut holiday_server = mockito::Server::new_async().await;
    holiday_server
        .mock("GET", holiday_path())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let state = test_state(
        HolidayClient::with_base_url(&holiday_server.url()),
        GeoResolver::new(),
        false,
    );
    let response = app(state)
        .oneshot(request("/api/time?timezone=Not/AZone"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["timezone"], "America/New_York");
}

#[tokio::test]
async fn holiday_source_outage_degrades_to_weekend_only() {
    let mut holiday_server = mockito::Server::new_async().await;
    holiday_server
        .mock("GET", holiday_path())
        .with_status(503)
        .create_async()
        .await;

    let state = test_state(
        HolidayClient::with_base_url(&holiday_server.url()),
        GeoResolver::new(),
        false,
    );
    let response = app(state)
        .oneshot(request("/api/time?timezone=America/New_York"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert!(json["weekendCountdown"].is_object());
    assert!(json["nearestHoliday"].is_null());
    assert_eq!(json["holidayCountdowns"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn geo_lookup_resolves_timezone_and_location() {
    let mut holiday_server = mockito::Server::new_async().await;
    holiday_server
        .mock("GET", holiday_path())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let mut geo_server = mockito::Server::new_async().await;
    geo_server
        .mock("GET", "/json/203.0.113.9")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"status": "success", "countryCode": "US", "country": "United States",
                "region": "WA", "city": "Seattle", "timezone": "America/Los_Angeles"}"#,
        )
        .create_async()
        .await;

    let state = test_state(
        HolidayClient::with_base_url(&holiday_server.url()),
        GeoResolver::with_base_urls(&geo_server.url(), &geo_server.url()),
        true,
    );

    let peer: SocketAddr = "127.0.0.1:9999".parse().unwrap();
    let request = Request::builder()
        .uri("/api/time")
        .header("x-forwarded-for", "203.0.113.9")
        .extension(ConnectInfo(peer))
        .body(Body::empty())
        .unwrap();

    let response = app(state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["timezone"], "America/Los_Angeles");
    assert_eq!(json["location"], "Seattle, United States");
}
