use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Query, State},
    http::HeaderMap,
    Json,
};
use chrono::{Datelike, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

use holiday_clock_core::{geo, snapshot, TimeReport};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct TimeQuery {
    pub timezone: Option<String>,
}

/// `GET /api/time` -- compute a fresh countdown snapshot for "now".
///
/// The holiday source degrades to an empty list on failure, so this
/// stays a 200 with the weekend countdown intact; only an unexpected
/// internal fault becomes an [`AppError`].
pub async fn time_handler(
    Query(query): Query<TimeQuery>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
) -> Result<Json<TimeReport>, AppError> {
    let (tz, location) = resolve_timezone(&state, query.timezone.as_deref(), &headers, peer).await;

    // Countdown math runs on the resolved zone's wall clock, so the
    // clock and the countdowns in one response agree with each other.
    let now = Utc::now().with_timezone(&tz);
    let holidays = state
        .holidays
        .public_holidays_or_empty(now.year(), &state.config.holiday_country)
        .await;
    let snapshot = snapshot::snapshot(&holidays, now.naive_local());

    Ok(Json(TimeReport {
        current_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        timezone: tz.name().to_string(),
        location,
        snapshot,
    }))
}

/// Pluggable timezone strategy: explicit query parameter, then the
/// optional IP lookup, then the static default.
async fn resolve_timezone(
    state: &AppState,
    requested: Option<&str>,
    headers: &HeaderMap,
    peer: SocketAddr,
) -> (Tz, Option<String>) {
    if let Some(tz) = requested.and_then(|s| s.parse::<Tz>().ok()) {
        return (tz, None);
    }

    if state.config.geo_lookup {
        if let Some(location) = state.geo.locate(&client_ip(headers, peer)).await {
            let name = geo::timezone_for(&location);
            if let Ok(tz) = name.parse::<Tz>() {
                return (tz, geo::location_label(&location));
            }
        }
    }

    (chrono_tz::America::New_York, None)
}

/// Client IP for geolocation: first `X-Forwarded-For` hop when behind
/// a proxy, else the socket peer.
fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string())
        .unwrap_or_else(|| peer.ip().to_string())
}
