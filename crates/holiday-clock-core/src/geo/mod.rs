//! Best-effort IP-geolocation with a ranked provider chain.
//!
//! Location data only enriches the display (timezone and "City,
//! Country" label) -- it never fails a request. The resolver tries each
//! provider in order with a per-request timeout and falls back to
//! [`DEFAULT_TIMEZONE`] when every strategy comes up empty.

mod tables;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::GeoError;

pub use tables::{country_timezone, us_state_timezone, COUNTRY_TIMEZONES, US_STATE_TIMEZONES};

/// Timezone used when no strategy yields anything better.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Location details for an IP address, as far as the providers know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub country_code: String,
    pub region_code: Option<String>,
    pub city: Option<String>,
    pub country_name: Option<String>,
    pub timezone: Option<String>,
}

/// A single lookup strategy in the chain.
#[derive(Debug, Clone)]
enum Provider {
    /// ip-api.com JSON endpoint.
    IpApi { base_url: String },
    /// ipapi.co JSON endpoint.
    IpapiCo { base_url: String },
}

/// Ranked-strategy IP-geolocation resolver.
#[derive(Debug, Clone)]
pub struct GeoResolver {
    http: reqwest::Client,
    providers: Vec<Provider>,
}

impl Default for GeoResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoResolver {
    pub fn new() -> Self {
        Self::with_base_urls("http://ip-api.com", "https://ipapi.co")
    }

    /// Build a resolver against explicit provider endpoints (tests).
    pub fn with_base_urls(primary: &str, secondary: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            providers: vec![
                Provider::IpApi {
                    base_url: primary.trim_end_matches('/').to_string(),
                },
                Provider::IpapiCo {
                    base_url: secondary.trim_end_matches('/').to_string(),
                },
            ],
        }
    }

    /// Locate an IP address, trying each provider in rank order.
    ///
    /// Returns `None` when every provider fails or answers without a
    /// country code -- callers fall through to the defaults.
    pub async fn locate(&self, ip: &str) -> Option<GeoLocation> {
        for provider in &self.providers {
            match self.query(provider, ip).await {
                Ok(location) if !location.country_code.is_empty() => return Some(location),
                Ok(_) => warn!("Geolocation provider answered without a country code"),
                Err(e) => warn!("Geolocation lookup failed: {e}"),
            }
        }
        None
    }

    async fn query(&self, provider: &Provider, ip: &str) -> Result<GeoLocation, GeoError> {
        match provider {
            Provider::IpApi { base_url } => {
                let url = format!("{base_url}/json/{ip}");
                let response = self.http.get(&url).send().await?;
                if !response.status().is_success() {
                    return Err(GeoError::Status {
                        status: response.status(),
                    });
                }
                let payload: IpApiResponse = response.json().await?;
                if payload.status != "success" {
                    return Err(GeoError::Unresolved);
                }
                Ok(GeoLocation {
                    country_code: payload.country_code.unwrap_or_default(),
                    region_code: payload.region,
                    city: payload.city,
                    country_name: payload.country,
                    timezone: payload.timezone,
                })
            }
            Provider::IpapiCo { base_url } => {
                let url = format!("{base_url}/{ip}/json/");
                let response = self.http.get(&url).send().await?;
                if !response.status().is_success() {
                    return Err(GeoError::Status {
                        status: response.status(),
                    });
                }
                let payload: IpapiCoResponse = response.json().await?;
                if payload.error.unwrap_or(false) {
                    return Err(GeoError::Unresolved);
                }
                Ok(GeoLocation {
                    country_code: payload.country_code.unwrap_or_default(),
                    region_code: payload.region_code,
                    city: payload.city,
                    country_name: payload.country_name,
                    timezone: payload.timezone,
                })
            }
        }
    }
}

/// Pick an IANA timezone for a located IP.
///
/// Preference order: the provider's own timezone when it parses as a
/// valid zone, a US state-table refinement, the country table, then
/// [`DEFAULT_TIMEZONE`].
pub fn timezone_for(location: &GeoLocation) -> String {
    if let Some(tz) = &location.timezone {
        if tz.parse::<chrono_tz::Tz>().is_ok() {
            return tz.clone();
        }
    }
    if location.country_code == "US" {
        if let Some(tz) = location
            .region_code
            .as_deref()
            .and_then(us_state_timezone)
        {
            return tz.to_string();
        }
    }
    country_timezone(&location.country_code)
        .unwrap_or(DEFAULT_TIMEZONE)
        .to_string()
}

/// Display label for a located IP, e.g. `"Seattle, United States"`.
pub fn location_label(location: &GeoLocation) -> Option<String> {
    match (&location.city, &location.country_name) {
        (Some(city), Some(country)) => Some(format!("{city}, {country}")),
        (Some(city), None) => Some(city.clone()),
        (None, Some(country)) => Some(country.clone()),
        (None, None) => None,
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    #[serde(default)]
    status: String,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
    country: Option<String>,
    /// Region code, e.g. `"WA"` for Washington.
    region: Option<String>,
    city: Option<String>,
    timezone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IpapiCoResponse {
    country_code: Option<String>,
    country_name: Option<String>,
    region_code: Option<String>,
    city: Option<String>,
    timezone: Option<String>,
    error: Option<bool>,
}
