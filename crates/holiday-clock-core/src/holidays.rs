//! Public-holiday lookup via the Nager.Date API.
//!
//! The holiday source is a network collaborator and must be treated as
//! unreliable: callers on the request path use
//! [`HolidayClient::public_holidays_or_empty`], which degrades to an
//! empty list so the weekend countdown still computes when the source
//! is down.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::HolidayError;

/// Production endpoint for the Nager.Date API.
pub const NAGER_BASE_URL: &str = "https://date.nager.at";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// One public holiday as reported by the source, keyed by calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    pub date: NaiveDate,
    pub name: String,
    #[serde(
        default,
        rename = "localName",
        skip_serializing_if = "Option::is_none"
    )]
    pub local_name: Option<String>,
}

/// Client for the public-holiday API.
///
/// The base URL is injectable so tests can point at a mock server.
#[derive(Debug, Clone)]
pub struct HolidayClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for HolidayClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HolidayClient {
    pub fn new() -> Self {
        Self::with_base_url(NAGER_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the public holidays for a year and country code.
    pub async fn public_holidays(
        &self,
        year: i32,
        country: &str,
    ) -> Result<Vec<PublicHoliday>, HolidayError> {
        let url = format!("{}/api/v3/PublicHolidays/{year}/{country}", self.base_url);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(HolidayError::Status {
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch holidays, degrading to an empty list on any failure.
    ///
    /// The countdown snapshot must still be produced when the source is
    /// unreachable, so upstream errors are logged and swallowed here.
    pub async fn public_holidays_or_empty(&self, year: i32, country: &str) -> Vec<PublicHoliday> {
        match self.public_holidays(year, country).await {
            Ok(holidays) => holidays,
            Err(e) => {
                warn!("Failed to fetch holiday data: {e}");
                Vec::new()
            }
        }
    }
}
