pub mod holidays;
pub mod status;
pub mod watch;

use std::time::Duration;

use holiday_clock_core::TimeReport;

pub(crate) type CliError = Box<dyn std::error::Error + Send + Sync>;

/// Fetch one time report from a running holiday-clock server.
pub(crate) async fn fetch_report(
    server: &str,
    timezone: Option<&str>,
) -> Result<TimeReport, CliError> {
    let mut endpoint = url::Url::parse(server)?.join("/api/time")?;
    if let Some(tz) = timezone {
        endpoint.query_pairs_mut().append_pair("timezone", tz);
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;
    let report = client
        .get(endpoint)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(report)
}
