//! E2E tests for the holiday API client against a mock server.

use chrono::NaiveDate;
use holiday_clock_core::HolidayClient;

#[tokio::test]
async fn fetches_and_decodes_holidays() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v3/PublicHolidays/2025/US")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"date": "2025-11-27", "localName": "Thanksgiving Day", "name": "Thanksgiving Day"},
                {"date": "2025-12-25", "localName": "Christmas Day", "name": "Christmas Day"}
            ]"#,
        )
        .create_async()
        .await;

    let client = HolidayClient::with_base_url(&server.url());
    let holidays = client.public_holidays(2025, "US").await.unwrap();

    assert_eq!(holidays.len(), 2);
    assert_eq!(holidays[0].name, "Thanksgiving Day");
    assert_eq!(
        holidays[1].date,
        NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v3/PublicHolidays/2025/US")
        .with_status(503)
        .create_async()
        .await;

    let client = HolidayClient::with_base_url(&server.url());
    assert!(client.public_holidays(2025, "US").await.is_err());
}

#[tokio::test]
async fn or_empty_degrades_on_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v3/PublicHolidays/2025/US")
        .with_status(500)
        .create_async()
        .await;

    let client = HolidayClient::with_base_url(&server.url());
    assert!(client.public_holidays_or_empty(2025, "US").await.is_empty());
}

#[tokio::test]
async fn or_empty_degrades_on_malformed_payload() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v3/PublicHolidays/2025/US")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json")
        .create_async()
        .await;

    let client = HolidayClient::with_base_url(&server.url());
    assert!(client.public_holidays_or_empty(2025, "US").await.is_empty());
}
