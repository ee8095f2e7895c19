use chrono::Datelike;
use clap::Args;
use holiday_clock_core::HolidayClient;

use super::CliError;

#[derive(Args)]
pub struct HolidaysArgs {
    /// Year to query (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,
    /// ISO 3166-1 alpha-2 country code
    #[arg(long, default_value = "US")]
    pub country: String,
    /// Print raw JSON instead of a listing
    #[arg(long)]
    pub json: bool,
}

/// Query the holiday source directly and list the year's holidays.
pub async fn run(args: HolidaysArgs) -> Result<(), CliError> {
    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    let client = HolidayClient::new();
    let holidays = client.public_holidays(year, &args.country).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&holidays)?);
    } else {
        println!("Public holidays for {} in {year}:", args.country);
        for holiday in &holidays {
            println!("  {}  {}", holiday.date, holiday.name);
        }
    }
    Ok(())
}
