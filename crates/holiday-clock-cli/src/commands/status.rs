use clap::Args;

use super::{fetch_report, CliError};

#[derive(Args)]
pub struct StatusArgs {
    /// Server base URL
    #[arg(long, default_value = "http://localhost:3000")]
    pub server: String,
    /// Request a specific IANA timezone
    #[arg(long)]
    pub timezone: Option<String>,
}

/// Print one time report as pretty JSON.
pub async fn run(args: StatusArgs) -> Result<(), CliError> {
    let report = fetch_report(&args.server, args.timezone.as_deref()).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
