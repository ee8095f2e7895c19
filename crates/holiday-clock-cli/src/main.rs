use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "holiday-clock-cli", version, about = "Holiday Clock CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Live countdown display (polls the server, ticks locally)
    Watch(commands::watch::WatchArgs),
    /// Fetch one time report and print it as JSON
    Status(commands::status::StatusArgs),
    /// List public holidays for a year
    Holidays(commands::holidays::HolidaysArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Watch(args) => commands::watch::run(args).await,
        Commands::Status(args) => commands::status::run(args).await,
        Commands::Holidays(args) => commands::holidays::run(args).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
