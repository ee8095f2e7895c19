//! Live countdown display.
//!
//! Two independent periodic actions drive the view: a 1-second tick
//! that decrements and redraws every present slot, and a 60-second
//! poll that replaces all slots with server truth. The two timers are
//! deliberately unsynchronized; both feed one loop, so slot state has
//! exactly one writer. Polls are dispatched off the loop and their
//! results come back over a channel -- a slow fetch overlaps ticks
//! instead of stalling them.

use std::io::{self, Write};
use std::time::Duration;

use clap::Args;
use holiday_clock_core::{Countdown, CountdownEngine, HolidayCountdown, TimeReport};
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use super::{fetch_report, CliError};

const TICK_INTERVAL: Duration = Duration::from_secs(1);
const POLL_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Args)]
pub struct WatchArgs {
    /// Server base URL
    #[arg(long, default_value = "http://localhost:3000")]
    pub server: String,
    /// Request a specific IANA timezone
    #[arg(long)]
    pub timezone: Option<String>,
}

/// Header fields taken from the last successful report.
struct View {
    timezone: Option<String>,
    location: Option<String>,
}

pub async fn run(args: WatchArgs) -> Result<(), CliError> {
    let mut engine = CountdownEngine::new();
    let mut view = View {
        timezone: None,
        location: None,
    };

    let (poll_tx, mut poll_rx) = mpsc::channel::<Result<TimeReport, CliError>>(4);

    // Both intervals fire immediately on entry: the first poll seeds
    // the engine while the first frames show placeholders.
    let mut tick = interval(TICK_INTERVAL);
    let mut poll = interval(POLL_INTERVAL);
    poll.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = tick.tick() => {
                engine.tick();
                render(&engine, &view)?;
            }
            _ = poll.tick() => {
                let tx = poll_tx.clone();
                let server = args.server.clone();
                let timezone = args.timezone.clone();
                tokio::spawn(async move {
                    let result = fetch_report(&server, timezone.as_deref()).await;
                    let _ = tx.send(result).await;
                });
            }
            Some(result) = poll_rx.recv() => {
                match result {
                    Ok(report) => {
                        view.timezone = Some(report.timezone.clone());
                        view.location = report.location.clone();
                        engine.apply(&report.snapshot);
                    }
                    Err(_) => engine.mark_fetch_failed(),
                }
                render(&engine, &view)?;
            }
        }
    }
}

fn render(engine: &CountdownEngine, view: &View) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    // Clear the screen and home the cursor between frames.
    write!(out, "\x1B[2J\x1B[1;1H")?;
    writeln!(out, "Holiday Clock")?;
    writeln!(out, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    if let Some(tz) = &view.timezone {
        match &view.location {
            Some(location) => writeln!(out, "{tz} ({location})")?,
            None => writeln!(out, "{tz}")?,
        }
    }
    writeln!(out)?;
    writeln!(out, "Weekend:       {}", countdown_line(engine.weekend()))?;
    writeln!(out, "Next holiday:  {}", nearest_line(engine.nearest_holiday()))?;
    writeln!(out, "Thanksgiving:  {}", holiday_line(engine.thanksgiving()))?;
    writeln!(out, "Christmas:     {}", holiday_line(engine.christmas()))?;
    writeln!(out, "New Year:      {}", holiday_line(engine.new_year()))?;
    if engine.fetch_failed() {
        writeln!(out)?;
        writeln!(out, "Load failed -- showing last known countdowns")?;
    }
    out.flush()?;
    Ok(())
}

fn countdown_line(slot: Option<&Countdown>) -> String {
    match slot {
        Some(countdown) => countdown.to_string(),
        None => "-- days -- hours -- minutes -- seconds".to_string(),
    }
}

fn holiday_line(slot: Option<&HolidayCountdown>) -> String {
    match slot {
        Some(holiday) => format!("{} ({} days vacation)", holiday.remaining, holiday.vacation_days),
        None => "-- days -- hours -- minutes -- seconds (-- days vacation)".to_string(),
    }
}

fn nearest_line(slot: Option<&HolidayCountdown>) -> String {
    match slot {
        Some(holiday) => format!(
            "{} ({} days vacation) ({})",
            holiday.remaining, holiday.vacation_days, holiday.name
        ),
        None => "-- days -- hours -- minutes -- seconds (-- days vacation)".to_string(),
    }
}
