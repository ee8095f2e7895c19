use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A decomposed non-negative remaining duration.
///
/// `days` is unbounded; the other fields stay inside their natural
/// modulus. The decomposition truncates -- no rounding anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Countdown {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a duration into days/hours/minutes/seconds.
    ///
    /// Negative durations clamp to zero.
    pub fn from_duration(remaining: Duration) -> Self {
        let total = remaining.num_seconds().max(0);
        Self {
            days: (total / 86_400) as u64,
            hours: ((total / 3_600) % 24) as u32,
            minutes: ((total / 60) % 60) as u32,
            seconds: (total % 60) as u32,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Total represented duration in seconds.
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds)
    }

    /// Take one second off via a strict borrow chain: seconds borrow
    /// from minutes, minutes from hours, hours from days.
    ///
    /// `{0,0,0,0}` is absorbing -- a bottomed-out countdown stays at
    /// zero until replaced by a fresh snapshot. No field ever goes
    /// negative and no rollover to a new occurrence happens here.
    pub fn decrement(&mut self) {
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else if self.hours > 0 {
            self.hours -= 1;
            self.minutes = 59;
            self.seconds = 59;
        } else if self.days > 0 {
            self.days -= 1;
            self.hours = 23;
            self.minutes = 59;
            self.seconds = 59;
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days {} hours {} minutes {} seconds",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// A countdown to a named holiday, carrying its fixed vacation-day
/// entitlement. `name` is the join key between the server snapshot and
/// the client's named slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayCountdown {
    pub name: String,
    #[serde(flatten)]
    pub remaining: Countdown,
    pub vacation_days: u32,
}

/// The authoritative server-computed countdown state for one request.
///
/// Produced fresh every time -- nothing persists across requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownSnapshot {
    pub weekend_countdown: Countdown,
    /// `null` on the wire when no future holiday exists.
    pub nearest_holiday: Option<HolidayCountdown>,
    pub holiday_countdowns: Vec<HolidayCountdown>,
}

/// Full `/api/time` response body, shared by the server and the
/// terminal client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeReport {
    /// Wall-clock time in the resolved timezone, `YYYY-MM-DD HH:mm:ss`.
    pub current_time: String,
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(flatten)]
    pub snapshot: CountdownSnapshot,
}

/// The fixed set of recognized major holidays.
///
/// Vacation-day counts are attributes of this set, not of the source
/// data. `ALL` is the required output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorHoliday {
    Thanksgiving,
    Christmas,
    NewYear,
}

impl MajorHoliday {
    pub const ALL: [MajorHoliday; 3] = [Self::Thanksgiving, Self::Christmas, Self::NewYear];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Thanksgiving => "Thanksgiving",
            Self::Christmas => "Christmas",
            Self::NewYear => "New Year",
        }
    }

    pub fn vacation_days(self) -> u32 {
        match self {
            Self::Thanksgiving => 4,
            Self::Christmas => 2,
            Self::NewYear => 1,
        }
    }

    /// Match a source-data holiday name. Accepts the canonical label
    /// and the "... Day" form the holiday API uses.
    pub fn matches(self, name: &str) -> bool {
        match self {
            Self::Thanksgiving => name == "Thanksgiving" || name == "Thanksgiving Day",
            Self::Christmas => name == "Christmas" || name == "Christmas Day",
            Self::NewYear => name == "New Year" || name == "New Year's Day",
        }
    }
}
