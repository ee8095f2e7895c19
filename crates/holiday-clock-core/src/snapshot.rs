//! Server-side countdown snapshot computation.
//!
//! Everything here is a pure function of an explicit wall-clock instant
//! and a holiday list for the current year, so the HTTP boundary decides
//! what "now" means (the resolved display timezone's wall clock) and the
//! tests pin instants exactly.
//!
//! Countdown math is wall-clock based: holiday targets are the start of
//! the holiday's calendar day, the weekend target is the start of the
//! coming Saturday.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::countdown::{Countdown, CountdownSnapshot, HolidayCountdown, MajorHoliday};
use crate::holidays::PublicHoliday;

/// Countdown to the start of the coming Saturday.
///
/// On Saturday or Sunday the weekend has already arrived and the result
/// is exactly zero.
pub fn weekend_countdown(now: NaiveDateTime) -> Countdown {
    let weekday = now.weekday();
    if matches!(weekday, Weekday::Sat | Weekday::Sun) {
        return Countdown::ZERO;
    }
    // Mon..Fri -> 5..1 days until Saturday.
    let days_ahead = 6 - i64::from(weekday.num_days_from_sunday());
    let saturday = (now.date() + Duration::days(days_ahead)).and_time(NaiveTime::MIN);
    Countdown::from_duration(saturday - now)
}

/// Countdown to the start of a holiday's calendar day.
///
/// A date at or before `now` rolls forward by exactly one calendar year
/// (Feb 29 clamps to Feb 28) before the remaining duration is computed,
/// so the result always represents the next occurrence.
pub fn holiday_countdown(
    date: NaiveDate,
    name: &str,
    vacation_days: u32,
    now: NaiveDateTime,
) -> HolidayCountdown {
    let mut target = date;
    if target.and_time(NaiveTime::MIN) <= now {
        target = target.checked_add_months(Months::new(12)).unwrap_or(target);
    }
    HolidayCountdown {
        name: name.to_string(),
        remaining: Countdown::from_duration(target.and_time(NaiveTime::MIN) - now),
        vacation_days,
    }
}

/// Resolve the fixed major-holiday set from the year's holiday list.
///
/// Output order is always Thanksgiving, Christmas, New Year with
/// vacation days 4/2/1; holidays absent from the source list are
/// omitted, not represented as placeholders. Output names are the
/// canonical labels even when the source used the "... Day" form.
pub fn major_holiday_countdowns(
    holidays: &[PublicHoliday],
    now: NaiveDateTime,
) -> Vec<HolidayCountdown> {
    MajorHoliday::ALL
        .iter()
        .filter_map(|major| {
            holidays
                .iter()
                .find(|h| major.matches(&h.name))
                .map(|h| holiday_countdown(h.date, major.label(), major.vacation_days(), now))
        })
        .collect()
}

/// The chronologically closest strictly-future holiday, from the full
/// list (not just the major set). Vacation days are pinned at 1 here
/// regardless of the holiday's actual entitlement.
pub fn nearest_holiday_countdown(
    holidays: &[PublicHoliday],
    now: NaiveDateTime,
) -> Option<HolidayCountdown> {
    holidays
        .iter()
        .filter(|h| h.date.and_time(NaiveTime::MIN) > now)
        .min_by_key(|h| h.date)
        .map(|h| holiday_countdown(h.date, &h.name, 1, now))
}

/// Assemble the full snapshot for one request.
pub fn snapshot(holidays: &[PublicHoliday], now: NaiveDateTime) -> CountdownSnapshot {
    CountdownSnapshot {
        weekend_countdown: weekend_countdown(now),
        nearest_holiday: nearest_holiday_countdown(holidays, now),
        holiday_countdowns: major_holiday_countdowns(holidays, now),
    }
}
