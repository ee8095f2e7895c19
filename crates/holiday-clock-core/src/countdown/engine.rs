//! Countdown engine implementation.
//!
//! The engine is the client-side half of the system. It does not use
//! internal threads - the caller is responsible for calling `tick()`
//! once per second and `apply()` whenever a fresh server snapshot
//! arrives.
//!
//! ## Slot lifecycle
//!
//! ```text
//! Absent -> Present        on the first successful fetch
//! Present -> Present'      on every tick (decrement) and every fetch (replace)
//! ```
//!
//! A failed fetch never empties a slot: the last known value stays in
//! place and a display-level error flag is raised instead. Server truth
//! wins unconditionally on the next successful fetch, which bounds
//! local drift to one poll interval.

use serde::{Deserialize, Serialize};

use super::types::{Countdown, CountdownSnapshot, HolidayCountdown, MajorHoliday};

/// Five-slot countdown state holder.
///
/// Operates on caller-supplied events only -- no internal timers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountdownEngine {
    weekend: Option<Countdown>,
    nearest_holiday: Option<HolidayCountdown>,
    thanksgiving: Option<HolidayCountdown>,
    christmas: Option<HolidayCountdown>,
    new_year: Option<HolidayCountdown>,
    /// Raised by a failed poll, cleared by the next successful one.
    #[serde(default)]
    fetch_failed: bool,
}

impl CountdownEngine {
    /// Create an engine with every slot absent.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn weekend(&self) -> Option<&Countdown> {
        self.weekend.as_ref()
    }

    pub fn nearest_holiday(&self) -> Option<&HolidayCountdown> {
        self.nearest_holiday.as_ref()
    }

    pub fn thanksgiving(&self) -> Option<&HolidayCountdown> {
        self.thanksgiving.as_ref()
    }

    pub fn christmas(&self) -> Option<&HolidayCountdown> {
        self.christmas.as_ref()
    }

    pub fn new_year(&self) -> Option<&HolidayCountdown> {
        self.new_year.as_ref()
    }

    /// Whether the most recent poll failed.
    pub fn fetch_failed(&self) -> bool {
        self.fetch_failed
    }

    /// True until the first successful fetch.
    pub fn is_empty(&self) -> bool {
        self.weekend.is_none()
            && self.nearest_holiday.is_none()
            && self.thanksgiving.is_none()
            && self.christmas.is_none()
            && self.new_year.is_none()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Advance every present slot by one second.
    pub fn tick(&mut self) {
        if let Some(ref mut weekend) = self.weekend {
            weekend.decrement();
        }
        for slot in [
            &mut self.nearest_holiday,
            &mut self.thanksgiving,
            &mut self.christmas,
            &mut self.new_year,
        ] {
            if let Some(holiday) = slot {
                holiday.remaining.decrement();
            }
        }
    }

    /// Replace all five slots from a fresh server snapshot.
    ///
    /// Overwrite, not merge: local tick progress since the last poll is
    /// discarded. A major holiday missing from the snapshot leaves its
    /// slot absent.
    pub fn apply(&mut self, snapshot: &CountdownSnapshot) {
        self.weekend = Some(snapshot.weekend_countdown);
        self.nearest_holiday = snapshot.nearest_holiday.clone();
        self.thanksgiving = named_slot(snapshot, MajorHoliday::Thanksgiving);
        self.christmas = named_slot(snapshot, MajorHoliday::Christmas);
        self.new_year = named_slot(snapshot, MajorHoliday::NewYear);
        self.fetch_failed = false;
    }

    /// Record a failed poll without touching retained slot values.
    pub fn mark_fetch_failed(&mut self) {
        self.fetch_failed = true;
    }
}

fn named_slot(snapshot: &CountdownSnapshot, which: MajorHoliday) -> Option<HolidayCountdown> {
    snapshot
        .holiday_countdowns
        .iter()
        .find(|h| which.matches(&h.name))
        .cloned()
}
