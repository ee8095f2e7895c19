mod engine;
mod types;

pub use engine::CountdownEngine;
pub use types::{Countdown, CountdownSnapshot, HolidayCountdown, MajorHoliday, TimeReport};
