//! # Holiday Clock Core Library
//!
//! This library provides the core logic for the Holiday Clock service:
//! a live clock with countdowns to the upcoming weekend and a handful of
//! public holidays. The HTTP server and the terminal client are thin
//! layers over the same core library.
//!
//! ## Architecture
//!
//! - **Countdown Engine**: the client-side state holder. Owns five
//!   countdown slots and requires the caller to invoke `tick()` once per
//!   second; every successful server poll replaces all slots wholesale.
//! - **Snapshot Provider**: the server-side computation. Pure functions
//!   of an explicit wall-clock instant and a fetched holiday list.
//! - **External Data**: best-effort clients for the Nager.Date public
//!   holiday API and an IP-geolocation fallback chain. Both degrade to
//!   safe defaults instead of failing the request.
//!
//! ## Key Components
//!
//! - [`Countdown`]: decomposed non-negative remaining duration
//! - [`CountdownEngine`]: five-slot tick/replace state machine
//! - [`HolidayClient`]: public-holiday lookup by year and country
//! - [`GeoResolver`]: ranked IP-geolocation strategies with a default

pub mod countdown;
pub mod error;
pub mod geo;
pub mod holidays;
pub mod snapshot;

pub use countdown::{
    Countdown, CountdownEngine, CountdownSnapshot, HolidayCountdown, MajorHoliday, TimeReport,
};
pub use error::{CoreError, GeoError, HolidayError};
pub use geo::{GeoLocation, GeoResolver, DEFAULT_TIMEZONE};
pub use holidays::{HolidayClient, PublicHoliday};
