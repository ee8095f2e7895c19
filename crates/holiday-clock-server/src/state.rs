use std::sync::Arc;

use holiday_clock_core::{GeoResolver, HolidayClient};

use super::config::Config;

/// Read-only shared state: configuration plus the outbound clients.
pub struct AppState {
    pub config: Config,
    pub holidays: HolidayClient,
    pub geo: GeoResolver,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        Self::with_clients(Config::load(), HolidayClient::new(), GeoResolver::new())
    }

    /// Assemble state from explicit parts (tests inject mock-backed
    /// clients here).
    pub fn with_clients(config: Config, holidays: HolidayClient, geo: GeoResolver) -> Arc<Self> {
        Arc::new(Self {
            config,
            holidays,
            geo,
        })
    }
}
