use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

/// Server configuration, loaded from the environment with logged
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Root directory for the static page shell.
    pub static_dir: String,
    /// Country code passed to the holiday source.
    pub holiday_country: String,
    /// Whether to derive the timezone from the request IP when no
    /// `timezone` query parameter is given.
    pub geo_lookup: bool,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "3000"),
            static_dir: try_load("STATIC_DIR", "public"),
            holiday_country: try_load("HOLIDAY_COUNTRY", "US"),
            geo_lookup: try_load("GEO_LOOKUP", "false"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            static_dir: "public".to_string(),
            holiday_country: "US".to_string(),
            geo_lookup: false,
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
