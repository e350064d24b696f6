use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_NAME: &str = "SkyBooking";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_CACHE_TTL_SECONDS: u64 = 3600;

const CACHE_TTL_VAR: &str = "AVAILABLE_FLIGHTS_CACHE_TTL_SECONDS";

pub struct Config {
    pub database_url: String,

    pub app_name: String,
    pub bind_address: String,

    /// How long an availability search result stays cached.
    pub available_flights_cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_name: std::env::var("APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string()),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            available_flights_cache_ttl: parse_cache_ttl(std::env::var(CACHE_TTL_VAR).ok())?,
        })
    }
}

/// Reads the cache TTL in whole seconds, falling back to one hour when unset.
fn parse_cache_ttl(raw: Option<String>) -> Result<Duration, ConfigError> {
    match raw {
        None => Ok(Duration::from_secs(DEFAULT_CACHE_TTL_SECONDS)),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: CACHE_TTL_VAR.to_string(),
                value,
            }),
    }
}
