//! Process configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::recommend::{RecommenderConfig, SampleFallback};

/// Default location of the bike-share export.
pub const DEFAULT_CSV_PATH: &str = "BikeShare.csv";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: String,
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Trip data CSV file (`BIKESHARE_CSV`).
    pub csv_path: PathBuf,

    /// Listen address (`BIKESHARE_ADDR`).
    pub addr: SocketAddr,

    /// Engine policy (`BIKESHARE_SAMPLE_FALLBACK`, `BIKESHARE_DEFAULT_LIMIT`).
    pub recommender: RecommenderConfig,

    /// Query cache sizing (`BIKESHARE_CACHE_CAPACITY`, `BIKESHARE_CACHE_IDLE_SECS`).
    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Unset or blank variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let csv_path = get("BIKESHARE_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_PATH));

        let addr = parse_var("BIKESHARE_ADDR", get("BIKESHARE_ADDR"))?
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

        let sample_fallback: SampleFallback =
            parse_var("BIKESHARE_SAMPLE_FALLBACK", get("BIKESHARE_SAMPLE_FALLBACK"))?
                .unwrap_or_default();
        let default_limit: Option<usize> =
            parse_var("BIKESHARE_DEFAULT_LIMIT", get("BIKESHARE_DEFAULT_LIMIT"))?;

        let defaults = CacheConfig::default();
        let max_capacity = parse_var("BIKESHARE_CACHE_CAPACITY", get("BIKESHARE_CACHE_CAPACITY"))?
            .unwrap_or(defaults.max_capacity);
        let time_to_idle = parse_var("BIKESHARE_CACHE_IDLE_SECS", get("BIKESHARE_CACHE_IDLE_SECS"))?
            .map(Duration::from_secs)
            .unwrap_or(defaults.time_to_idle);

        Ok(Self {
            csv_path,
            addr,
            recommender: RecommenderConfig::new(sample_fallback, default_limit),
            cache: CacheConfig {
                time_to_idle,
                max_capacity,
            },
        })
    }
}

/// Parse an optional variable; unset stays `None`.
fn parse_var<T>(var: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|e: T::Err| ConfigError {
            var,
            reason: e.to_string(),
            value: raw,
        }),
    }
}
