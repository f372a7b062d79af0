//! Server configuration, read once from the environment in `main`.

use std::time::Duration;
use thiserror::Error;

/// Errors while reading server configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed (or is out of range).
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Settings for the web binary. Nothing in the scheduling logic reads these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Schedules not accessed for this long are removed.
    pub schedule_ttl: Duration,
    /// How often the cleanup task runs.
    pub cleanup_interval: Duration,
    /// Upper bound on participants per schedule.
    pub max_participants: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            schedule_ttl: Duration::from_secs(12 * 3600),
            cleanup_interval: Duration::from_secs(30 * 60),
            max_participants: 64,
        }
    }
}

impl ServerConfig {
    /// Load from process env: HOST, PORT, SCHEDULE_TTL_SECS, CLEANUP_INTERVAL_SECS, MAX_PARTICIPANTS.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Unset variables fall back to defaults;
    /// set but unparsable ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let schedule_ttl = parse_var(&lookup, "SCHEDULE_TTL_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.schedule_ttl);
        let cleanup_interval = match parse_var::<u64, _>(&lookup, "CLEANUP_INTERVAL_SECS")? {
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    name: "CLEANUP_INTERVAL_SECS",
                    value: "0".to_string(),
                })
            }
            Some(secs) => Duration::from_secs(secs),
            None => defaults.cleanup_interval,
        };
        let max_participants =
            parse_var(&lookup, "MAX_PARTICIPANTS")?.unwrap_or(defaults.max_participants);

        Ok(Self {
            host,
            port,
            schedule_ttl,
            cleanup_interval,
            max_participants,
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            match parsed {
                Ok(v) => Ok(Some(v)),
                Err(_) => Err(ConfigError::InvalidValue { name, value }),
            }
        }
    }
}
