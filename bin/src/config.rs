//! Board configuration file.
//!
//! Without `--config`, the watchlist embedded from `data/watchlist.toml` is
//! used.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveTime, Utc};
use intraday_lib::prelude::*;
use intraday_lib::{DEFAULT_SESSION_END, DEFAULT_SESSION_START};
use serde::{Deserialize, Deserializer};
use std::path::Path;
use std::time::Duration;

/// The built-in watchlist.
const DEFAULT_CONFIG: &str = include_str!("../data/watchlist.toml");

/// Everything needed to run a board.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BoardConfig {
    #[serde(default = "default_timezone")]
    pub(crate) timezone: String,
    #[serde(
        default = "default_session_start",
        deserialize_with = "deserialize_clock"
    )]
    pub(crate) session_start: NaiveTime,
    #[serde(default = "default_session_end", deserialize_with = "deserialize_clock")]
    pub(crate) session_end: NaiveTime,
    #[serde(default = "default_refresh_secs")]
    pub(crate) refresh_secs: u64,
    #[serde(default)]
    pub(crate) log_level: Option<String>,
    pub(crate) range: RangeConfig,
    #[serde(rename = "instrument", default)]
    pub(crate) instruments: Vec<Instrument>,
}

/// The `[range]` table. Exactly one of `period` or `start`/`end` is allowed;
/// that rule is enforced when the watchlist is built.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RangeConfig {
    pub(crate) period: Option<Period>,
    pub(crate) start: Option<DateTime<Utc>>,
    pub(crate) end: Option<DateTime<Utc>>,
    pub(crate) interval: Option<Interval>,
}

fn default_timezone() -> String {
    "Europe/Helsinki".to_string()
}

const fn default_session_start() -> NaiveTime {
    DEFAULT_SESSION_START
}

const fn default_session_end() -> NaiveTime {
    DEFAULT_SESSION_END
}

const fn default_refresh_secs() -> u64 {
    60
}

/// Accepts "HH:MM" or "HH:MM:SS".
fn deserialize_clock<'de, D>(deserializer: D) -> std::result::Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
        .map_err(|_| serde::de::Error::custom(format!("invalid clock time '{raw}', expected HH:MM")))
}

impl BoardConfig {
    /// Loads the config at `path`, or the built-in watchlist.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Self::from_toml(&raw).with_context(|| format!("failed to parse {}", path.display()))
            }
            None => Self::from_toml(DEFAULT_CONFIG).context("built-in watchlist is invalid"),
        }
    }

    /// Parses and validates a config document.
    pub(crate) fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        // Fail fast on range and zone errors rather than on the first refresh.
        config.watchlist()?;
        config.clock()?;
        anyhow::ensure!(config.refresh_secs > 0, "refresh_secs must be positive");
        Ok(config)
    }

    /// Builds the watchlist.
    pub(crate) fn watchlist(&self) -> Result<Watchlist> {
        let watchlist = Watchlist::from_parts(
            self.instruments.clone(),
            self.range.period,
            self.range.start,
            self.range.end,
            self.range.interval,
        )?;
        Ok(watchlist)
    }

    /// Builds the session clock.
    pub(crate) fn clock(&self) -> Result<SessionClock> {
        let clock =
            SessionClock::from_zone_name(&self.timezone, self.session_start, self.session_end)?;
        Ok(clock)
    }

    /// Returns the refresh period.
    pub(crate) const fn refresh_every(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }
}
