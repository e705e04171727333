//! Error types for intraday.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

use crate::Symbol;

/// Result type alias for intraday operations.
pub type Result<T> = std::result::Result<T, IntradayError>;

/// Errors that can abort a whole refresh.
#[derive(Error, Debug)]
pub enum IntradayError {
    /// Invalid watchlist or session configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The batched quote fetch failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Session boundaries could not be placed on the timeline.
    #[error(transparent)]
    Boundary(#[from] BoundaryError),
}

/// Configuration errors, raised at construction time and never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Both a period and explicit start/end were given.
    #[error("Provide either a period or start and end times, not both")]
    ConflictingRange,

    /// Neither a period nor start/end was given.
    #[error("Provide either a period or start and end times")]
    MissingRange,

    /// Only one of start and end was given.
    #[error("Explicit ranges need both a start and an end")]
    IncompleteRange,

    /// Start is after end.
    #[error("Invalid range: {start} > {end}")]
    InvalidRange {
        /// The start instant.
        start: DateTime<Utc>,
        /// The end instant.
        end: DateTime<Utc>,
    },

    /// The same symbol appears twice in one watchlist.
    #[error("Duplicate symbol in watchlist: {0}")]
    DuplicateSymbol(Symbol),

    /// An instrument was declared with a blank symbol.
    #[error("Instrument symbol must not be empty")]
    EmptySymbol,

    /// Session start is after session end.
    #[error("Invalid session: {start} > {end}")]
    InvalidSession {
        /// Local session start.
        start: NaiveTime,
        /// Local session end.
        end: NaiveTime,
    },

    /// The reference time zone identifier is not in the tz database.
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
}

/// Failure of the batched quote request as a whole.
///
/// Symbols that merely come back without rows are not errors; they map to an
/// empty sample sequence instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The request did not complete in time.
    #[error("Quote request timed out")]
    Timeout,

    /// The service answered with an error status.
    #[error("Server error: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// A local clock time that cannot be mapped to an instant in the zone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    /// No instant within the search horizon carries this local time.
    #[error("Local time {time} on {date} cannot be resolved in {zone}")]
    Unresolvable {
        /// Local calendar date.
        date: NaiveDate,
        /// Local clock time.
        time: NaiveTime,
        /// Zone identifier.
        zone: String,
    },
}

/// No close exists before local midnight for an instrument.
///
/// This is a per-instrument outcome: it sits in the `Err` arm of that
/// instrument's entry and never aborts the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No baseline close before {midnight} for {symbol}")]
pub struct BaselineUnavailable {
    /// The instrument without a baseline.
    pub symbol: Symbol,
    /// The local midnight (as UTC) the baseline had to precede.
    pub midnight: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_config_error_converts() {
        let err: IntradayError = ConfigError::MissingRange.into();
        assert!(matches!(err, IntradayError::Config(ConfigError::MissingRange)));
        assert_eq!(
            err.to_string(),
            "Provide either a period or start and end times"
        );
    }

    #[test]
    fn test_baseline_unavailable_message() {
        let midnight = Utc.with_ymd_and_hms(2024, 3, 30, 22, 0, 0).unwrap();
        let err = BaselineUnavailable {
            symbol: Symbol::new("NOKIA.HE"),
            midnight,
        };
        assert!(err.to_string().contains("NOKIA.HE"));
    }
}
