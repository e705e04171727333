//! Fetch range vocabularies: lookback periods, sampling intervals and the
//! validated range specification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ConfigError;

/// Lookback period ending now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// One day.
    #[serde(rename = "1d")]
    Day1,
    /// Five days.
    #[serde(rename = "5d")]
    Day5,
    /// One month.
    #[serde(rename = "1mo")]
    Month1,
    /// Three months.
    #[serde(rename = "3mo")]
    Month3,
    /// Six months.
    #[serde(rename = "6mo")]
    Month6,
    /// One year.
    #[serde(rename = "1y")]
    Year1,
    /// Two years.
    #[serde(rename = "2y")]
    Year2,
    /// Five years.
    #[serde(rename = "5y")]
    Year5,
    /// Ten years.
    #[serde(rename = "10y")]
    Year10,
    /// Year to date.
    #[serde(rename = "ytd")]
    YearToDate,
    /// All available history.
    #[serde(rename = "max")]
    Max,
}

impl Period {
    /// Returns the period as its wire identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day1 => "1d",
            Self::Day5 => "5d",
            Self::Month1 => "1mo",
            Self::Month3 => "3mo",
            Self::Month6 => "6mo",
            Self::Year1 => "1y",
            Self::Year2 => "2y",
            Self::Year5 => "5y",
            Self::Year10 => "10y",
            Self::YearToDate => "ytd",
            Self::Max => "max",
        }
    }

    /// Returns all available periods.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Day1,
            Self::Day5,
            Self::Month1,
            Self::Month3,
            Self::Month6,
            Self::Year1,
            Self::Year2,
            Self::Year5,
            Self::Year10,
            Self::YearToDate,
            Self::Max,
        ]
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| PeriodParseError(s.to_string()))
    }
}

/// Error returned when parsing an invalid period string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(String);

impl std::fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid period '{}', expected one of: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max",
            self.0
        )
    }
}

impl std::error::Error for PeriodParseError {}

/// Sampling interval between rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// 1-minute rows.
    #[serde(rename = "1m")]
    Minute1,
    /// 2-minute rows.
    #[serde(rename = "2m")]
    Minute2,
    /// 5-minute rows.
    #[serde(rename = "5m")]
    Minute5,
    /// 15-minute rows.
    #[serde(rename = "15m")]
    Minute15,
    /// 30-minute rows.
    #[serde(rename = "30m")]
    Minute30,
    /// 60-minute rows.
    #[serde(rename = "60m")]
    Minute60,
    /// 90-minute rows.
    #[serde(rename = "90m")]
    Minute90,
    /// Hourly rows.
    #[serde(rename = "1h")]
    Hour1,
    /// Daily rows.
    #[serde(rename = "1d")]
    Day1,
    /// Five-day rows.
    #[serde(rename = "5d")]
    Day5,
    /// Weekly rows.
    #[serde(rename = "1wk")]
    Week1,
    /// Monthly rows.
    #[serde(rename = "1mo")]
    Month1,
    /// Quarterly rows.
    #[serde(rename = "3mo")]
    Month3,
}

impl Interval {
    /// Returns the interval as its wire identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "1m",
            Self::Minute2 => "2m",
            Self::Minute5 => "5m",
            Self::Minute15 => "15m",
            Self::Minute30 => "30m",
            Self::Minute60 => "60m",
            Self::Minute90 => "90m",
            Self::Hour1 => "1h",
            Self::Day1 => "1d",
            Self::Day5 => "5d",
            Self::Week1 => "1wk",
            Self::Month1 => "1mo",
            Self::Month3 => "3mo",
        }
    }

    /// Returns true for intervals shorter than a day.
    #[must_use]
    pub const fn is_intraday(&self) -> bool {
        matches!(
            self,
            Self::Minute1
                | Self::Minute2
                | Self::Minute5
                | Self::Minute15
                | Self::Minute30
                | Self::Minute60
                | Self::Minute90
                | Self::Hour1
        )
    }

    /// Returns all available intervals.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Minute1,
            Self::Minute2,
            Self::Minute5,
            Self::Minute15,
            Self::Minute30,
            Self::Minute60,
            Self::Minute90,
            Self::Hour1,
            Self::Day1,
            Self::Day5,
            Self::Week1,
            Self::Month1,
            Self::Month3,
        ]
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-sensitive: "1M" would be ambiguous between minutes and months.
        Self::all()
            .iter()
            .copied()
            .find(|i| i.as_str() == s.trim())
            .ok_or_else(|| IntervalParseError(s.to_string()))
    }
}

/// Error returned when parsing an invalid interval string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalParseError(String);

impl std::fmt::Display for IntervalParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid interval '{}', expected one of: 1m, 2m, 5m, 15m, 30m, 60m, 90m, 1h, 1d, 5d, 1wk, 1mo, 3mo",
            self.0
        )
    }
}

impl std::error::Error for IntervalParseError {}

/// Which rows to request: a lookback period or an explicit window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeSpec {
    /// Lookback period ending now.
    Period(Period),
    /// Explicit window.
    Between {
        /// Window start (inclusive).
        start: DateTime<Utc>,
        /// Window end (inclusive).
        end: DateTime<Utc>,
    },
}

impl RangeSpec {
    /// Builds a range from optional parts, enforcing that exactly one of
    /// {period, start and end} is present.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when both or neither form is given, when only
    /// one of start/end is given, or when start is after end.
    pub fn from_parts(
        period: Option<Period>,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, ConfigError> {
        match (period, start, end) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(ConfigError::ConflictingRange),
            (Some(period), None, None) => Ok(Self::Period(period)),
            (None, None, None) => Err(ConfigError::MissingRange),
            (None, Some(start), Some(end)) => Self::between(start, end),
            (None, _, _) => Err(ConfigError::IncompleteRange),
        }
    }

    /// Creates an explicit window, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ConfigError> {
        if start > end {
            return Err(ConfigError::InvalidRange { start, end });
        }
        Ok(Self::Between { start, end })
    }
}

impl std::fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Period(period) => write!(f, "last {period}"),
            Self::Between { start, end } => write!(f, "{start} to {end}"),
        }
    }
}
