//! Raw fetch results.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Symbol;

/// A single row from the quote service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    /// Row timestamp (UTC).
    pub timestamp: DateTime<Utc>,
    /// Close price, `None` where the service left a hole.
    pub close: Option<f64>,
}

impl PriceSample {
    /// Creates a sample with a known close.
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self {
            timestamp,
            close: Some(close),
        }
    }

    /// Creates a sample whose close is missing.
    #[must_use]
    pub const fn missing(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            close: None,
        }
    }

    /// Returns the close if it is present, finite and positive.
    ///
    /// Zero and negative closes are treated as malformed alongside holes and
    /// NaN: a relative move is only defined against a positive baseline, so
    /// such rows are never used as a baseline or as a point.
    #[must_use]
    pub fn usable_close(&self) -> Option<f64> {
        self.close.filter(|c| c.is_finite() && *c > 0.0)
    }
}

/// Result of one batched fetch: per-symbol samples in increasing time order.
///
/// Tables are replaced wholesale on each refresh, never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    series: BTreeMap<Symbol, Vec<PriceSample>>,
}

impl RawTable {
    /// Builds a table, sorting each symbol's samples by timestamp.
    ///
    /// A symbol listed more than once keeps the samples of its last entry.
    pub fn new(series: impl IntoIterator<Item = (Symbol, Vec<PriceSample>)>) -> Self {
        let series = series
            .into_iter()
            .map(|(symbol, mut samples)| {
                samples.sort_by_key(|s| s.timestamp);
                (symbol, samples)
            })
            .collect();
        Self { series }
    }

    /// Returns the samples for a symbol, if the symbol is a key.
    #[must_use]
    pub fn get(&self, symbol: &Symbol) -> Option<&[PriceSample]> {
        self.series.get(symbol).map(Vec::as_slice)
    }

    /// Returns true if the symbol is a key of this table.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.series.contains_key(symbol)
    }

    /// Returns all keys in symbol order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.series.keys()
    }

    /// Iterates over `(symbol, samples)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &[PriceSample])> {
        self.series.iter().map(|(s, v)| (s, v.as_slice()))
    }

    /// Returns the number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns true if the table has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Returns the total number of rows across all symbols.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }
}
