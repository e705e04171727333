//! Ordered instrument lists with their fetch range.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::{ConfigError, Instrument, Interval, Period, RangeSpec, Symbol};

/// The fixed, ordered set of instruments shown together on one axis.
///
/// Order is legend order. Symbols are unique, and exactly one range form is
/// carried.
#[derive(Debug, Clone, PartialEq)]
pub struct Watchlist {
    instruments: Vec<Instrument>,
    range: RangeSpec,
    interval: Option<Interval>,
}

impl Watchlist {
    /// Creates a watchlist.
    ///
    /// # Errors
    ///
    /// Returns an error if a symbol is blank or appears twice.
    pub fn new(
        instruments: Vec<Instrument>,
        range: RangeSpec,
        interval: Option<Interval>,
    ) -> Result<Self, ConfigError> {
        let mut seen = HashSet::with_capacity(instruments.len());
        for instrument in &instruments {
            let symbol = instrument.symbol();
            if symbol.as_str().trim().is_empty() {
                return Err(ConfigError::EmptySymbol);
            }
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol.clone()));
            }
        }

        Ok(Self {
            instruments,
            range,
            interval,
        })
    }

    /// Creates a watchlist from optional range parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the range parts are not exactly one of
    /// {period, start and end}, or if the instruments are invalid.
    pub fn from_parts(
        instruments: Vec<Instrument>,
        period: Option<Period>,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        interval: Option<Interval>,
    ) -> Result<Self, ConfigError> {
        let range = RangeSpec::from_parts(period, start, end)?;
        Self::new(instruments, range, interval)
    }

    /// Returns the range specification.
    #[must_use]
    pub const fn range(&self) -> RangeSpec {
        self.range
    }

    /// Returns the sampling interval, if set.
    #[must_use]
    pub const fn interval(&self) -> Option<Interval> {
        self.interval
    }

    /// Returns the instruments in legend order.
    #[must_use]
    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    /// Iterates over the instruments in legend order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instrument> {
        self.instruments.iter()
    }

    /// Returns the instrument at a legend position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Instrument> {
        self.instruments.get(index)
    }

    /// Looks up an instrument by symbol.
    #[must_use]
    pub fn find(&self, symbol: &Symbol) -> Option<&Instrument> {
        self.instruments.iter().find(|i| i.symbol() == symbol)
    }

    /// Returns the symbols in legend order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.instruments.iter().map(Instrument::symbol)
    }

    /// Returns the symbols joined by single spaces.
    #[must_use]
    pub fn symbols_str(&self) -> String {
        self.symbols()
            .map(Symbol::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the number of instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// Returns true if the watchlist has no instruments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

impl<'a> IntoIterator for &'a Watchlist {
    type Item = &'a Instrument;
    type IntoIter = std::slice::Iter<'a, Instrument>;

    fn into_iter(self) -> Self::IntoIter {
        self.instruments.iter()
    }
}
