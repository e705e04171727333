//! Build output: one immutable snapshot per refresh.

use intraday_types::{BaselineUnavailable, NormalizedSeries, SessionWindow, Symbol};

use crate::SessionBounds;

/// A successfully normalized instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// Close prices divided by the baseline close.
    pub series: NormalizedSeries,
    /// Seed window widened by this instrument's in-session ratios.
    pub window: SessionWindow,
    /// Last close before local midnight.
    pub baseline: f64,
}

/// One instrument's entry in a [`Frame`].
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentFrame {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Display name, when the instrument is on the watchlist.
    pub name: Option<String>,
    /// Normalized data, or why there is none.
    pub outcome: Result<Normalized, BaselineUnavailable>,
}

impl InstrumentFrame {
    /// Returns the display name, falling back to the symbol.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.symbol.as_str())
    }

    /// Returns the normalized data, if any.
    #[must_use]
    pub fn normalized(&self) -> Option<&Normalized> {
        self.outcome.as_ref().ok()
    }
}

/// Per-instrument results of one build, in legend order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    bounds: SessionBounds,
    seed: SessionWindow,
    instruments: Vec<InstrumentFrame>,
}

impl Frame {
    pub(crate) const fn new(
        bounds: SessionBounds,
        seed: SessionWindow,
        instruments: Vec<InstrumentFrame>,
    ) -> Self {
        Self {
            bounds,
            seed,
            instruments,
        }
    }

    /// Returns the boundaries this frame was built against.
    #[must_use]
    pub const fn bounds(&self) -> &SessionBounds {
        &self.bounds
    }

    /// Returns the session band as epoch seconds, for the x-axis.
    #[must_use]
    pub fn x_range(&self) -> (i64, i64) {
        self.bounds.x_range()
    }

    /// Folds every instrument's window into one shared y-axis range.
    ///
    /// Starts from the seed, so the result always covers it.
    #[must_use]
    pub fn shared_range(&self) -> SessionWindow {
        self.iter()
            .filter_map(InstrumentFrame::normalized)
            .fold(self.seed, |range, n| range.merge(n.window))
    }

    /// Looks up an instrument by symbol.
    #[must_use]
    pub fn get(&self, symbol: &Symbol) -> Option<&InstrumentFrame> {
        self.instruments.iter().find(|f| &f.symbol == symbol)
    }

    /// Iterates over entries in legend order.
    pub fn iter(&self) -> std::slice::Iter<'_, InstrumentFrame> {
        self.instruments.iter()
    }

    /// Returns the entries that lacked a baseline.
    pub fn unavailable(&self) -> impl Iterator<Item = &BaselineUnavailable> {
        self.instruments.iter().filter_map(|f| f.outcome.as_ref().err())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// Returns true if the frame has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a InstrumentFrame;
    type IntoIter = std::slice::Iter<'a, InstrumentFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.instruments.iter()
    }
}
