//! Baseline normalization and session windowing.

use chrono::{DateTime, Utc};
use intraday_types::{
    BaselineUnavailable, BoundaryError, NormalizedPoint, NormalizedSeries, PriceSample, RawTable,
    SessionWindow, Symbol, Watchlist,
};

use crate::{Frame, InstrumentFrame, Normalized, SessionBounds, SessionClock};

/// Builds per-instrument normalized series and session windows.
///
/// The builder is a pure function of its inputs: the wall clock is always
/// passed in, never read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedWindowBuilder {
    clock: SessionClock,
    seed: SessionWindow,
}

impl NormalizedWindowBuilder {
    /// Creates a builder with the default `(0.95, 1.05)` seed window.
    #[must_use]
    pub const fn new(clock: SessionClock) -> Self {
        Self {
            clock,
            seed: SessionWindow::DEFAULT,
        }
    }

    /// Returns this builder with a different seed window.
    #[must_use]
    pub const fn with_seed(mut self, seed: SessionWindow) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the session clock.
    #[must_use]
    pub const fn clock(&self) -> &SessionClock {
        &self.clock
    }

    /// Returns the seed window.
    #[must_use]
    pub const fn seed(&self) -> SessionWindow {
        self.seed
    }

    /// Normalizes every instrument of `table` against its last close before
    /// local midnight of `now`'s calendar day.
    ///
    /// Entries follow watchlist order. Watchlist symbols missing from the
    /// table are treated as empty, and table symbols not on the watchlist
    /// follow in symbol order. An instrument without a baseline gets a
    /// [`BaselineUnavailable`] entry; the rest of the batch is unaffected.
    ///
    /// # Errors
    ///
    /// Returns an error only if the day's boundaries cannot be computed.
    pub fn build(
        &self,
        table: &RawTable,
        watchlist: &Watchlist,
        now: DateTime<Utc>,
    ) -> Result<Frame, BoundaryError> {
        let bounds = self.clock.boundaries(now)?;

        let listed = watchlist.iter().map(|instrument| {
            let samples = table.get(instrument.symbol()).unwrap_or_default();
            (instrument.symbol(), Some(instrument.name()), samples)
        });
        let unlisted = table
            .iter()
            .filter(|(symbol, _)| watchlist.find(symbol).is_none())
            .map(|(symbol, samples)| (symbol, None, samples));

        let instruments: Vec<InstrumentFrame> = listed
            .chain(unlisted)
            .map(|(symbol, name, samples)| InstrumentFrame {
                symbol: symbol.clone(),
                name: name.map(str::to_string),
                outcome: self.normalize(symbol, samples, &bounds),
            })
            .collect();

        for missing in instruments.iter().filter_map(|f| f.outcome.as_ref().err()) {
            tracing::debug!(symbol = %missing.symbol, midnight = %missing.midnight, "no baseline close");
        }

        Ok(Frame::new(bounds, self.seed, instruments))
    }

    fn normalize(
        &self,
        symbol: &Symbol,
        samples: &[PriceSample],
        bounds: &SessionBounds,
    ) -> Result<Normalized, BaselineUnavailable> {
        let closes: Vec<(DateTime<Utc>, f64)> = samples
            .iter()
            .filter_map(|s| s.usable_close().map(|close| (s.timestamp, close)))
            .collect();

        let baseline = closes
            .iter()
            .filter(|(ts, _)| *ts < bounds.midnight)
            .max_by_key(|(ts, _)| *ts)
            .map(|(_, close)| *close)
            .ok_or_else(|| BaselineUnavailable {
                symbol: symbol.clone(),
                midnight: bounds.midnight,
            })?;

        let series = normalize_series(&closes, baseline);
        let window = closes
            .iter()
            .filter(|(ts, _)| bounds.in_session(*ts))
            .fold(self.seed, |window, (_, close)| window.widen(close / baseline));

        Ok(Normalized {
            series,
            window,
            baseline,
        })
    }
}

/// Converts sorted closes to epoch-second ratios. Rows that truncate to the
/// same second collapse to the latest one.
fn normalize_series(closes: &[(DateTime<Utc>, f64)], baseline: f64) -> NormalizedSeries {
    let mut points: Vec<NormalizedPoint> = Vec::with_capacity(closes.len());
    for (ts, close) in closes {
        let point = NormalizedPoint::new(ts.timestamp(), close / baseline);
        match points.last_mut() {
            Some(last) if last.epoch == point.epoch => *last = point,
            _ => points.push(point),
        }
    }
    NormalizedSeries::from_sorted(points)
}
