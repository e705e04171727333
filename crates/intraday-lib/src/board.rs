//! The refresh entry point.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use intraday_fetch::{QuoteSource, SeriesAggregator};
use intraday_types::{RawTable, Result, Watchlist};
use intraday_window::{Frame, NormalizedWindowBuilder};

/// A watchlist wired to a quote source and a window builder.
///
/// Each refresh is fetch-then-build. The last good [`Frame`] survives failed
/// refreshes so a display keeps showing stale-but-valid data.
#[derive(Debug)]
pub struct Board<S> {
    watchlist: Watchlist,
    aggregator: SeriesAggregator<S>,
    builder: NormalizedWindowBuilder,
    last_frame: Option<Arc<Frame>>,
}

impl<S: QuoteSource> Board<S> {
    /// Creates a board that has not refreshed yet.
    #[must_use]
    pub const fn new(watchlist: Watchlist, source: S, builder: NormalizedWindowBuilder) -> Self {
        Self {
            watchlist,
            aggregator: SeriesAggregator::new(source),
            builder,
            last_frame: None,
        }
    }

    /// Returns the watchlist.
    #[must_use]
    pub const fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    /// Returns the window builder.
    #[must_use]
    pub const fn builder(&self) -> &NormalizedWindowBuilder {
        &self.builder
    }

    /// Returns the last successfully built frame.
    #[must_use]
    pub const fn last_frame(&self) -> Option<&Arc<Frame>> {
        self.last_frame.as_ref()
    }

    /// Returns the last successfully fetched raw table.
    #[must_use]
    pub const fn last_table(&self) -> Option<&Arc<RawTable>> {
        self.aggregator.latest()
    }

    /// Refreshes against the current wall clock.
    ///
    /// # Errors
    ///
    /// See [`Board::refresh_at`].
    pub async fn refresh(&mut self) -> Result<Arc<Frame>> {
        self.refresh_at(Utc::now()).await
    }

    /// Fetches the watchlist and builds a frame for `now`'s calendar day.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch fetch fails or the day's boundaries
    /// cannot be computed. The previous frame is kept either way.
    pub async fn refresh_at(&mut self, now: DateTime<Utc>) -> Result<Arc<Frame>> {
        let table = self.aggregator.fetch(&self.watchlist).await?;
        let frame = Arc::new(self.builder.build(&table, &self.watchlist, now)?);

        let shared = frame.shared_range();
        tracing::info!(
            instruments = frame.len(),
            unavailable = frame.unavailable().count(),
            min = shared.min,
            max = shared.max,
            "refresh complete"
        );

        self.last_frame = Some(Arc::clone(&frame));
        Ok(frame)
    }
}
