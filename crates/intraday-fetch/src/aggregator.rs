//! Refresh-cycle fetch orchestration.

use std::sync::Arc;

use intraday_types::{FetchError, RawTable, Watchlist};

use crate::{BatchRequest, QuoteSource};

/// Fetches whole watchlists and holds the latest successful table.
///
/// `fetch` takes `&mut self`, so two fetches on one aggregator can never
/// overlap. Each success swaps in a fresh [`Arc<RawTable>`]; readers holding
/// an older snapshot keep a consistent view.
#[derive(Debug)]
pub struct SeriesAggregator<S> {
    source: S,
    latest: Option<Arc<RawTable>>,
}

impl<S: QuoteSource> SeriesAggregator<S> {
    /// Creates an aggregator with no cached table.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            latest: None,
        }
    }

    /// Returns the quote source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the last successfully fetched table.
    #[must_use]
    pub const fn latest(&self) -> Option<&Arc<RawTable>> {
        self.latest.as_ref()
    }

    /// Fetches every instrument of the watchlist in one batched request.
    ///
    /// The returned table has a key for every watchlist symbol; symbols the
    /// service returned nothing for map to an empty sequence. Rows for
    /// symbols that were not requested are ignored. An empty watchlist yields
    /// an empty table without contacting the source.
    ///
    /// # Errors
    ///
    /// Returns the source's error if the batch fails as a whole. The cached
    /// table is left untouched in that case.
    pub async fn fetch(&mut self, watchlist: &Watchlist) -> Result<Arc<RawTable>, FetchError> {
        let request = BatchRequest::from_watchlist(watchlist);
        if request.symbols.is_empty() {
            tracing::debug!("empty watchlist, skipping quote batch");
            let table = Arc::new(RawTable::default());
            self.latest = Some(Arc::clone(&table));
            return Ok(table);
        }

        tracing::debug!(
            symbols = request.symbols.len(),
            range = %request.range,
            "requesting quote batch"
        );

        let mut rows = match self.source.fetch_batch(&request).await {
            Ok(rows) => rows,
            Err(error) => {
                tracing::warn!(%error, cached = self.latest.is_some(), "quote batch failed");
                return Err(error);
            }
        };

        let table = RawTable::new(request.symbols.into_iter().map(|symbol| {
            let samples = rows.remove(&symbol).unwrap_or_default();
            if samples.is_empty() {
                tracing::debug!(%symbol, "no rows returned");
            }
            (symbol, samples)
        }));

        let table = Arc::new(table);
        self.latest = Some(Arc::clone(&table));
        Ok(table)
    }
}
