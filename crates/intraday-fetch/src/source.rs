//! The market-data seam.

use std::collections::HashMap;

use async_trait::async_trait;
use intraday_types::{FetchError, Interval, PriceSample, RangeSpec, Symbol, Watchlist};

/// Rows per symbol as returned by a [`QuoteSource`]. Symbols the service had
/// nothing for may be absent.
pub type BatchResponse = HashMap<Symbol, Vec<PriceSample>>;

/// One request covering every symbol of a watchlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    /// Symbols in legend order.
    pub symbols: Vec<Symbol>,
    /// Rows to request.
    pub range: RangeSpec,
    /// Sampling interval; the service default when `None`.
    pub interval: Option<Interval>,
}

impl BatchRequest {
    /// Creates a request for every instrument of the watchlist.
    #[must_use]
    pub fn from_watchlist(watchlist: &Watchlist) -> Self {
        Self {
            symbols: watchlist.symbols().cloned().collect(),
            range: watchlist.range(),
            interval: watchlist.interval(),
        }
    }
}

/// A market-data service that answers batched close-price requests.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetches rows for all requested symbols in a single round-trip.
    ///
    /// # Errors
    ///
    /// Returns an error only when the batch fails as a whole.
    async fn fetch_batch(&self, request: &BatchRequest) -> Result<BatchResponse, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use intraday_types::{Instrument, Period};

    #[test]
    fn test_request_from_watchlist() {
        let watchlist = Watchlist::new(
            vec![
                Instrument::new("^IXIC", "NASDAQ"),
                Instrument::new("NVDA", "Nvidia"),
            ],
            RangeSpec::Period(Period::Day5),
            Some(Interval::Minute1),
        )
        .unwrap();

        let request = BatchRequest::from_watchlist(&watchlist);
        assert_eq!(request.symbols, [Symbol::new("^IXIC"), Symbol::new("NVDA")]);
        assert_eq!(request.range, RangeSpec::Period(Period::Day5));
        assert_eq!(request.interval, Some(Interval::Minute1));
    }
}
