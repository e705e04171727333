//! Relative intraday price tracking for a fixed watchlist.
//!
//! This is a facade crate that re-exports functionality from the intraday
//! workspace crates and adds [`Board`], the refresh entry point.
//!
//! # Quick Start
//!
//! ```ignore
//! use intraday_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let watchlist = Watchlist::from_parts(
//!         vec![Instrument::new("NOKIA.HE", "Nokia")],
//!         Some(Period::Day5),
//!         None,
//!         None,
//!         Some(Interval::Minute1),
//!     )?;
//!     let builder = NormalizedWindowBuilder::new(SessionClock::helsinki());
//!     let mut board = Board::new(watchlist, SparkSource::with_defaults()?, builder);
//!
//!     let frame = board.refresh().await?;
//!     println!("shared range {}", frame.shared_range());
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/intraday/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(feature = "fetch")]
mod board;

// Re-export core types
pub use intraday_types::*;

// Re-export windowing
pub use intraday_window::{
    DEFAULT_SESSION_END, DEFAULT_SESSION_START, Frame, InstrumentFrame, Normalized,
    NormalizedWindowBuilder, SessionBounds, SessionClock,
};

// Re-export the reference zone type used by `SessionClock`
pub use chrono_tz::Tz;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use intraday_fetch::{
    BatchRequest, BatchResponse, ClientConfig, QuoteSource, SeriesAggregator, SparkSource,
    parse_spark,
};

#[cfg(feature = "fetch")]
pub use board::Board;

/// Prelude module for convenient imports.
///
/// ```
/// use intraday_lib::prelude::*;
/// ```
pub mod prelude {
    pub use intraday_types::{
        BaselineUnavailable, Color, ConfigError, FetchError, Instrument, IntradayError, Interval,
        NormalizedSeries, Period, PriceSample, RangeSpec, RawTable, Result, SessionWindow, Symbol,
        Watchlist,
    };

    pub use intraday_window::{Frame, InstrumentFrame, NormalizedWindowBuilder, SessionClock};

    #[cfg(feature = "fetch")]
    pub use intraday_fetch::{ClientConfig, QuoteSource, SeriesAggregator, SparkSource};

    #[cfg(feature = "fetch")]
    pub use crate::board::Board;
}
