//! Core types for the intraday relative-price watchlist.
//!
//! This crate provides the fundamental data structures shared by the
//! fetch and windowing crates:
//!
//! - [`Instrument`] - A watched ticker with display metadata
//! - [`Watchlist`] - Ordered instruments plus a validated range specification
//! - [`Period`] / [`Interval`] - Lookback and sampling vocabularies
//! - [`RawTable`] - One fetch result, per-symbol close samples
//! - [`NormalizedSeries`] / [`SessionWindow`] - Derived, baseline-relative output

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/intraday/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod instrument;
mod range;
mod sample;
mod series;
mod watchlist;

pub use error::{
    BaselineUnavailable, BoundaryError, ConfigError, FetchError, IntradayError, Result,
};
pub use instrument::{Color, Instrument, Symbol};
pub use range::{Interval, IntervalParseError, Period, PeriodParseError, RangeSpec};
pub use sample::{PriceSample, RawTable};
pub use series::{NormalizedPoint, NormalizedSeries, SessionWindow};
pub use watchlist::Watchlist;
