//! Batched quote fetching for intraday watchlists.
//!
//! This crate provides the fetch side of a refresh:
//!
//! - [`QuoteSource`] - The seam to a market-data service
//! - [`SeriesAggregator`] - One batched request per refresh, snapshot replacement
//! - [`SparkSource`] - HTTP quote source with connection pooling
//! - [`url::spark_query`] - Query parameters for a batch request
//! - [`parse_spark`] - Response decoding

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/intraday/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod client;
mod parse;
mod source;
pub mod url;

pub use aggregator::SeriesAggregator;
pub use client::{ClientConfig, SparkSource};
pub use parse::parse_spark;
pub use source::{BatchRequest, BatchResponse, QuoteSource};
