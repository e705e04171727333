//! Baseline normalization and session windowing for intraday watchlists.
//!
//! - [`SessionClock`] - Places local midnight and the session band on the UTC
//!   timeline for the calendar day of a given instant, DST-correct
//! - [`NormalizedWindowBuilder`] - Builds a [`Frame`] of per-instrument
//!   normalized series and session windows from a raw table
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use intraday_types::{Instrument, Period, PriceSample, RangeSpec, RawTable, Symbol, Watchlist};
//! use intraday_window::{NormalizedWindowBuilder, SessionClock};
//!
//! let watchlist = Watchlist::new(
//!     vec![Instrument::new("NOKIA.HE", "Nokia")],
//!     RangeSpec::Period(Period::Day5),
//!     None,
//! )?;
//! let table = RawTable::new([(
//!     Symbol::new("NOKIA.HE"),
//!     vec![
//!         PriceSample::new(Utc.with_ymd_and_hms(2024, 1, 4, 15, 0, 0).unwrap(), 4.0),
//!         PriceSample::new(Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap(), 4.2),
//!     ],
//! )]);
//!
//! let builder = NormalizedWindowBuilder::new(SessionClock::helsinki());
//! let now = Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap();
//! let frame = builder.build(&table, &watchlist, now)?;
//!
//! let nokia = frame.get(&Symbol::new("NOKIA.HE")).unwrap();
//! assert_eq!(nokia.outcome.as_ref().unwrap().series.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/intraday/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod builder;
mod clock;
mod frame;

pub use builder::NormalizedWindowBuilder;
pub use clock::{DEFAULT_SESSION_END, DEFAULT_SESSION_START, SessionBounds, SessionClock};
pub use frame::{Frame, InstrumentFrame, Normalized};
