//! CLI command implementations.

pub(crate) mod snapshot;
pub(crate) mod watch;
pub(crate) mod watchlist;

use anyhow::{Context, Result};
use intraday_lib::prelude::*;

use crate::config::BoardConfig;

/// Wires a board to the HTTP quote source.
pub(crate) fn board(config: &BoardConfig) -> Result<Board<SparkSource>> {
    let source = SparkSource::with_defaults().context("failed to create HTTP client")?;
    let builder = NormalizedWindowBuilder::new(config.clock()?);
    Ok(Board::new(config.watchlist()?, source, builder))
}
