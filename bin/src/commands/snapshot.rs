//! Snapshot command implementation.
//!
//! Runs a single refresh and prints the resulting frame.

use anyhow::{Context, Result};

use crate::config::BoardConfig;
use crate::display::render_frame;

/// Refresh once and print.
pub(crate) async fn snapshot(config: &BoardConfig) -> Result<()> {
    let mut board = super::board(config)?;
    let frame = board.refresh().await.context("refresh failed")?;
    print!("{}", render_frame(&frame, board.builder().clock().zone(), false));
    Ok(())
}
