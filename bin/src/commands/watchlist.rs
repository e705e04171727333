//! Watchlist command implementation.

use anyhow::Result;

use crate::config::BoardConfig;
use crate::display::render_watchlist;

/// Print the configured instruments.
pub(crate) fn show_watchlist(config: &BoardConfig) -> Result<()> {
    print!("{}", render_watchlist(&config.watchlist()?));
    Ok(())
}
