//! Watch command implementation.
//!
//! Refreshes on a fixed period until interrupted. Each refresh is awaited
//! before the next tick is taken, so refreshes never overlap. A failed
//! refresh leaves the last good frame on screen.

use anyhow::Result;
use intraday_lib::prelude::*;
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

use crate::config::BoardConfig;
use crate::display::render_frame;

/// Refresh every `every` until Ctrl-C.
pub(crate) async fn watch(config: &BoardConfig, every: Duration) -> Result<()> {
    let mut board = super::board(config)?;

    tracing::info!(
        instruments = board.watchlist().len(),
        every_secs = every.as_secs(),
        "watching"
    );

    watch_until(&mut board, every, tokio::signal::ctrl_c(), |text| {
        println!("{text}");
    })
    .await;
    Ok(())
}

/// Runs the refresh loop until `shutdown` resolves.
///
/// `shutdown` stays armed across the whole cycle, including an in-flight
/// refresh, which is abandoned when it fires.
async fn watch_until<S, F>(
    board: &mut Board<S>,
    every: Duration,
    shutdown: F,
    mut emit: impl FnMut(String),
) where
    S: QuoteSource,
    F: Future,
{
    let zone = board.builder().clock().zone();
    let mut ticker = tokio::time::interval(every);
    // A slow refresh delays the schedule instead of firing a burst to catch up.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tokio::pin!(shutdown);

    loop {
        let outcome = tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("interrupted");
                return;
            }
            outcome = async {
                ticker.tick().await;
                board.refresh().await
            } => outcome,
        };

        let text = match outcome {
            Ok(frame) => render_frame(&frame, zone, false),
            Err(error) => {
                tracing::warn!(%error, "refresh failed");
                match board.last_frame() {
                    Some(frame) => render_frame(frame, zone, true),
                    None => format!("waiting for data: {error}\n"),
                }
            }
        };
        emit(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use intraday_lib::{BatchRequest, BatchResponse};

    /// Never answers.
    struct Stalled;

    #[async_trait]
    impl QuoteSource for Stalled {
        async fn fetch_batch(&self, _: &BatchRequest) -> Result<BatchResponse, FetchError> {
            std::future::pending().await
        }
    }

    /// Always fails.
    struct Down;

    #[async_trait]
    impl QuoteSource for Down {
        async fn fetch_batch(&self, _: &BatchRequest) -> Result<BatchResponse, FetchError> {
            Err(FetchError::Timeout)
        }
    }

    fn board<S: QuoteSource>(source: S) -> Board<S> {
        let watchlist = Watchlist::new(
            vec![Instrument::new("NOKIA.HE", "Nokia")],
            RangeSpec::Period(Period::Day5),
            None,
        )
        .unwrap();
        Board::new(watchlist, source, NormalizedWindowBuilder::new(SessionClock::helsinki()))
    }

    #[tokio::test]
    async fn test_shutdown_interrupts_in_flight_refresh() {
        let mut board = board(Stalled);
        let mut emitted = Vec::new();

        let finished = tokio::time::timeout(
            Duration::from_secs(5),
            watch_until(
                &mut board,
                Duration::from_secs(60),
                tokio::time::sleep(Duration::from_millis(20)),
                |text| emitted.push(text),
            ),
        )
        .await;

        assert!(finished.is_ok());
        assert!(emitted.is_empty());
        assert!(board.last_frame().is_none());
    }

    #[tokio::test]
    async fn test_failed_refresh_without_frame_reports_waiting() {
        let mut board = board(Down);
        let mut emitted = Vec::new();

        watch_until(
            &mut board,
            Duration::from_secs(60),
            tokio::time::sleep(Duration::from_millis(50)),
            |text| emitted.push(text),
        )
        .await;

        // The first tick fires immediately; the next is a minute away.
        assert_eq!(emitted.len(), 1);
        assert!(emitted[0].starts_with("waiting for data"));
    }
}
