//! Text rendering of frames and watchlists.

use chrono::{DateTime, TimeZone};
use intraday_lib::prelude::*;
use intraday_lib::Tz;
use std::fmt::Write;

/// Renders a frame as a table, one row per instrument.
pub(crate) fn render_frame(frame: &Frame, zone: Tz, stale: bool) -> String {
    let bounds = frame.bounds();
    let local = |instant: DateTime<chrono::Utc>| instant.with_timezone(&zone).format("%H:%M");
    let shared = frame.shared_range();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}-{} {}   range {}{}",
        bounds.day,
        local(bounds.session_start),
        local(bounds.session_end),
        zone.name(),
        shared,
        if stale { "   (stale)" } else { "" }
    );
    let _ = writeln!(
        out,
        "{:<12} {:<16} {:>9} {:>6} {:>17}",
        "SYMBOL", "NAME", "CHANGE", "AT", "SESSION"
    );
    let _ = writeln!(out, "{}", "-".repeat(64));

    for entry in frame {
        match &entry.outcome {
            Ok(normalized) => {
                let (change, at) = normalized.series.last().map_or_else(
                    || ("-".to_string(), "-".to_string()),
                    |point| {
                        (
                            format!("{:+.2}%", (point.ratio - 1.0) * 100.0),
                            zone.timestamp_opt(point.epoch, 0)
                                .single()
                                .map_or_else(|| "-".to_string(), |t| t.format("%H:%M").to_string()),
                        )
                    },
                );
                let _ = writeln!(
                    out,
                    "{:<12} {:<16} {:>9} {:>6} {:>17}",
                    entry.symbol.as_str(),
                    entry.label(),
                    change,
                    at,
                    normalized.window.to_string()
                );
            }
            Err(_) => {
                let _ = writeln!(
                    out,
                    "{:<12} {:<16} {:>9}",
                    entry.symbol.as_str(),
                    entry.label(),
                    "no data"
                );
            }
        }
    }
    out
}

/// Renders the configured instruments.
pub(crate) fn render_watchlist(watchlist: &Watchlist) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<12} {:<16} {:<10}", "SYMBOL", "NAME", "COLOR");
    let _ = writeln!(out, "{}", "-".repeat(40));
    for instrument in watchlist {
        let _ = writeln!(
            out,
            "{:<12} {:<16} {:<10}",
            instrument.symbol().as_str(),
            instrument.name(),
            instrument
                .color()
                .map_or_else(|| "-".to_string(), ToString::to_string)
        );
    }
    let interval = watchlist
        .interval()
        .map_or_else(|| "default".to_string(), |i| i.to_string());
    let _ = writeln!(
        out,
        "\nTotal: {} instruments, {}, interval {}",
        watchlist.len(),
        watchlist.range(),
        interval
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn utc(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, h, 0, 0).unwrap()
    }

    fn watchlist() -> Watchlist {
        Watchlist::new(
            vec![
                Instrument::new("NOKIA.HE", "Nokia").with_color(Color::Rgb(18, 65, 145)),
                Instrument::new("FRESH.HE", "Fresh"),
            ],
            RangeSpec::Period(Period::Day5),
            Some(Interval::Minute1),
        )
        .unwrap()
    }

    #[test]
    fn test_render_frame() {
        let table = RawTable::new([
            (
                Symbol::new("NOKIA.HE"),
                vec![
                    PriceSample::new(utc(14, 15), 4.0),
                    PriceSample::new(utc(15, 10), 4.1),
                ],
            ),
            (Symbol::new("FRESH.HE"), Vec::new()),
        ]);
        let frame = NormalizedWindowBuilder::new(SessionClock::helsinki())
            .build(&table, &watchlist(), utc(15, 12))
            .unwrap();

        let text = render_frame(&frame, chrono_tz_helsinki(), false);

        assert!(text.starts_with("2024-01-15 09:00-22:00 Europe/Helsinki"));
        assert!(text.contains("+2.50%"));
        assert!(text.contains("12:00"));
        assert!(text.contains("no data"));
        assert!(!text.contains("stale"));
    }

    #[test]
    fn test_render_watchlist() {
        let text = render_watchlist(&watchlist());
        assert!(text.contains("#124191"));
        assert!(text.contains("Total: 2 instruments, last 5d, interval 1m"));
    }

    fn chrono_tz_helsinki() -> Tz {
        SessionClock::helsinki().zone()
    }
}
