//! Local session boundaries on the UTC timeline.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use intraday_types::{BoundaryError, ConfigError};

/// Longest stretch of nonexistent local time to search across. Covers
/// ordinary DST gaps as well as whole skipped calendar days.
const MAX_GAP_MINUTES: i64 = 25 * 60;

const fn clock_time(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => panic!("invalid clock time"),
    }
}

/// Default local session start (09:00).
pub const DEFAULT_SESSION_START: NaiveTime = clock_time(9, 0);

/// Default local session end (22:00).
pub const DEFAULT_SESSION_END: NaiveTime = clock_time(22, 0);

/// Reference zone plus the local clock band of the active session.
///
/// Boundaries are recomputed from the supplied instant every time, so a
/// long-running process crosses DST transitions correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClock {
    zone: Tz,
    session_start: NaiveTime,
    session_end: NaiveTime,
}

impl SessionClock {
    /// Creates a clock, validating that the session start is not after its end.
    ///
    /// # Errors
    ///
    /// Returns an error if `session_start > session_end`.
    pub fn new(
        zone: Tz,
        session_start: NaiveTime,
        session_end: NaiveTime,
    ) -> Result<Self, ConfigError> {
        if session_start > session_end {
            return Err(ConfigError::InvalidSession {
                start: session_start,
                end: session_end,
            });
        }
        Ok(Self {
            zone,
            session_start,
            session_end,
        })
    }

    /// Creates a clock from an IANA zone identifier (e.g., "Europe/Helsinki").
    ///
    /// # Errors
    ///
    /// Returns an error if the zone is unknown or the session is inverted.
    pub fn from_zone_name(
        zone: &str,
        session_start: NaiveTime,
        session_end: NaiveTime,
    ) -> Result<Self, ConfigError> {
        let zone: Tz = zone
            .parse()
            .map_err(|_| ConfigError::UnknownTimeZone(zone.to_string()))?;
        Self::new(zone, session_start, session_end)
    }

    /// Helsinki, 09:00 to 22:00.
    #[must_use]
    pub const fn helsinki() -> Self {
        Self {
            zone: chrono_tz::Europe::Helsinki,
            session_start: DEFAULT_SESSION_START,
            session_end: DEFAULT_SESSION_END,
        }
    }

    /// Returns the reference zone.
    #[must_use]
    pub const fn zone(&self) -> Tz {
        self.zone
    }

    /// Returns the local session start.
    #[must_use]
    pub const fn session_start(&self) -> NaiveTime {
        self.session_start
    }

    /// Returns the local session end.
    #[must_use]
    pub const fn session_end(&self) -> NaiveTime {
        self.session_end
    }

    /// Places midnight and the session band of `now`'s local calendar day on
    /// the UTC timeline.
    ///
    /// # Errors
    ///
    /// Returns an error if a boundary's local time cannot be mapped to any
    /// instant in the zone.
    pub fn boundaries(&self, now: DateTime<Utc>) -> Result<SessionBounds, BoundaryError> {
        let day = now.with_timezone(&self.zone).date_naive();
        Ok(SessionBounds {
            day,
            midnight: self.resolve(day, NaiveTime::MIN)?,
            session_start: self.resolve(day, self.session_start)?,
            session_end: self.resolve(day, self.session_end)?,
        })
    }

    /// Maps a local wall-clock reading to an instant.
    ///
    /// Ambiguous readings take the earlier instant. Readings inside a gap
    /// take the instant the clock jumps past them.
    fn resolve(&self, day: NaiveDate, time: NaiveTime) -> Result<DateTime<Utc>, BoundaryError> {
        let local = day.and_time(time);
        self.zone
            .from_local_datetime(&local)
            .earliest()
            .or_else(|| self.first_after_gap(local))
            .map(|instant| instant.with_timezone(&Utc))
            .ok_or_else(|| BoundaryError::Unresolvable {
                date: day,
                time,
                zone: self.zone.name().to_string(),
            })
    }

    fn first_after_gap(&self, local: NaiveDateTime) -> Option<DateTime<Tz>> {
        // Transitions fall on whole minutes.
        (1..=MAX_GAP_MINUTES).find_map(|minutes| {
            self.zone
                .from_local_datetime(&(local + TimeDelta::minutes(minutes)))
                .earliest()
        })
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::helsinki()
    }
}

/// One calendar day's boundaries, as UTC instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionBounds {
    /// The local calendar day.
    pub day: NaiveDate,
    /// Local 00:00 of `day`.
    pub midnight: DateTime<Utc>,
    /// Local session start on `day`.
    pub session_start: DateTime<Utc>,
    /// Local session end on `day`.
    pub session_end: DateTime<Utc>,
}

impl SessionBounds {
    /// Returns true if `instant` lies in `[session_start, session_end]`.
    #[must_use]
    pub fn in_session(&self, instant: DateTime<Utc>) -> bool {
        self.session_start <= instant && instant <= self.session_end
    }

    /// Returns the session band as epoch seconds, for the x-axis.
    #[must_use]
    pub fn x_range(&self) -> (i64, i64) {
        (self.session_start.timestamp(), self.session_end.timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_winter_boundaries() {
        let bounds = SessionClock::helsinki()
            .boundaries(utc(2024, 1, 15, 12, 0))
            .unwrap();

        assert_eq!(bounds.day, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(bounds.midnight, utc(2024, 1, 14, 22, 0));
        assert_eq!(bounds.session_start, utc(2024, 1, 15, 7, 0));
        assert_eq!(bounds.session_end, utc(2024, 1, 15, 20, 0));
    }

    #[test]
    fn test_spring_forward_day() {
        let clock = SessionClock::helsinki();

        // Clocks go 03:00 EET -> 04:00 EEST on 2024-03-31.
        let before = clock.boundaries(utc(2024, 3, 30, 10, 0)).unwrap();
        assert_eq!(before.midnight, utc(2024, 3, 29, 22, 0));
        assert_eq!(before.session_start, utc(2024, 3, 30, 7, 0));

        let transition = clock.boundaries(utc(2024, 3, 31, 10, 0)).unwrap();
        assert_eq!(transition.midnight, utc(2024, 3, 30, 22, 0));
        assert_eq!(transition.session_start, utc(2024, 3, 31, 6, 0));
        assert_eq!(transition.session_end, utc(2024, 3, 31, 19, 0));
    }

    #[test]
    fn test_fall_back_day() {
        let clock = SessionClock::helsinki();

        // Clocks go 04:00 EEST -> 03:00 EET on 2024-10-27.
        let transition = clock.boundaries(utc(2024, 10, 27, 12, 0)).unwrap();
        assert_eq!(transition.midnight, utc(2024, 10, 26, 21, 0));
        assert_eq!(transition.session_start, utc(2024, 10, 27, 7, 0));
        assert_eq!(transition.session_end, utc(2024, 10, 27, 20, 0));
    }

    #[test]
    fn test_calendar_day_follows_local_time() {
        // 23:30 UTC on the 30th is already 01:30 on the 31st in Helsinki.
        let bounds = SessionClock::helsinki()
            .boundaries(utc(2024, 3, 30, 23, 30))
            .unwrap();
        assert_eq!(bounds.day, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        assert_eq!(bounds.midnight, utc(2024, 3, 30, 22, 0));
    }

    #[test]
    fn test_gap_resolves_to_jump() {
        let clock = SessionClock::new(
            chrono_tz::Europe::Helsinki,
            clock_time(3, 30),
            DEFAULT_SESSION_END,
        )
        .unwrap();
        let bounds = clock.boundaries(utc(2024, 3, 31, 10, 0)).unwrap();
        assert_eq!(bounds.session_start, utc(2024, 3, 31, 1, 0));
    }

    #[test]
    fn test_overlap_resolves_to_earliest() {
        let clock = SessionClock::new(
            chrono_tz::Europe::Helsinki,
            clock_time(3, 30),
            DEFAULT_SESSION_END,
        )
        .unwrap();
        let bounds = clock.boundaries(utc(2024, 10, 27, 12, 0)).unwrap();
        assert_eq!(bounds.session_start, utc(2024, 10, 27, 0, 30));
    }

    #[test]
    fn test_from_zone_name() {
        let clock =
            SessionClock::from_zone_name("America/New_York", clock_time(9, 30), clock_time(16, 0))
                .unwrap();
        assert_eq!(clock.zone(), chrono_tz::America::New_York);

        assert_eq!(
            SessionClock::from_zone_name("Mars/Olympus", DEFAULT_SESSION_START, DEFAULT_SESSION_END),
            Err(ConfigError::UnknownTimeZone("Mars/Olympus".into()))
        );
    }

    #[test]
    fn test_inverted_session_rejected() {
        assert!(matches!(
            SessionClock::new(chrono_tz::UTC, clock_time(22, 0), clock_time(9, 0)),
            Err(ConfigError::InvalidSession { .. })
        ));
    }

    #[test]
    fn test_in_session_is_inclusive() {
        let bounds = SessionClock::helsinki()
            .boundaries(utc(2024, 1, 15, 12, 0))
            .unwrap();
        assert!(bounds.in_session(bounds.session_start));
        assert!(bounds.in_session(bounds.session_end));
        assert!(!bounds.in_session(bounds.midnight));
        assert_eq!(
            bounds.x_range(),
            (
                utc(2024, 1, 15, 7, 0).timestamp(),
                utc(2024, 1, 15, 20, 0).timestamp()
            )
        );
    }
}
