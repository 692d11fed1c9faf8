//! Calendar-aware elapsed time breakdowns.
//!
//! A [`CalendarDuration`] splits the time between two instants into years,
//! months, weeks, days, hours, minutes and seconds the way a wall calendar
//! does: whole months are counted by stepping the start instant month by
//! month (clamping to the last day of shorter months), and only the remainder
//! is split into fixed-length units. Every field is always present and
//! defaults to zero.
//!
//! ## Examples
//!
//! ```rust
//! use hallpass::libs::duration::{parse_instant, CalendarDuration};
//!
//! let start = parse_instant("2022-01-01T08:30:00").unwrap();
//! let end = parse_instant("2022-01-01T08:34:05").unwrap();
//! let duration = CalendarDuration::between(start, end);
//! assert_eq!(duration.minutes, 4);
//! assert_eq!(duration.seconds, 5);
//! ```
//!
//! All arithmetic happens in UTC. The current time never enters this module
//! implicitly: open intervals take an explicit `now`.

use crate::libs::error::HallPassError;
use chrono::{DateTime, Datelike, Months, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// A point in time as stored and compared by the application.
pub type Instant = DateTime<Utc>;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Naive layouts accepted in addition to RFC 3339. Values without an offset
/// are read as UTC.
const NAIVE_LAYOUTS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Elapsed time broken down into calendar units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarDuration {
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl CalendarDuration {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// True when any unit of an hour or larger is non-zero.
    pub fn spans_hours(&self) -> bool {
        self.years > 0 || self.months > 0 || self.weeks > 0 || self.days > 0 || self.hours > 0
    }

    /// Breaks the interval `[start, end]` down into calendar units.
    ///
    /// An interval that ends before it starts has no meaningful breakdown;
    /// it is clamped to zero and reported through `tracing`.
    pub fn between(start: Instant, end: Instant) -> Self {
        if end < start {
            tracing::warn!(%start, %end, "interval ends before it starts, clamping to zero");
            return Self::zero();
        }

        let months = whole_months(start, end);
        // `whole_months` only returns counts whose shifted instant exists.
        let anchor = start.checked_add_months(Months::new(months)).unwrap_or(start);
        let rest = (end - anchor).num_seconds().max(0);

        Self {
            years: months / 12,
            months: months % 12,
            weeks: 0,
            days: (rest / SECONDS_PER_DAY) as u32,
            hours: ((rest % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u32,
            minutes: ((rest % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u32,
            seconds: (rest % SECONDS_PER_MINUTE) as u32,
        }
    }

    /// Elapsed time of a possibly open interval. An open interval runs until `now`.
    pub fn elapsed(start: Instant, end: Option<Instant>, now: Instant) -> Self {
        Self::between(start, end.unwrap_or(now))
    }

    /// Moves `instant` forward by this duration: months and years first,
    /// then weeks and days, then the time of day units.
    pub fn shift(&self, instant: Instant) -> Option<Instant> {
        let months = self.years.checked_mul(12)?.checked_add(self.months)?;
        let days = i64::from(self.weeks) * 7 + i64::from(self.days);
        let clock = i64::from(self.hours) * SECONDS_PER_HOUR + i64::from(self.minutes) * SECONDS_PER_MINUTE + i64::from(self.seconds);

        instant
            .checked_add_months(Months::new(months))?
            .checked_add_signed(TimeDelta::try_days(days)?)?
            .checked_add_signed(TimeDelta::try_seconds(clock)?)
    }

    /// Adds two durations with carry, measured from `anchor`.
    ///
    /// 45 minutes plus 30 minutes yields 1 hour 15 minutes.
    pub fn add(&self, other: &CalendarDuration, anchor: Instant) -> Option<Self> {
        let end = other.shift(self.shift(anchor)?)?;
        Some(Self::between(anchor, end))
    }
}

impl Ord for CalendarDuration {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_durations(self, other)
    }
}

impl PartialOrd for CalendarDuration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compares two durations unit by unit, largest unit first.
///
/// This is a lexicographic comparison of the breakdown, not of the total
/// elapsed seconds; breakdowns produced by [`CalendarDuration::between`] are
/// canonical, so the two agree for them.
pub fn compare_durations(a: &CalendarDuration, b: &CalendarDuration) -> Ordering {
    a.years
        .cmp(&b.years)
        .then(a.months.cmp(&b.months))
        .then(a.weeks.cmp(&b.weeks))
        .then(a.days.cmp(&b.days))
        .then(a.hours.cmp(&b.hours))
        .then(a.minutes.cmp(&b.minutes))
        .then(a.seconds.cmp(&b.seconds))
}

/// Number of whole calendar months from `start` that do not pass `end`.
fn whole_months(start: Instant, end: Instant) -> u32 {
    let span = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let mut months = span.max(0) as u32;

    while months > 0 {
        match start.checked_add_months(Months::new(months)) {
            Some(shifted) if shifted <= end => break,
            _ => months -= 1,
        }
    }

    months
}

/// Parses an instant from RFC 3339 or from a naive ISO-8601 timestamp (read as UTC).
///
/// Malformed input is an error; no default is ever substituted.
pub fn parse_instant(value: &str) -> Result<Instant, HallPassError> {
    let value = value.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }

    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(value, layout).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| HallPassError::InvalidInput(format!("unrecognized timestamp '{}'", value)))
}

impl FromStr for CalendarDuration {
    type Err = HallPassError;

    /// Accepts unit notation (`1h5m`, `4m5s`, `2d3h`, `90s`) or clock
    /// notation (`HH:MM:SS`, `MM:SS`).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let invalid = || HallPassError::InvalidInput(format!("unrecognized duration '{}'", value));

        if value.is_empty() {
            return Err(invalid());
        }

        if value.contains(':') {
            let parts = value.split(':').map(|part| part.parse::<u32>().map_err(|_| invalid())).collect::<Result<Vec<_>, _>>()?;
            return match parts.as_slice() {
                [minutes, seconds] => Ok(Self {
                    minutes: *minutes,
                    seconds: *seconds,
                    ..Self::zero()
                }),
                [hours, minutes, seconds] => Ok(Self {
                    hours: *hours,
                    minutes: *minutes,
                    seconds: *seconds,
                    ..Self::zero()
                }),
                _ => Err(invalid()),
            };
        }

        let mut duration = Self::zero();
        let mut digits = String::new();
        for c in value.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }
            let amount = digits.parse::<u32>().map_err(|_| invalid())?;
            digits.clear();
            let unit = match c.to_ascii_lowercase() {
                'w' => &mut duration.weeks,
                'd' => &mut duration.days,
                'h' => &mut duration.hours,
                'm' => &mut duration.minutes,
                's' => &mut duration.seconds,
                _ => return Err(invalid()),
            };
            *unit = unit.checked_add(amount).ok_or_else(invalid)?;
        }
        if !digits.is_empty() {
            return Err(invalid());
        }

        Ok(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: &str) -> Instant {
        parse_instant(value).unwrap()
    }

    #[test]
    fn test_between_carries_seconds_into_minutes() {
        let duration = CalendarDuration::between(at("2022-01-01T08:00:00"), at("2022-01-01T08:01:01"));
        assert_eq!(duration.minutes, 1);
        assert_eq!(duration.seconds, 1);
        assert!(!duration.spans_hours());
    }

    #[test]
    fn test_between_counts_calendar_months() {
        let duration = CalendarDuration::between(at("2022-01-01T00:00:00"), at("2022-04-01T00:00:00"));
        assert_eq!(duration.months, 3);
        assert_eq!(duration.days, 0);

        // 90 days from January 1st is March 31st: two months and 30 days.
        let duration = CalendarDuration::between(at("2022-01-01T00:00:00"), at("2022-04-01T00:00:00") - TimeDelta::days(1));
        assert_eq!(duration.months, 2);
        assert_eq!(duration.days, 30);
    }

    #[test]
    fn test_between_clamps_month_end() {
        // January 31st plus one month lands on February 28th.
        let duration = CalendarDuration::between(at("2022-01-31T10:00:00"), at("2022-03-01T10:00:00"));
        assert_eq!(duration.months, 1);
        assert_eq!(duration.days, 1);
    }

    #[test]
    fn test_between_years() {
        let duration = CalendarDuration::between(at("2020-02-29T12:00:00"), at("2023-03-01T12:00:05"));
        assert_eq!(duration.years, 3);
        assert_eq!(duration.months, 0);
        assert_eq!(duration.days, 1);
        assert_eq!(duration.seconds, 5);
    }

    #[test]
    fn test_between_reversed_is_zero() {
        let duration = CalendarDuration::between(at("2022-01-01T09:00:00"), at("2022-01-01T08:00:00"));
        assert!(duration.is_zero());
    }

    #[test]
    fn test_add_carries() {
        let anchor = at("2022-06-01T00:00:00");
        let a = CalendarDuration { minutes: 45, ..CalendarDuration::zero() };
        let b = CalendarDuration { minutes: 30, ..CalendarDuration::zero() };
        let sum = a.add(&b, anchor).unwrap();
        assert_eq!(sum.hours, 1);
        assert_eq!(sum.minutes, 15);
    }

    #[test]
    fn test_shift_weeks_as_days() {
        let duration = CalendarDuration { weeks: 1, days: 2, ..CalendarDuration::zero() };
        assert_eq!(duration.shift(at("2022-01-01T00:00:00")).unwrap(), at("2022-01-10T00:00:00"));
    }

    #[test]
    fn test_compare_is_lexicographic() {
        let hour = CalendarDuration { hours: 1, ..CalendarDuration::zero() };
        let minutes = CalendarDuration { minutes: 59, seconds: 59, ..CalendarDuration::zero() };
        assert_eq!(compare_durations(&hour, &minutes), Ordering::Greater);
        assert_eq!(compare_durations(&minutes, &minutes), Ordering::Equal);
        assert!(minutes < hour);
    }

    #[test]
    fn test_parse_duration_notations() {
        let parsed: CalendarDuration = "4m5s".parse().unwrap();
        assert_eq!((parsed.minutes, parsed.seconds), (4, 5));

        let parsed: CalendarDuration = "01:02:03".parse().unwrap();
        assert_eq!((parsed.hours, parsed.minutes, parsed.seconds), (1, 2, 3));

        let parsed: CalendarDuration = "24:05".parse().unwrap();
        assert_eq!((parsed.minutes, parsed.seconds), (24, 5));

        assert!("5".parse::<CalendarDuration>().is_err());
        assert!("5x".parse::<CalendarDuration>().is_err());
        assert!("".parse::<CalendarDuration>().is_err());
    }

    #[test]
    fn test_parse_instant_formats() {
        assert_eq!(at("2022-01-01T08:30:00Z"), at("2022-01-01T08:30:00"));
        assert_eq!(at("2022-01-01T10:30:00+02:00"), at("2022-01-01 08:30:00"));
        assert!(matches!(parse_instant("yesterday"), Err(HallPassError::InvalidInput(_))));
    }
}
