//! Display formatting for durations, instants and walk rows.
//!
//! ## Duration Formats
//!
//! - **Digital** (`format_duration_digital`): `MM:SS`, or `HH:MM:SS` once
//!   the breakdown has hours. Days and larger units are not rendered, so a
//!   walk of one day and five minutes reads `05:00`; callers that can see
//!   such walks must show them some other way.
//! - **Calendar** (`format_calendar_duration`): `"2 hours 5 minutes"`, zero
//!   units omitted.
//!
//! ## Examples
//!
//! ```rust
//! use hallpass::libs::duration::CalendarDuration;
//! use hallpass::libs::formatter::{format_calendar_duration, format_duration_digital};
//!
//! let duration = CalendarDuration { minutes: 28, seconds: 10, ..CalendarDuration::zero() };
//! assert_eq!(format_duration_digital(&duration), "28:10");
//! assert_eq!(format_calendar_duration(&duration), "28 minutes 10 seconds");
//! ```

use crate::libs::duration::{CalendarDuration, Instant};
use crate::libs::pass::Pass;
use crate::libs::stats::StatKey;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Placeholder for a missing instant.
pub const NOT_AVAILABLE: &str = "N/A";

/// A walk with every column pre-formatted for tables and exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedPass {
    pub id: i64,
    pub kind: String,
    pub start: String,
    pub end: String,
    pub duration: String,
    pub reason: String,
}

impl FormattedPass {
    pub fn new<Tz: TimeZone>(pass: &Pass, tz: &Tz, now: Instant) -> Self
    where
        Tz::Offset: Display,
    {
        FormattedPass {
            id: pass.id,
            kind: kind_label(pass.kind()).to_string(),
            start: format_date_time(Some(pass.start_at.with_timezone(tz))),
            end: pass.end_at.map_or_else(|| "-".to_string(), |end| format_time(Some(end.with_timezone(tz)))),
            duration: format_duration_digital(&pass.elapsed(now)),
            reason: pass.reason.clone(),
        }
    }
}

/// Renders `MM:SS`, or `HH:MM:SS` when the hours unit is non-zero.
pub fn format_duration_digital(duration: &CalendarDuration) -> String {
    if duration.hours > 0 {
        format!("{:02}:{:02}:{:02}", duration.hours, duration.minutes, duration.seconds)
    } else {
        format!("{:02}:{:02}", duration.minutes, duration.seconds)
    }
}

/// Renders a phrase such as `"1 hour 5 minutes"`, omitting zero units.
pub fn format_calendar_duration(duration: &CalendarDuration) -> String {
    let units = [
        (duration.years, "year"),
        (duration.months, "month"),
        (duration.weeks, "week"),
        (duration.days, "day"),
        (duration.hours, "hour"),
        (duration.minutes, "minute"),
        (duration.seconds, "second"),
    ];

    let parts: Vec<String> = units
        .iter()
        .filter(|(amount, _)| *amount > 0)
        .map(|(amount, unit)| format!("{} {}{}", amount, unit, if *amount == 1 { "" } else { "s" }))
        .collect();

    if parts.is_empty() {
        return "0 seconds".to_string();
    }
    parts.join(" ")
}

/// `"3 walks 04:05"`, the one-line summary of a group.
pub fn format_walk_summary(count: u32, duration: &CalendarDuration) -> String {
    format!("{} walk{} {}", count, if count == 1 { "" } else { "s" }, format_duration_digital(duration))
}

/// `"1-Jan-22 8:30 am"`
pub fn format_date_time<Tz: TimeZone>(instant: Option<DateTime<Tz>>) -> String
where
    Tz::Offset: Display,
{
    instant.map_or_else(|| NOT_AVAILABLE.to_string(), |i| i.format("%-d-%b-%y %-I:%M %P").to_string())
}

/// `"1-Jan-22"`
pub fn format_date<Tz: TimeZone>(instant: Option<DateTime<Tz>>) -> String
where
    Tz::Offset: Display,
{
    instant.map_or_else(|| NOT_AVAILABLE.to_string(), |i| i.format("%-d-%b-%y").to_string())
}

/// `"8:30 am"`
pub fn format_time<Tz: TimeZone>(instant: Option<DateTime<Tz>>) -> String
where
    Tz::Offset: Display,
{
    instant.map_or_else(|| NOT_AVAILABLE.to_string(), |i| i.format("%-I:%M %P").to_string())
}

pub fn kind_label(key: StatKey) -> &'static str {
    match key {
        StatKey::Personal => "Recreational",
        StatKey::Official => "Official",
        StatKey::Total => "Total",
    }
}
