//! Space walk (hall pass) records.

use crate::libs::duration::{parse_instant, CalendarDuration, Instant};
use crate::libs::error::HallPassError;
use crate::libs::stats::StatKey;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// A single space walk of a cadet. `end_at == None` means the cadet is still out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pass {
    pub id: i64,
    pub student_id: i64,
    pub start_at: Instant,
    pub end_at: Option<Instant>,
    /// `true` for recreational walks, `false` for official business.
    pub is_personal: bool,
    pub reason: String,
}

impl Pass {
    pub fn is_open(&self) -> bool {
        self.end_at.is_none()
    }

    /// The group this walk counts towards besides the total.
    pub fn kind(&self) -> StatKey {
        StatKey::for_pass(self.is_personal)
    }

    /// Calendar breakdown of the walk; an open walk runs until `now`.
    pub fn elapsed(&self, now: Instant) -> CalendarDuration {
        CalendarDuration::elapsed(self.start_at, self.end_at, now)
    }

    /// Whole seconds spent on the walk at `now`, never negative.
    pub fn elapsed_delta(&self, now: Instant) -> TimeDelta {
        let end = self.end_at.unwrap_or(now);
        if end < self.start_at {
            tracing::warn!(pass = self.id, start = %self.start_at, %end, "space walk ends before it starts");
            return TimeDelta::zero();
        }
        TimeDelta::seconds((end - self.start_at).num_seconds())
    }
}

/// A space walk as it crosses the storage boundary, with instants still in
/// their textual ISO-8601 form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassRecord {
    pub id: i64,
    pub student_id: i64,
    pub start_at: String,
    pub end_at: Option<String>,
    pub is_personal: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

impl TryFrom<PassRecord> for Pass {
    type Error = HallPassError;

    fn try_from(record: PassRecord) -> Result<Self, Self::Error> {
        let start_at = parse_instant(&record.start_at)?;
        let end_at = record.end_at.as_deref().map(parse_instant).transpose()?;

        Ok(Pass {
            id: record.id,
            student_id: record.student_id,
            start_at,
            end_at,
            is_personal: record.is_personal,
            reason: record.reason.unwrap_or_default(),
        })
    }
}

/// Ensures an interval does not end before it starts.
pub fn check_interval(start_at: Instant, end_at: Instant) -> Result<(), HallPassError> {
    if end_at < start_at {
        return Err(HallPassError::EndBeforeStart {
            start: start_at.to_rfc3339(),
            end: end_at.to_rfc3339(),
        });
    }
    Ok(())
}
