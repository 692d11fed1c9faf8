//! Ordering of report rows.
//!
//! Every report sorts on one primary field in the requested direction. Ties
//! on any field other than the cadet name fall back to the name (first name,
//! then last name, case-insensitive), always ascending, so the order is total
//! and stable whatever direction the primary field uses.

use crate::libs::duration::{compare_durations, CalendarDuration};
use crate::libs::error::HallPassError;
use crate::libs::pass::Pass;
use crate::libs::stats::{PassStats, StatKey};
use crate::libs::student::Student;
use serde::Serialize;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_desc(desc: bool) -> Self {
        if desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Sort fields of the cadet report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Cadet,
    Period,
    Count(StatKey),
    Duration(StatKey),
}

impl FromStr for SortField {
    type Err = HallPassError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "cadet" => Ok(SortField::Cadet),
            "period" => Ok(SortField::Period),
            "recCount" => Ok(SortField::Count(StatKey::Personal)),
            "officialCount" => Ok(SortField::Count(StatKey::Official)),
            "totalCount" => Ok(SortField::Count(StatKey::Total)),
            "recDuration" => Ok(SortField::Duration(StatKey::Personal)),
            "officialDuration" => Ok(SortField::Duration(StatKey::Official)),
            "totalDuration" => Ok(SortField::Duration(StatKey::Total)),
            other => Err(HallPassError::InvalidInput(format!("unknown sort key '{}'", other))),
        }
    }
}

/// Sort fields of the walks report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WalkSortField {
    #[default]
    Cadet,
    Period,
    Duration,
}

impl FromStr for WalkSortField {
    type Err = HallPassError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "cadet" => Ok(WalkSortField::Cadet),
            "period" => Ok(WalkSortField::Period),
            "duration" => Ok(WalkSortField::Duration),
            other => Err(HallPassError::InvalidInput(format!("unknown sort key '{}'", other))),
        }
    }
}

/// One line of the cadet report.
#[derive(Debug, Clone, Serialize)]
pub struct CadetRow {
    pub student: Student,
    pub stats: PassStats,
}

/// One line of the walks report.
#[derive(Debug, Clone, Serialize)]
pub struct WalkRow {
    pub student: Student,
    pub pass: Pass,
    pub duration: CalendarDuration,
}

/// First name, then last name, ignoring case.
pub fn compare_names(a: &Student, b: &Student) -> Ordering {
    a.first_name
        .to_lowercase()
        .cmp(&b.first_name.to_lowercase())
        .then_with(|| a.last_name.to_lowercase().cmp(&b.last_name.to_lowercase()))
}

pub fn compare_by_field(a: &CadetRow, b: &CadetRow, field: SortField, direction: SortDirection) -> Ordering {
    let primary = match field {
        SortField::Cadet => return direction.apply(compare_names(&a.student, &b.student)),
        SortField::Period => a.student.period.cmp(&b.student.period),
        SortField::Count(key) => a.stats.counts[key].cmp(&b.stats.counts[key]),
        SortField::Duration(key) => compare_durations(&a.stats.durations[key], &b.stats.durations[key]),
    };
    direction.apply(primary).then_with(|| compare_names(&a.student, &b.student))
}

pub fn compare_walks(a: &WalkRow, b: &WalkRow, field: WalkSortField, direction: SortDirection) -> Ordering {
    let primary = match field {
        WalkSortField::Cadet => return direction.apply(compare_names(&a.student, &b.student)),
        WalkSortField::Period => a.student.period.cmp(&b.student.period),
        WalkSortField::Duration => compare_durations(&a.duration, &b.duration),
    };
    direction.apply(primary).then_with(|| compare_names(&a.student, &b.student))
}

pub fn sort_cadets(rows: &mut [CadetRow], field: SortField, direction: SortDirection) {
    rows.sort_by(|a, b| compare_by_field(a, b, field, direction));
}

pub fn sort_walks(rows: &mut [WalkRow], field: WalkSortField, direction: SortDirection) {
    rows.sort_by(|a, b| compare_walks(a, b, field, direction));
}
