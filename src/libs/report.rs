//! Contains shared logic for report generation.
//!
//! Joins the roster with the walk history into the rows the tables, the
//! dashboard and the exporter work on.

use crate::libs::duration::Instant;
use crate::libs::pass::Pass;
use crate::libs::sort::{CadetRow, WalkRow};
use crate::libs::stats::PassStats;
use crate::libs::student::Student;
use std::collections::HashMap;

/// Groups walks by the cadet they belong to.
fn passes_by_student(passes: &[Pass]) -> HashMap<i64, Vec<Pass>> {
    let mut grouped: HashMap<i64, Vec<Pass>> = HashMap::new();
    for pass in passes {
        grouped.entry(pass.student_id).or_default().push(pass.clone());
    }
    grouped
}

/// One row per cadet, including cadets without any walk.
pub fn cadet_rows(students: &[Student], passes: &[Pass], now: Instant) -> Vec<CadetRow> {
    let grouped = passes_by_student(passes);

    students
        .iter()
        .map(|student| {
            let own = student.id.and_then(|id| grouped.get(&id)).map(Vec::as_slice).unwrap_or(&[]);
            CadetRow {
                student: student.clone(),
                stats: PassStats::aggregate(own, now),
            }
        })
        .collect()
}

/// One row per walk. Walks whose cadet is not in `students` are skipped.
pub fn walk_rows(students: &[Student], passes: &[Pass], now: Instant) -> Vec<WalkRow> {
    let roster: HashMap<i64, &Student> = students.iter().filter_map(|s| s.id.map(|id| (id, s))).collect();

    passes
        .iter()
        .filter_map(|pass| {
            roster.get(&pass.student_id).map(|student| WalkRow {
                student: (*student).clone(),
                pass: pass.clone(),
                duration: pass.elapsed(now),
            })
        })
        .collect()
}

/// Cadets currently out, longest walk first.
pub fn open_walks(students: &[Student], open: &[Pass]) -> Vec<(Student, Pass)> {
    let roster: HashMap<i64, &Student> = students.iter().filter_map(|s| s.id.map(|id| (id, s))).collect();

    let mut out: Vec<(Student, Pass)> = open
        .iter()
        .filter(|pass| pass.is_open())
        .filter_map(|pass| roster.get(&pass.student_id).map(|student| ((*student).clone(), pass.clone())))
        .collect();
    out.sort_by(|a, b| a.1.start_at.cmp(&b.1.start_at).then_with(|| a.1.id.cmp(&b.1.id)));
    out
}
