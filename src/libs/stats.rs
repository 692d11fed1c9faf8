//! Per-cadet space walk statistics.
//!
//! [`PassStats::aggregate`] folds a list of walks into counts, total
//! durations and the most recent start, grouped as personal, official and
//! total. The statistics are recomputed from the walks every time they are
//! needed.
//!
//! Each group folds the calendar breakdown of its walks together with
//! [`CalendarDuration::add`], anchored at `now`, so a group holding a single
//! walk reports exactly that walk's breakdown. Walks are folded in
//! `(start_at, id)` order, so the result never depends on the order of the
//! input.

use crate::libs::duration::{CalendarDuration, Instant};
use crate::libs::pass::Pass;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKey {
    Personal,
    Official,
    Total,
}

impl StatKey {
    pub const ALL: [StatKey; 3] = [StatKey::Personal, StatKey::Official, StatKey::Total];

    pub fn for_pass(is_personal: bool) -> Self {
        if is_personal {
            StatKey::Personal
        } else {
            StatKey::Official
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatKey::Personal => "personal",
            StatKey::Official => "official",
            StatKey::Total => "total",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per [`StatKey`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatMap<T> {
    pub personal: T,
    pub official: T,
    pub total: T,
}

impl<T> Index<StatKey> for StatMap<T> {
    type Output = T;

    fn index(&self, key: StatKey) -> &T {
        match key {
            StatKey::Personal => &self.personal,
            StatKey::Official => &self.official,
            StatKey::Total => &self.total,
        }
    }
}

impl<T> IndexMut<StatKey> for StatMap<T> {
    fn index_mut(&mut self, key: StatKey) -> &mut T {
        match key {
            StatKey::Personal => &mut self.personal,
            StatKey::Official => &mut self.official,
            StatKey::Total => &mut self.total,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PassStats {
    pub counts: StatMap<u32>,
    pub durations: StatMap<CalendarDuration>,
    /// Most recent start per group; `None` when the group has no walks.
    pub last: StatMap<Option<Instant>>,
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    count: u32,
    duration: CalendarDuration,
    last: Option<Instant>,
}

impl Tally {
    fn record(&mut self, pass: &Pass, elapsed: &CalendarDuration, now: Instant) {
        self.count += 1;
        match self.duration.add(elapsed, now) {
            Some(sum) => self.duration = sum,
            None => tracing::warn!(pass = pass.id, %now, "space walk duration out of range, left out of the total"),
        }
        self.last = Some(self.last.map_or(pass.start_at, |last| last.max(pass.start_at)));
    }
}

impl PassStats {
    /// Aggregates `passes`; open walks count their time up to `now`.
    pub fn aggregate(passes: &[Pass], now: Instant) -> Self {
        let mut ordered: Vec<&Pass> = passes.iter().collect();
        ordered.sort_by_key(|pass| (pass.start_at, pass.id));

        let mut tallies: StatMap<Tally> = StatMap::default();
        for pass in ordered {
            let elapsed = pass.elapsed(now);
            tallies[StatKey::Total].record(pass, &elapsed, now);
            tallies[pass.kind()].record(pass, &elapsed, now);
        }

        let mut stats = PassStats::default();
        for key in StatKey::ALL {
            let tally = tallies[key];
            stats.counts[key] = tally.count;
            stats.durations[key] = tally.duration;
            stats.last[key] = tally.last;
        }

        tracing::trace!(walks = passes.len(), total = stats.counts.total, "aggregated space walk stats");
        stats
    }
}
