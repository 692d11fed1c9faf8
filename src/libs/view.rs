use super::config::Config;
use super::duration::Instant;
use super::formatter::{format_date_time, format_duration_digital, format_walk_summary, kind_label, FormattedPass};
use super::pass::Pass;
use super::sort::{CadetRow, WalkRow};
use super::stats::{PassStats, StatKey};
use super::status::{classify, OxygenLevel};
use super::student::Student;
use anyhow::Result;
use chrono::Local;
use prettytable::{row, Table};

const GAUGE_WIDTH: usize = 20;

pub struct View {}

impl View {
    pub fn students(students: &[Student]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "FIRST NAME", "LAST NAME", "PERIOD", "NOTES"]);
        for student in students {
            table.add_row(row![student.id.unwrap_or(0), student.first_name, student.last_name, student.period, student.notes]);
        }
        table.printstd();

        Ok(())
    }

    /// Walk log of one cadet: every walk when `expand` is set, one summary line per group otherwise.
    pub fn pass_log(passes: &[Pass], stats: &PassStats, expand: bool, now: Instant) -> Result<()> {
        let mut table = Table::new();

        if expand {
            table.add_row(row!["ID", "KIND", "OUT", "BACK", "DURATION", "REASON"]);
            for pass in passes {
                let formatted = FormattedPass::new(pass, &Local, now);
                table.add_row(row![formatted.id, formatted.kind, formatted.start, formatted.end, formatted.duration, formatted.reason]);
            }
            for key in StatKey::ALL {
                table.add_row(row![
                    "",
                    kind_label(key),
                    "",
                    "",
                    format_walk_summary(stats.counts[key], &stats.durations[key]),
                    ""
                ]);
            }
        } else {
            table.add_row(row!["KIND", "WALKS", "LAST"]);
            for key in StatKey::ALL {
                table.add_row(row![
                    kind_label(key),
                    format_walk_summary(stats.counts[key], &stats.durations[key]),
                    format_date_time(stats.last[key].map(|last| last.with_timezone(&Local)))
                ]);
            }
        }
        table.printstd();

        Ok(())
    }

    pub fn cadets(rows: &[CadetRow]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["CADET", "PERIOD", "RECREATIONAL", "OFFICIAL", "TOTAL", "LAST WALK"]);
        for row in rows {
            let stats = &row.stats;
            table.add_row(row![
                row.student.full_name(),
                row.student.period,
                format_walk_summary(stats.counts.personal, &stats.durations.personal),
                format_walk_summary(stats.counts.official, &stats.durations.official),
                format_walk_summary(stats.counts.total, &stats.durations.total),
                format_date_time(stats.last.total.map(|last| last.with_timezone(&Local)))
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn walks(rows: &[WalkRow], now: Instant) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["CADET", "PERIOD", "KIND", "OUT", "BACK", "DURATION", "REASON"]);
        for row in rows {
            let formatted = FormattedPass::new(&row.pass, &Local, now);
            table.add_row(row![
                row.student.full_name(),
                row.student.period,
                formatted.kind,
                formatted.start,
                formatted.end,
                formatted.duration,
                formatted.reason
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Cadets currently out, with their status and remaining oxygen.
    pub fn dashboard(out: &[(Student, Pass)], config: &Config, now: Instant) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["CADET", "PERIOD", "KIND", "OUT", "ELAPSED", "STATUS", "OXYGEN"]);
        for (student, pass) in out {
            let elapsed = pass.elapsed(now);
            let status = classify(&elapsed, &config.settings);
            let oxygen = OxygenLevel::measure(pass.elapsed_delta(now).num_seconds(), &config.settings);
            table.add_row(row![
                student.full_name(),
                student.period,
                kind_label(pass.kind()),
                format_date_time(Some(pass.start_at.with_timezone(&Local))),
                format_duration_digital(&elapsed),
                status.alert(),
                oxygen.gauge(GAUGE_WIDTH)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn settings(config: &Config) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["SETTING", "VALUE"]);
        table.add_row(row!["Warning (minutes)", config.settings.warning]);
        table.add_row(row!["Critical (minutes)", config.settings.critical]);
        table.add_row(row!["Expand walk log", config.settings.expand_pass_log]);
        table.add_row(row!["Periods", config.periods.join(" ")]);
        table.printstd();

        Ok(())
    }
}
