//! Report export to CSV and JSON.
//!
//! Both reports are exported from the same rows the terminal tables show, so
//! a file always matches what `report` prints for the same sort options.
//! Durations are written in the digital form (`MM:SS` or `HH:MM:SS`) and
//! instants as RFC 3339 in UTC.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hallpass::libs::export::{ExportFormat, Exporter};
//! use std::path::PathBuf;
//!
//! let exporter = Exporter::new(ExportFormat::Csv, Some(PathBuf::from("cadets.csv")));
//! exporter.export_cadets(&[])?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::duration::Instant;
use crate::libs::formatter::{format_duration_digital, kind_label};
use crate::libs::messages::Message;
use crate::libs::sort::{CadetRow, WalkRow};
use crate::msg_success;
use anyhow::Result;
use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// Per-cadet statistics.
    Cadets,
    /// Every space walk.
    Walks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportCadet {
    pub first_name: String,
    pub last_name: String,
    pub period: String,
    pub personal_count: u32,
    pub personal_duration: String,
    pub official_count: u32,
    pub official_duration: String,
    pub total_count: u32,
    pub total_duration: String,
    pub last_walk: Option<String>,
}

impl From<&CadetRow> for ExportCadet {
    fn from(row: &CadetRow) -> Self {
        let stats = &row.stats;
        ExportCadet {
            first_name: row.student.first_name.clone(),
            last_name: row.student.last_name.clone(),
            period: row.student.period.clone(),
            personal_count: stats.counts.personal,
            personal_duration: format_duration_digital(&stats.durations.personal),
            official_count: stats.counts.official,
            official_duration: format_duration_digital(&stats.durations.official),
            total_count: stats.counts.total,
            total_duration: format_duration_digital(&stats.durations.total),
            last_walk: stats.last.total.map(to_export_instant),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportWalk {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub period: String,
    pub kind: String,
    pub start: String,
    pub end: Option<String>,
    pub duration: String,
    pub reason: String,
}

impl From<&WalkRow> for ExportWalk {
    fn from(row: &WalkRow) -> Self {
        ExportWalk {
            id: row.pass.id,
            first_name: row.student.first_name.clone(),
            last_name: row.student.last_name.clone(),
            period: row.student.period.clone(),
            kind: kind_label(row.pass.kind()).to_string(),
            start: to_export_instant(row.pass.start_at),
            end: row.pass.end_at.map(to_export_instant),
            duration: format_duration_digital(&row.duration),
            reason: row.pass.reason.clone(),
        }
    }
}

fn to_export_instant(instant: Instant) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named after the current local time.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("hallpass_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export_cadets(&self, rows: &[CadetRow]) -> Result<()> {
        let cadets: Vec<ExportCadet> = rows.iter().map(ExportCadet::from).collect();

        match self.format {
            ExportFormat::Csv => self.export_cadets_csv(&cadets)?,
            ExportFormat::Json => self.write_json(&cadets)?,
        }

        tracing::info!(rows = cadets.len(), path = %self.output_path.display(), "cadet report exported");
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn export_walks(&self, rows: &[WalkRow]) -> Result<()> {
        let walks: Vec<ExportWalk> = rows.iter().map(ExportWalk::from).collect();

        match self.format {
            ExportFormat::Csv => self.export_walks_csv(&walks)?,
            ExportFormat::Json => self.write_json(&walks)?,
        }

        tracing::info!(rows = walks.len(), path = %self.output_path.display(), "walk report exported");
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_cadets_csv(&self, cadets: &[ExportCadet]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record([
            "First Name",
            "Last Name",
            "Period",
            "Recreational",
            "Recreational Duration",
            "Official",
            "Official Duration",
            "Total",
            "Total Duration",
            "Last Walk",
        ])?;

        for cadet in cadets {
            wtr.write_record(&[
                cadet.first_name.clone(),
                cadet.last_name.clone(),
                cadet.period.clone(),
                cadet.personal_count.to_string(),
                cadet.personal_duration.clone(),
                cadet.official_count.to_string(),
                cadet.official_duration.clone(),
                cadet.total_count.to_string(),
                cadet.total_duration.clone(),
                cadet.last_walk.clone().unwrap_or_default(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_walks_csv(&self, walks: &[ExportWalk]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "First Name", "Last Name", "Period", "Kind", "Out", "Back", "Duration", "Reason"])?;

        for walk in walks {
            wtr.write_record(&[
                walk.id.to_string(),
                walk.first_name.clone(),
                walk.last_name.clone(),
                walk.period.clone(),
                walk.kind.clone(),
                walk.start.clone(),
                walk.end.clone().unwrap_or_default(),
                walk.duration.clone(),
                walk.reason.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_json<T: Serialize>(&self, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}
