//! Display implementation for hallpass application messages.
//!
//! All message text is defined here so the command layer only ever refers to
//! [`Message`] variants.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === STUDENT MESSAGES ===
            Message::StudentCreated(name, id) => format!("Cadet {} enrolled with ID {}", name, id),
            Message::StudentUpdated(name) => format!("Cadet {} updated", name),
            Message::StudentDeleted(name) => format!("Cadet {} deleted", name),
            Message::StudentsDeletedCount(count) => format!("{} cadet(s) deleted", count),
            Message::StudentNotFound(id) => format!("Cadet with ID {} not found", id),
            Message::StudentsHeader => "Cadet roster".to_string(),
            Message::NoStudents => "No cadets on the roster".to_string(),
            Message::ConfirmDeleteStudent(name) => format!("Delete cadet {} and all of their space walks?", name),
            Message::ConfirmDeleteAllStudents(count) => format!("Delete all {} cadets and their space walks?", count),
            Message::NoChangesProvided => "Nothing to change, pass at least one field".to_string(),

            // === PASS MESSAGES ===
            Message::PassStarted(name, kind) => format!("{} left on a {} space walk", name, kind.to_lowercase()),
            Message::PassEnded(name, duration) => format!("{} is back after {}", name, duration),
            Message::PassUpdated(id) => format!("Space walk {} updated", id),
            Message::PassDeleted(id) => format!("Space walk {} deleted", id),
            Message::PassNotFound(id) => format!("Space walk with ID {} not found", id),
            Message::PassLogHeader(name) => format!("Space walks of {}", name),
            Message::NoPasses(name) => format!("{} has not been on a space walk yet", name),
            Message::ConfirmDeletePass(id) => format!("Delete space walk {}?", id),
            Message::PassEditNeedsChange => "Nothing to edit, pass --start, --end, --duration, --reason or --kind".to_string(),
            Message::PassEndAndDurationConflict => "Use either --end or --duration, not both".to_string(),

            // === DASHBOARD MESSAGES ===
            Message::DashboardHeader(time) => format!("Mission control at {}", time),
            Message::CadetsOut(count) => format!("{} cadet(s) on a space walk", count),
            Message::NoCadetsOut => "All cadets are on board".to_string(),
            Message::OxygenDepleted(name) => format!("{} is out of oxygen!", name),

            // === REPORT MESSAGES ===
            Message::CadetReportHeader => "Space walks per cadet".to_string(),
            Message::WalkReportHeader => "All space walks".to_string(),
            Message::NoReportData => "No space walks recorded".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Report exported to {}", path),
            Message::ExportNoData => "Nothing to export".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleThresholds => "Duration thresholds".to_string(),
            Message::ConfigModulePeriods => "Class periods".to_string(),
            Message::SettingsHeader => "Current settings".to_string(),
            Message::SettingsRejected(reason) => format!("Settings not saved: {}", reason),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptWarningMinutes => "Warning after (minutes)".to_string(),
            Message::PromptCriticalMinutes => "Critical after (minutes)".to_string(),
            Message::PromptExpandPassLog => "Expand the space walk log by default?".to_string(),
            Message::PromptPeriods => "Class periods (space separated)".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate(version) => format!("Database schema is up to date (v{})", version),
            Message::DatabaseNeedsUpdate(current, latest) => {
                format!("Database schema needs to be updated from v{} to v{}", current, latest)
            }
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NoMigrationsApplied => "No migrations applied yet".to_string(),
        };

        write!(f, "{}", text)
    }
}
