//! Error types for the hallpass domain.
//!
//! Repository and command layers work with `anyhow::Result`; these typed
//! errors are raised by the domain rules and converted with `?`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HallPassError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Space walk cannot end before it starts ({end} is before {start})")]
    EndBeforeStart { start: String, end: String },

    #[error("Cadet {0} is already on a space walk")]
    PassAlreadyOpen(i64),

    #[error("Cadet {0} is not on a space walk")]
    NoOpenPass(i64),

    #[error("Cadet not found: {0}")]
    StudentNotFound(i64),

    #[error("Space walk not found: {0}")]
    PassNotFound(i64),

    #[error("Unknown period '{period}', expected one of: {allowed}")]
    UnknownPeriod { period: String, allowed: String },

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Violations of the warning/critical threshold rules.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Warning is required")]
    WarningRequired,

    #[error("Critical is required")]
    CriticalRequired,

    #[error("Critical must be greater than warning")]
    CriticalNotAboveWarning,
}
