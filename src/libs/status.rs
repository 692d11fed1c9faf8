//! Status of an elapsed space walk against the configured thresholds.
//!
//! Thresholds are minutes and only meant for sub-hour walks: anything that
//! reaches an hour or a larger unit is critical whatever the configured
//! critical threshold, while the warning check looks at the minutes alone.

use crate::libs::config::UserSettings;
use crate::libs::duration::{CalendarDuration, Instant};
use crate::libs::error::HallPassError;
use crate::libs::pass::Pass;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationStatus {
    Good,
    Warning,
    Critical,
}

impl DurationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DurationStatus::Good => "good",
            DurationStatus::Warning => "warning",
            DurationStatus::Critical => "critical",
        }
    }

    /// Badge text shown next to the oxygen gauge; empty while good.
    pub fn alert(&self) -> &'static str {
        match self {
            DurationStatus::Good => "",
            DurationStatus::Warning => "Warning",
            DurationStatus::Critical => "Critical!!",
        }
    }
}

impl fmt::Display for DurationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DurationStatus {
    type Err = HallPassError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "good" => Ok(DurationStatus::Good),
            "warning" => Ok(DurationStatus::Warning),
            // older data labelled critical walks as "error"
            "critical" | "error" => Ok(DurationStatus::Critical),
            other => Err(HallPassError::InvalidInput(format!("unknown status '{}'", other))),
        }
    }
}

/// Classifies an elapsed duration.
///
/// Assumes `settings.critical > settings.warning`; other settings give
/// unspecified (but non-panicking) results.
pub fn classify(duration: &CalendarDuration, settings: &UserSettings) -> DurationStatus {
    if duration.spans_hours() || (duration.minutes > 0 && duration.minutes >= settings.critical) {
        DurationStatus::Critical
    } else if duration.minutes > 0 && duration.minutes >= settings.warning {
        DurationStatus::Warning
    } else {
        DurationStatus::Good
    }
}

/// Classifies a walk by its elapsed time at `now`.
pub fn pass_status(pass: &Pass, settings: &UserSettings, now: Instant) -> DurationStatus {
    classify(&pass.elapsed(now), settings)
}

/// Remaining "oxygen" of an open walk: the share of the critical threshold
/// not yet used up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OxygenLevel {
    /// Seconds left before the critical threshold; negative once past it.
    pub remaining_seconds: i64,
    /// Remaining share of the critical threshold, 0 to 100.
    pub percent: f64,
    /// Part of `percent` that lies inside the warning zone.
    pub warning_percent: f64,
}

impl OxygenLevel {
    pub fn measure(elapsed_seconds: i64, settings: &UserSettings) -> Self {
        let critical_seconds = i64::from(settings.critical) * 60;
        let warning_seconds = i64::from(settings.warning) * 60;
        let remaining_seconds = critical_seconds - elapsed_seconds;

        if critical_seconds == 0 {
            return Self {
                remaining_seconds,
                percent: 0.0,
                warning_percent: 0.0,
            };
        }

        let percent = (remaining_seconds as f64 / critical_seconds as f64 * 100.0).clamp(0.0, 100.0);
        let warning_zone = (1.0 - warning_seconds as f64 / critical_seconds as f64) * 100.0;

        Self {
            remaining_seconds,
            percent,
            warning_percent: percent.min(warning_zone.max(0.0)),
        }
    }

    pub fn is_depleted(&self) -> bool {
        self.percent <= 0.0
    }

    /// The remaining oxygen is entirely inside the warning zone.
    pub fn is_pulsing(&self) -> bool {
        self.percent == self.warning_percent
    }

    /// Text gauge of `width` cells: `!` for the warning reserve, `=` for the
    /// rest of the remaining oxygen, `.` for what is used up.
    pub fn gauge(&self, width: usize) -> String {
        let cells = |percent: f64| ((percent / 100.0) * width as f64).round() as usize;
        let filled = cells(self.percent).min(width);
        let reserve = cells(self.warning_percent).min(filled);

        format!("[{}{}{}] {:>3.0}%", "!".repeat(reserve), "=".repeat(filled - reserve), ".".repeat(width - filled), self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> UserSettings {
        UserSettings {
            warning: 5,
            critical: 10,
            expand_pass_log: false,
        }
    }

    #[test]
    fn test_oxygen_full_at_start() {
        let level = OxygenLevel::measure(0, &settings());
        assert_eq!(level.remaining_seconds, 600);
        assert_eq!(level.percent, 100.0);
        assert_eq!(level.warning_percent, 50.0);
        assert!(!level.is_pulsing());
    }

    #[test]
    fn test_oxygen_inside_warning_zone() {
        let level = OxygenLevel::measure(420, &settings());
        assert_eq!(level.remaining_seconds, 180);
        assert!((level.percent - 30.0).abs() < 1e-9);
        assert!(level.is_pulsing());
        assert!(!level.is_depleted());
    }

    #[test]
    fn test_oxygen_depleted_past_critical() {
        let level = OxygenLevel::measure(900, &settings());
        assert_eq!(level.remaining_seconds, -300);
        assert_eq!(level.percent, 0.0);
        assert!(level.is_depleted());
        assert_eq!(level.gauge(10), "[..........]   0%");
    }

    #[test]
    fn test_gauge_layout() {
        let level = OxygenLevel::measure(0, &settings());
        assert_eq!(level.gauge(10), "[!!!!!=====] 100%");
    }

    #[test]
    fn test_status_labels_round_trip() {
        assert_eq!("error".parse::<DurationStatus>().unwrap(), DurationStatus::Critical);
        assert_eq!(DurationStatus::Warning.to_string(), "warning");
        assert!("purple".parse::<DurationStatus>().is_err());
    }
}
