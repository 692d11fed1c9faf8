//! Configuration management for the hallpass application.
//!
//! The configuration is a single JSON document stored next to the database
//! in the platform data directory (see [`DataStorage`]). It carries the
//! status thresholds and the list of class periods cadets can be
//! assigned to. A missing file is not an error: defaults are used until the
//! first `save()`.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use hallpass::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.settings.warning = 4;
//! config.settings.critical = 8;
//! config.settings.validate()?;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::error::{HallPassError, SettingsError};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Class periods offered when no custom list is configured.
pub const DEFAULT_PERIODS: [&str; 8] = ["A1", "A2", "A3", "A4", "B5", "B6", "B7", "B8"];

/// Represents a configurable module in the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Per-user thresholds and display preferences.
///
/// `warning` and `critical` are minutes of elapsed time on an open space
/// walk. The status classifier assumes `critical > warning`; [`validate`]
/// enforces it before anything is saved.
///
/// [`validate`]: UserSettings::validate
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Minutes after which an open walk is flagged as a warning.
    pub warning: u32,
    /// Minutes after which an open walk is critical.
    pub critical: u32,
    /// Show the full walk log instead of the one-line summary.
    pub expand_pass_log: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            warning: 5,
            critical: 10,
            expand_pass_log: false,
        }
    }
}

impl UserSettings {
    /// Checks the threshold rules, reporting the first violation.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.warning == 0 {
            return Err(SettingsError::WarningRequired);
        }
        if self.critical == 0 {
            return Err(SettingsError::CriticalRequired);
        }
        if self.critical <= self.warning {
            return Err(SettingsError::CriticalNotAboveWarning);
        }
        Ok(())
    }

    /// Critical threshold offered once `warning` is chosen: the current one,
    /// raised above the new warning when needed.
    pub fn suggested_critical(&self, warning: u32) -> u32 {
        self.critical.max(warning.saturating_add(1))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub settings: UserSettings,

    #[serde(default = "default_periods")]
    pub periods: Vec<String>,
}

fn default_periods() -> Vec<String> {
    DEFAULT_PERIODS.iter().map(|p| p.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            settings: UserSettings::default(),
            periods: default_periods(),
        }
    }
}

impl Config {
    /// Reads the configuration file, falling back to defaults when it does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            tracing::debug!(path = %config_file_path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.settings.validate()?;

        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(&config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        tracing::debug!(path = %config_file_path.display(), "configuration saved");
        Ok(())
    }

    /// Rejects periods that are not in the configured list.
    pub fn check_period(&self, period: &str) -> Result<(), HallPassError> {
        if self.periods.iter().any(|p| p == period) {
            return Ok(());
        }
        Err(HallPassError::UnknownPeriod {
            period: period.to_string(),
            allowed: self.periods.join(", "),
        })
    }

    /// Runs the interactive setup wizard, starting from the saved configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "thresholds".to_string(),
                name: "Thresholds".to_string(),
            },
            ConfigModule {
                key: "periods".to_string(),
                name: "Periods".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "thresholds" => {
                    let default = config.settings;
                    msg_print!(Message::ConfigModuleThresholds);
                    let warning: u32 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptWarningMinutes.to_string())
                        .default(default.warning)
                        .validate_with(|value: &u32| if *value == 0 { Err(SettingsError::WarningRequired.to_string()) } else { Ok(()) })
                        .interact_text()?;
                    let critical: u32 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptCriticalMinutes.to_string())
                        .default(default.suggested_critical(warning))
                        .validate_with(|value: &u32| {
                            UserSettings {
                                warning,
                                critical: *value,
                                expand_pass_log: false,
                            }
                            .validate()
                            .map_err(|e| e.to_string())
                        })
                        .interact_text()?;
                    let expand_pass_log = Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptExpandPassLog.to_string())
                        .default(default.expand_pass_log)
                        .interact()?;
                    config.settings = UserSettings {
                        warning,
                        critical,
                        expand_pass_log,
                    };
                }
                "periods" => {
                    msg_print!(Message::ConfigModulePeriods);
                    let periods: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptPeriods.to_string())
                        .default(config.periods.join(" "))
                        .interact_text()?;
                    let periods: Vec<String> = periods.split_whitespace().map(str::to_string).collect();
                    if !periods.is_empty() {
                        config.periods = periods;
                    }
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
