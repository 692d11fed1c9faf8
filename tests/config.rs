#[cfg(test)]
mod tests {
    use hallpass::libs::config::{Config, UserSettings, CONFIG_FILE_NAME, DEFAULT_PERIODS};
    use hallpass::libs::data_storage::DataStorage;
    use hallpass::libs::error::SettingsError;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    fn settings(warning: u32, critical: u32) -> UserSettings {
        UserSettings {
            warning,
            critical,
            expand_pass_log: false,
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_yields_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();

        assert_eq!(config.settings, settings(5, 10));
        assert_eq!(config.periods, DEFAULT_PERIODS.to_vec());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.settings = UserSettings {
            warning: 3,
            critical: 7,
            expand_pass_log: true,
        };
        config.periods = vec!["P1".to_string(), "P2".to_string()];
        config.save().unwrap();

        assert_eq!(Config::read().unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_settings_are_not_saved(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.settings = settings(10, 10);

        let err = config.save().unwrap_err();
        assert_eq!(err.downcast_ref::<SettingsError>(), Some(&SettingsError::CriticalNotAboveWarning));
        assert!(!DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap().exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{"settings": {"warning": 2, "critical": 4, "expandPassLog": false}}"#).unwrap();

        let config = Config::read().unwrap();
        assert_eq!(config.settings, settings(2, 4));
        assert_eq!(config.periods.len(), DEFAULT_PERIODS.len());
    }

    #[test]
    fn test_settings_validation_order() {
        assert_eq!(settings(0, 10).validate(), Err(SettingsError::WarningRequired));
        assert_eq!(settings(5, 0).validate(), Err(SettingsError::CriticalRequired));
        assert_eq!(settings(5, 4).validate(), Err(SettingsError::CriticalNotAboveWarning));
        assert_eq!(settings(5, 10).validate(), Ok(()));
    }

    #[test]
    fn test_suggested_critical() {
        assert_eq!(settings(5, 10).suggested_critical(3), 10);
        assert_eq!(settings(5, 10).suggested_critical(12), 13);
        assert_eq!(settings(5, 10).suggested_critical(u32::MAX), u32::MAX);
    }
}
