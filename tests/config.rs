#[cfg(test)]
mod tests {
    use pomodo::libs::config::Config;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_falls_back_to_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config.study_minutes, 25);
        assert_eq!(config.break_minutes, 10);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_zero_durations_fall_back_to_defaults(_ctx: &mut ConfigTestContext) {
        // A hand-edited file can hold zeros; reading must not hand the
        // session a duration that finishes on its first tick.
        let config = Config {
            study_minutes: 0,
            break_minutes: 15,
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.study_minutes, 25);
        assert_eq!(loaded.break_minutes, 15);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_roundtrip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            study_minutes: 50,
            break_minutes: 15,
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
    }
}
