#[cfg(test)]
mod tests {
    use replan::libs::config::{Config, UpdateConfig};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.data_file.is_none());
        assert!(config.update.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert!(config.data_file.is_none());
        assert!(config.update.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            data_file: Some(PathBuf::from("/tmp/exercise.json")),
            update: Some(UpdateConfig {
                remote: "origin".to_string(),
                branch: "stable".to_string(),
                repo_dir: None,
            }),
        };

        config.save().unwrap();
        let loaded = Config::read().unwrap();

        assert_eq!(loaded.data_file, Some(PathBuf::from("/tmp/exercise.json")));
        assert_eq!(loaded.update, Some(UpdateConfig {
            remote: "origin".to_string(),
            branch: "stable".to_string(),
            repo_dir: None,
        }));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_update_config_defaults(_ctx: &mut ConfigTestContext) {
        let update = UpdateConfig::default();
        assert_eq!(update.remote, "origin");
        assert_eq!(update.branch, "main");
        assert!(update.repo_dir.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        Config::default().save().unwrap();
        Config::delete().unwrap();
        // Deleting twice is fine; the file is simply absent.
        Config::delete().unwrap();
        let config = Config::read().unwrap();
        assert!(config.data_file.is_none());
    }
}
