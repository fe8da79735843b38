//! Tests for config module

#[cfg(test)]
mod tests {
    use crate::config::*;

    // ========================================================================
    // Default tests
    // ========================================================================

    #[test]
    fn test_config_default_values() {
        // Arrange & Act
        let config = EngineConfig::default();

        // Assert
        assert_eq!(config.search.workers, 0);
        assert_eq!(config.logging.level, "info");
        config.validate().expect("defaults must validate");
    }

    #[test]
    fn test_effective_workers_auto_is_at_least_one() {
        let config = EngineConfig::default();

        assert!(config.effective_workers() >= 1);
    }

    #[test]
    fn test_effective_workers_fixed_is_passed_through() {
        let mut config = EngineConfig::default();
        config.search.workers = 6;

        assert_eq!(config.effective_workers(), 6);
    }

    // ========================================================================
    // TOML parsing tests
    // ========================================================================

    #[test]
    fn test_from_toml_overrides_defaults() {
        let config = EngineConfig::from_toml(
            r#"
            [search]
            workers = 8

            [logging]
            level = "debug"
            "#,
        )
        .expect("parse");

        assert_eq!(config.search.workers, 8);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_from_toml_partial_keeps_defaults() {
        let config = EngineConfig::from_toml("[search]\nworkers = 2\n").expect("parse");

        assert_eq!(config.search.workers, 2);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        let result = EngineConfig::from_toml("not toml at all [[[");

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    // ========================================================================
    // Layering tests (defaults < file < environment)
    // ========================================================================

    #[test]
    fn test_env_overrides_file_which_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            // Arrange - a config file and an env override in a hermetic cwd
            jail.create_file(
                "parscan.toml",
                r#"
                [search]
                workers = 4

                [logging]
                level = "warn"
                "#,
            )?;
            jail.set_env("PARSCAN_SEARCH_WORKERS", "9");

            // Act
            let config = EngineConfig::load().expect("load");

            // Assert - env beats file, file beats default
            assert_eq!(config.search.workers, 9);
            assert_eq!(config.logging.level, "warn");
            Ok(())
        });
    }

    #[test]
    fn test_load_without_file_or_env_yields_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = EngineConfig::load().expect("load");

            assert_eq!(config.search.workers, 0);
            assert_eq!(config.logging.level, "info");
            Ok(())
        });
    }

    #[test]
    fn test_load_from_path_reads_named_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[search]\nworkers = 3\n")?;

            let config = EngineConfig::load_from_path("custom.toml").expect("load");

            assert_eq!(config.search.workers, 3);
            Ok(())
        });
    }

    // ========================================================================
    // Validation tests
    // ========================================================================

    #[test]
    fn test_validate_rejects_excessive_workers() {
        let mut config = EngineConfig::default();
        config.search.workers = 100_000;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "search.workers"));
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = EngineConfig::default();
        config.logging.level = "loud".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "logging.level"));
    }

    // ========================================================================
    // Serde round-trip
    // ========================================================================

    #[test]
    fn test_config_serde_round_trip() {
        let mut config = EngineConfig::default();
        config.search.workers = 4;
        config.logging.level = "trace".to_string();

        let json = serde_json::to_string(&config).expect("serialize");
        let back: EngineConfig = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back.search.workers, 4);
        assert_eq!(back.logging.level, "trace");
    }
}
