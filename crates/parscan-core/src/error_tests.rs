//! Tests for `error` module

use crate::config::ConfigError;
use crate::error::*;

#[test]
fn test_error_codes_are_unique() {
    // Arrange - create all error variants
    let errors: Vec<Error> = vec![
        Error::InvalidThreadCount,
        Error::Allocation("test".into()),
        Error::Spawn {
            worker: 3,
            source: std::io::Error::other("test"),
        },
        Error::Config(ConfigError::ParseError("test".into())),
    ];

    // Act - collect all codes
    let codes: Vec<&str> = errors.iter().map(Error::code).collect();

    // Assert - all codes are unique and follow pattern
    let mut unique_codes = codes.clone();
    unique_codes.sort_unstable();
    unique_codes.dedup();
    assert_eq!(codes.len(), unique_codes.len(), "Error codes must be unique");

    for code in &codes {
        assert!(code.starts_with("SCAN-"), "Code {code} should start with SCAN-");
    }
}

#[test]
fn test_display_includes_code_and_context() {
    let err = Error::Spawn {
        worker: 2,
        source: std::io::Error::other("no threads left"),
    };
    let message = err.to_string();

    assert!(message.starts_with("[SCAN-003]"));
    assert!(message.contains("worker 2"));
    assert!(message.contains("no threads left"));
}

#[test]
fn test_spawn_error_exposes_source() {
    use std::error::Error as _;

    let err = Error::Spawn {
        worker: 0,
        source: std::io::Error::other("EAGAIN"),
    };

    assert!(err.source().is_some());
}

#[test]
fn test_config_error_converts() {
    let config_err = ConfigError::ParseError("bad toml".into());
    let err: Error = config_err.into();

    assert_eq!(err.code(), "SCAN-004");
    assert!(err.to_string().contains("bad toml"));
}
