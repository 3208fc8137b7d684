//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use super::test_utils::TestFixture;
use crate::config::{global_config, index::IndexConfig, ConfigLoader, KiloConfig, Validate};
use crate::error::config::ConfigError;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = KiloConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.index, IndexConfig::default());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = KiloConfig::default();

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.index.delimiter = "::".to_string();
    assert!(config.validate().is_err());

    config.index.delimiter = ":".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.toml",
            r#"
            [index]
            delimiter = "_"
            result_limit = 3

            [log]
            level = "warn"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.index.delimiter, "_");
    assert_eq!(config.index.result_limit, Some(3));
    assert_eq!(config.log.level, "warn");

    // Other values should be defaults
    assert!(!config.index.case_sensitive);
    assert!(!config.log.json);
}

/// Test loading a JSON configuration file.
#[test]
fn test_load_json_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config.json", r#"{ "index": { "case_sensitive": true } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON").load().unwrap();
    assert!(config.index.case_sensitive);
    assert_eq!(config.index.delimiter, " ");
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config_env_test.toml", "[log]\nlevel = \"warn\"\n")
        .unwrap();

    fixture.set_env("TEST_ENV__LOG__LEVEL", "error");
    fixture.set_env("TEST_ENV__INDEX__DELIMITER", "-");

    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV").load().unwrap();

    assert_eq!(config.log.level, "error");
    assert_eq!(config.index.delimiter, "-");
}

/// Test that invalid values coming from a file are rejected after merging.
#[test]
fn test_load_rejects_invalid_values() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("bad_limit.toml", "[index]\nresult_limit = 0\n")
        .unwrap();

    let err = ConfigLoader::new(Some(&config_path), "TEST_BAD_LIMIT")
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::ValueOutOfRange { .. }));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("invalid.toml", "[index\ndelimiter = _\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test missing and unsupported configuration files.
#[test]
fn test_missing_and_unsupported_files() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("absent.toml");
    assert!(matches!(
        ConfigLoader::new(Some(&missing), "TEST_MISSING").load(),
        Err(ConfigError::FileNotFound(_))
    ));

    let ini = fixture.create_file("config.ini", "[log]\n").unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&ini), "TEST_UNSUPPORTED").load(),
        Err(ConfigError::ParseError(_))
    ));
}

/// Test that loading without a file yields the defaults.
#[test]
fn test_load_without_file() {
    let config = ConfigLoader::new(None::<&std::path::Path>, "TEST_NO_FILE")
        .load()
        .unwrap();
    assert_eq!(config, KiloConfig::default());
}

/// Test that the generated TOML round-trips through the loader.
#[test]
fn test_generated_config_loads() {
    let fixture = TestFixture::new().unwrap();
    let toml = toml::to_string_pretty(&KiloConfig::default()).unwrap();
    let config_path = fixture.create_file("generated.toml", toml).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_GENERATED").load().unwrap();
    assert_eq!(config, KiloConfig::default());
}

/// Test that the global configuration falls back to defaults.
#[test]
fn test_global_config_defaults() {
    // Nothing in the test binary initializes the global slot
    assert_eq!(*global_config(), KiloConfig::default());
}
