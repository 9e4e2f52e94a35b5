// Unit Tests for Logging Configuration
//
// UNIT UNDER TEST: LogConfig
//
// BUSINESS RESPONSIBILITY:
//   - Provides working defaults when nothing is configured
//   - Loads overrides from environment variables
//   - Rejects malformed values with the offending key and value
//
// TEST COVERAGE:
//   - Defaults and builder methods
//   - Lookup-based parsing of every variable
//   - Error reporting for invalid values
//   - Environment loading (serialized, since it mutates process state)
//   - Serde round trip through JSON

use crate::config::{
    LogConfig, ENV_CATEGORY, ENV_ENABLED, ENV_FILE_IDENTITY, ENV_STACK_DEPTH,
};
use crate::core_types::FileIdentity;
use crate::error::LogError;
use serial_test::serial;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[cfg(test)]
mod defaults_tests {
    use super::*;

    #[test]
    fn test_default_config_is_enabled_with_app_category() {
        let config = LogConfig::default();

        assert!(config.enabled);
        assert_eq!(config.category, "app");
        assert_eq!(config.stack_depth, 64);
        assert_eq!(config.file_identity, FileIdentity::Name);
    }

    #[test]
    fn test_empty_lookup_yields_defaults() {
        let config = LogConfig::from_lookup(|_| None).expect("defaults should load");

        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_deserializes_partial_json_with_defaults() {
        // Arrange
        let json = r#"{ "category": "db", "file_identity": "id" }"#;

        // Act
        let config: LogConfig = serde_json::from_str(json).expect("valid config JSON");

        // Assert
        assert_eq!(config.category, "db");
        assert_eq!(config.file_identity, FileIdentity::Id);
        assert!(config.enabled);
        assert_eq!(config.stack_depth, 64);
    }
}

#[cfg(test)]
mod lookup_tests {
    use super::*;

    #[test]
    fn test_all_variables_are_applied() {
        // Arrange
        let lookup = lookup_from(&[
            (ENV_ENABLED, "off"),
            (ENV_CATEGORY, " network "),
            (ENV_STACK_DEPTH, "12"),
            (ENV_FILE_IDENTITY, "ID"),
        ]);

        // Act
        let config = LogConfig::from_lookup(lookup).expect("valid values");

        // Assert
        assert!(!config.enabled);
        assert_eq!(config.category, "network");
        assert_eq!(config.stack_depth, 12);
        assert_eq!(config.file_identity, FileIdentity::Id);
    }

    #[test]
    fn test_boolean_spellings() {
        let cases = [
            ("1", true),
            ("yes", true),
            ("TRUE", true),
            ("0", false),
            ("No", false),
        ];
        for (raw, expected) in cases {
            let config = LogConfig::from_lookup(lookup_from(&[(ENV_ENABLED, raw)]))
                .expect("valid boolean");
            assert_eq!(config.enabled, expected, "value {raw:?}");
        }
    }

    #[test]
    fn test_invalid_boolean_is_rejected() {
        // Act
        let result = LogConfig::from_lookup(lookup_from(&[(ENV_ENABLED, "maybe")]));

        // Assert
        match result {
            Err(LogError::Configuration { key, value, .. }) => {
                assert_eq!(key, ENV_ENABLED);
                assert_eq!(value, "maybe");
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_stack_depth_is_rejected() {
        let result = LogConfig::from_lookup(lookup_from(&[(ENV_STACK_DEPTH, "-3")]));

        assert!(
            matches!(result, Err(LogError::Configuration { ref key, .. }) if key == ENV_STACK_DEPTH)
        );
    }

    #[test]
    fn test_empty_category_is_rejected() {
        let result = LogConfig::from_lookup(lookup_from(&[(ENV_CATEGORY, "   ")]));

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_file_identity_is_rejected() {
        let result = LogConfig::from_lookup(lookup_from(&[(ENV_FILE_IDENTITY, "path")]));

        assert!(result.is_err_and(|e| e.is_configuration()));
    }
}

#[cfg(test)]
mod env_tests {
    use super::*;

    fn clear_env() {
        for key in [ENV_ENABLED, ENV_CATEGORY, ENV_STACK_DEPTH, ENV_FILE_IDENTITY] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        // Arrange
        clear_env();
        std::env::set_var(ENV_CATEGORY, "worker");
        std::env::set_var(ENV_STACK_DEPTH, "8");

        // Act
        let config = LogConfig::from_env();
        clear_env();

        // Assert
        let config = config.expect("valid environment");
        assert_eq!(config.category, "worker");
        assert_eq!(config.stack_depth, 8);
    }

    #[test]
    #[serial]
    fn test_from_env_reports_invalid_values() {
        clear_env();
        std::env::set_var(ENV_FILE_IDENTITY, "full");

        let result = LogConfig::from_env();
        clear_env();

        assert!(result.is_err());
    }
}
