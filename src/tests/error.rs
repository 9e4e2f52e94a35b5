// Unit Tests for sitelog Error Handling
//
// UNIT UNDER TEST: LogError
//
// BUSINESS RESPONSIBILITY:
//   - Distinguishes call-order mistakes from bad configuration input
//   - Keeps the offending key and value for configuration errors
//   - Produces readable messages
//
// TEST COVERAGE:
//   - Constructor functions and variant contents
//   - Display output
//   - Classification helper

use crate::error::LogError;

#[cfg(test)]
mod log_error_tests {
    use super::*;

    #[test]
    fn test_already_installed_error() {
        let error = LogError::already_installed();

        assert_eq!(error, LogError::AlreadyInstalled);
        assert!(!error.is_configuration());
        assert_eq!(
            error.to_string(),
            "A process-wide logger is already installed"
        );
    }

    #[test]
    fn test_configuration_error_preserves_context() {
        // Arrange & Act
        let error = LogError::configuration("SITELOG_STACK_DEPTH", "deep", "invalid digit");

        // Assert
        assert!(error.is_configuration());
        assert_eq!(
            error,
            LogError::Configuration {
                key: "SITELOG_STACK_DEPTH".to_string(),
                value: "deep".to_string(),
                message: "invalid digit".to_string(),
            }
        );
        assert_eq!(
            error.to_string(),
            "Invalid configuration value \"deep\" for SITELOG_STACK_DEPTH: invalid digit"
        );
    }
}
