use crate::core_types::FileIdentity;
use crate::error::{LogError, LogResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};

pub const ENV_ENABLED: &str = "SITELOG_ENABLED";
pub const ENV_CATEGORY: &str = "SITELOG_CATEGORY";
pub const ENV_STACK_DEPTH: &str = "SITELOG_STACK_DEPTH";
pub const ENV_FILE_IDENTITY: &str = "SITELOG_FILE_IDENTITY";

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether calls are forwarded at all. Can be toggled later on the logger.
    pub enabled: bool,
    /// Category stamped on every record
    pub category: String,
    /// Maximum number of frames captured by `trace!`; zero disables capture
    pub stack_depth: usize,
    /// How call-site files are shown in text output
    pub file_identity: FileIdentity,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            category: "app".to_string(),
            stack_depth: 64,
            file_identity: FileIdentity::Name,
        }
    }
}

impl LogConfig {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_stack_depth(mut self, depth: usize) -> Self {
        self.stack_depth = depth;
        self
    }

    pub fn with_file_identity(mut self, identity: FileIdentity) -> Self {
        self.file_identity = identity;
        self
    }

    /// Load configuration from environment variables, keeping defaults for
    /// anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Configuration`] when a variable is set to a value
    /// that does not parse.
    pub fn from_env() -> LogResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> LogResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_ENABLED) {
            config.enabled = parse_bool(ENV_ENABLED, &value)?;
        }
        if let Some(value) = lookup(ENV_CATEGORY) {
            let value = value.trim();
            if value.is_empty() {
                return Err(LogError::configuration(
                    ENV_CATEGORY,
                    value,
                    "category must not be empty",
                ));
            }
            config.category = value.to_string();
        }
        if let Some(value) = lookup(ENV_STACK_DEPTH) {
            config.stack_depth = value.trim().parse().map_err(|e| {
                LogError::configuration(ENV_STACK_DEPTH, value.as_str(), format!("{e}"))
            })?;
        }
        if let Some(value) = lookup(ENV_FILE_IDENTITY) {
            config.file_identity = match value.trim().to_ascii_lowercase().as_str() {
                "name" => FileIdentity::Name,
                "id" => FileIdentity::Id,
                _ => {
                    return Err(LogError::configuration(
                        ENV_FILE_IDENTITY,
                        value,
                        "expected \"name\" or \"id\"",
                    ))
                }
            };
        }

        log_debug!(
            enabled = config.enabled,
            category = %config.category,
            stack_depth = config.stack_depth,
            file_identity = ?config.file_identity,
            "Logging configuration loaded"
        );

        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> LogResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LogError::configuration(key, value, "expected a boolean")),
    }
}
