// RUNTIME PREFERENCES (User Experience)

use super::constants::compile_time::{export, file_processing};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Errors raised while loading a runtime configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Invalid configuration in '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ConfigError::Read { .. } => crate::logging::codes::config::CONFIG_READ_FAILED,
            ConfigError::Parse { .. } => crate::logging::codes::config::CONFIG_PARSE_FAILED,
            ConfigError::InvalidValue { .. } => crate::logging::codes::config::CONFIG_INVALID_VALUE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportPreferences {
    /// Token definition source to scan
    pub source_path: PathBuf,

    /// Directory every document is written into
    pub output_dir: PathBuf,

    /// Product name carried by the design-tool envelopes
    pub document_name: String,

    /// Schema version carried by the design-tool envelopes
    pub schema_version: String,

    /// Whether envelopes carry a `generatedAt` timestamp
    pub embed_timestamp: bool,

    /// Whether the README manifest is generated alongside the documents
    pub generate_readme: bool,
}

impl Default for ExportPreferences {
    fn default() -> Self {
        Self {
            source_path: env::var(env_vars::SOURCE_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(file_processing::DEFAULT_SOURCE_PATH)),
            output_dir: env::var(env_vars::OUTPUT_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(export::DEFAULT_OUTPUT_DIR)),
            document_name: env::var(env_vars::DOCUMENT_NAME)
                .unwrap_or_else(|_| export::DEFAULT_DOCUMENT_NAME.to_string()),
            schema_version: env::var(env_vars::SCHEMA_VERSION)
                .unwrap_or_else(|_| export::DEFAULT_SCHEMA_VERSION.to_string()),
            embed_timestamp: env::var(env_vars::EMBED_TIMESTAMP)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            generate_readme: env::var(env_vars::GENERATE_README)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl ExportPreferences {
    /// Reject values that would produce unusable documents
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "source_path",
                reason: "path is empty".to_string(),
            });
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output_dir",
                reason: "path is empty".to_string(),
            });
        }
        if self.document_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "document_name",
                reason: "name is blank".to_string(),
            });
        }
        if self.schema_version.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "schema_version",
                reason: "version is blank".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Emit JSON lines instead of plain text
    pub use_structured_logging: bool,

    /// Minimum level that reaches the console
    pub min_log_level: LogLevel,

    /// Include the source path in every event
    pub include_file_context: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Warning),
            include_file_context: env::var(env_vars::LOGGING_INCLUDE_FILE_CONTEXT)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables and CLI flags)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub export: ExportPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse a TOML document; missing tables and fields keep their defaults
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: RuntimeConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        config.export.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Export
    pub const SOURCE_PATH: &str = "TOKENS_SOURCE_PATH";
    pub const OUTPUT_DIR: &str = "TOKENS_OUTPUT_DIR";
    pub const DOCUMENT_NAME: &str = "TOKENS_DOCUMENT_NAME";
    pub const SCHEMA_VERSION: &str = "TOKENS_SCHEMA_VERSION";
    pub const EMBED_TIMESTAMP: &str = "TOKENS_EMBED_TIMESTAMP";
    pub const GENERATE_README: &str = "TOKENS_GENERATE_README";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "TOKENS_LOGGING_USE_STRUCTURED";
    pub const LOGGING_MIN_LEVEL: &str = "TOKENS_LOGGING_MIN_LEVEL";
    pub const LOGGING_INCLUDE_FILE_CONTEXT: &str = "TOKENS_LOGGING_INCLUDE_FILE_CONTEXT";
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("warning"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("invalid"), None);
    }

    #[test]
    fn test_toml_overrides_selected_fields() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [export]
            output_dir = "build/tokens"
            document_name = "Acme Tokens"
            generate_readme = false

            [logging]
            min_log_level = "debug"
            "#,
            "inline",
        )
        .unwrap();

        assert_eq!(config.export.output_dir, PathBuf::from("build/tokens"));
        assert_eq!(config.export.document_name, "Acme Tokens");
        assert!(!config.export.generate_readme);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
        // Untouched fields keep their defaults
        assert_eq!(
            config.export.schema_version,
            ExportPreferences::default().schema_version
        );
    }

    #[test]
    fn test_toml_parse_error() {
        let result = RuntimeConfig::from_toml_str("[export\noutput_dir = 3", "broken.toml");
        assert_matches!(result, Err(ConfigError::Parse { ref path, .. }) if path == "broken.toml");
    }

    #[test]
    fn test_blank_document_name_rejected() {
        let result = RuntimeConfig::from_toml_str("[export]\ndocument_name = \"  \"", "inline");
        assert_matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "document_name",
                ..
            })
        );
    }

    #[test]
    fn test_missing_file() {
        let result = RuntimeConfig::from_file(Path::new("/nonexistent/tokens.toml"));
        assert_matches!(result, Err(ConfigError::Read { .. }));
    }

    #[test]
    fn test_env_var_names() {
        let names = [
            env_vars::SOURCE_PATH,
            env_vars::OUTPUT_DIR,
            env_vars::DOCUMENT_NAME,
            env_vars::SCHEMA_VERSION,
            env_vars::EMBED_TIMESTAMP,
            env_vars::GENERATE_README,
            env_vars::LOGGING_USE_STRUCTURED,
            env_vars::LOGGING_MIN_LEVEL,
            env_vars::LOGGING_INCLUDE_FILE_CONTEXT,
        ];
        assert_eq!(
            names,
            [
                "TOKENS_SOURCE_PATH",
                "TOKENS_OUTPUT_DIR",
                "TOKENS_DOCUMENT_NAME",
                "TOKENS_SCHEMA_VERSION",
                "TOKENS_EMBED_TIMESTAMP",
                "TOKENS_GENERATE_README",
                "TOKENS_LOGGING_USE_STRUCTURED",
                "TOKENS_LOGGING_MIN_LEVEL",
                "TOKENS_LOGGING_INCLUDE_FILE_CONTEXT",
            ]
        );
    }

    #[test]
    fn test_min_level_read_from_env() {
        // Only this test touches this variable
        env::set_var(env_vars::LOGGING_MIN_LEVEL, "debug");
        let prefs = LoggingPreferences::default();
        env::remove_var(env_vars::LOGGING_MIN_LEVEL);

        assert_eq!(prefs.min_log_level, LogLevel::Debug);
    }
}
