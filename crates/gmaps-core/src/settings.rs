//! Settings for the logging emitter.
//!
//! The event catalog is compile-time data and has no settings of its own.

use serde::{Deserialize, Deserializer, Serialize};

/// Default level for logged map events.
pub const DEFAULT_EVENT_LOG_LEVEL: LogLevel = LogLevel::Warn;

/// Level a [`LoggingEmitter`](crate::ports::LoggingEmitter) writes events at.
///
/// Deserialization goes through [`LogLevel::parse`], so unknown names fall
/// back to the default instead of rejecting the whole config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// `tracing::debug!`
    Debug,
    /// `tracing::info!`
    Info,
    /// `tracing::warn!`
    #[default]
    Warn,
    /// `tracing::error!`
    Error,
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

impl LogLevel {
    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Parse from string representation.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "info" => Self::Info,
            "error" => Self::Error,
            // "warn" or unknown values default to Warn
            _ => DEFAULT_EVENT_LOG_LEVEL,
        }
    }
}

/// Logging emitter settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingEmitterConfig {
    /// Level events are logged at.
    pub level: Option<LogLevel>,

    /// Include the JSON payload in the log record.
    pub include_payload: Option<bool>,
}

impl LoggingEmitterConfig {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            level: Some(DEFAULT_EVENT_LOG_LEVEL),
            include_payload: Some(true),
        }
    }

    /// Get the effective level (with default fallback).
    #[must_use]
    pub const fn effective_level(&self) -> LogLevel {
        match self.level {
            Some(level) => level,
            None => DEFAULT_EVENT_LOG_LEVEL,
        }
    }

    /// Whether payloads are logged (defaults to true).
    #[must_use]
    pub const fn effective_include_payload(&self) -> bool {
        match self.include_payload {
            Some(include) => include,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::parse(" INFO "), LogLevel::Info);
        assert_eq!(LogLevel::parse("error"), LogLevel::Error);
        assert_eq!(LogLevel::parse("warn"), LogLevel::Warn);
        assert_eq!(LogLevel::parse("trace"), LogLevel::Warn);
    }

    #[test]
    fn test_log_level_as_str_round_trips() {
        for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
            assert_eq!(LogLevel::parse(level.as_str()), level);
        }
    }

    #[test]
    fn test_effective_defaults() {
        let empty = LoggingEmitterConfig::default();
        assert_eq!(empty.effective_level(), LogLevel::Warn);
        assert!(empty.effective_include_payload());
        assert_eq!(
            LoggingEmitterConfig::with_defaults().effective_level(),
            DEFAULT_EVENT_LOG_LEVEL
        );
    }

    #[test]
    fn test_partial_json() {
        let config: LoggingEmitterConfig = serde_json::from_str(r#"{"level":"debug"}"#).unwrap();
        assert_eq!(config.effective_level(), LogLevel::Debug);
        assert_eq!(config.include_payload, None);
        assert!(config.effective_include_payload());
    }

    #[test]
    fn test_unknown_level_in_json_falls_back() {
        let config: LoggingEmitterConfig = serde_json::from_str(r#"{"level":"trace"}"#).unwrap();
        assert_eq!(config.level, Some(DEFAULT_EVENT_LOG_LEVEL));
        assert_eq!(config.effective_level(), LogLevel::Warn);
    }

    #[test]
    fn test_level_in_json_is_case_insensitive() {
        let config: LoggingEmitterConfig =
            serde_json::from_str(r#"{"level":" ERROR ","include_payload":false}"#).unwrap();
        assert_eq!(config.effective_level(), LogLevel::Error);
        assert!(!config.effective_include_payload());

        let config: LoggingEmitterConfig = serde_json::from_str(r#"{"level":"WARN"}"#).unwrap();
        assert_eq!(config.effective_level(), LogLevel::Warn);
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let json = serde_json::to_string(&LogLevel::Info).unwrap();
        assert_eq!(json, "\"info\"");
        let parsed: LogLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, LogLevel::Info);
    }
}
