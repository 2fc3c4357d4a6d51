//! Configuration file support for the dropdown demo.
//!
//! A config file describes one dropdown session: logging verbosity, the
//! viewport, where the trigger sits, the data list and the declarative
//! dropdown options.

use std::path::Path;

use dropdown_ui::{DropdownOptions, Rectangle, Viewport};
use serde::{Deserialize, Serialize};

/// Log level setting for the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// One demo session read from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Dark theme enabled
    #[serde(default)]
    pub dark_theme: bool,

    /// The host filters rows itself from the search text
    #[serde(default)]
    pub host_filtering: bool,

    /// Screen the overlay has to fit in
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,

    /// Absolute position of the trigger button
    #[serde(default = "default_trigger")]
    pub trigger: Rectangle,

    /// Items offered by the dropdown (strings, numbers or objects)
    #[serde(default = "default_data")]
    pub data: Vec<serde_json::Value>,

    /// Declarative dropdown options
    #[serde(default)]
    pub options: DropdownOptions,
}

fn default_viewport() -> Viewport {
    Viewport::new(360.0, 800.0)
}

fn default_trigger() -> Rectangle {
    Rectangle::new(20.0, 120.0, 320.0, 50.0)
}

fn default_data() -> Vec<serde_json::Value> {
    ["Egypt", "Canada", "Australia", "Ireland", "Brazil", "England", "Dubai"]
        .into_iter()
        .map(serde_json::Value::from)
        .collect()
}

impl DemoConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            dark_theme: false,
            host_filtering: false,
            viewport: default_viewport(),
            trigger: default_trigger(),
            data: default_data(),
            options: DropdownOptions::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let config = DemoConfig::new();
        let json = config.to_json().unwrap();
        let parsed = DemoConfig::from_json(&json).unwrap();

        assert_eq!(parsed.version, CONFIG_VERSION);
        assert_eq!(parsed.log_level, LogLevel::Info);
        assert_eq!(parsed.data.len(), 7);
        assert_eq!(parsed.options, config.options);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let parsed = DemoConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(parsed.viewport, default_viewport());
        assert_eq!(parsed.trigger, default_trigger());
        assert!(!parsed.options.multiple_select);
    }

    #[test]
    fn test_options_and_level_parsed() {
        let parsed = DemoConfig::from_json(
            r#"{
                "version": 1,
                "log_level": "debug",
                "dark_theme": true,
                "host_filtering": true,
                "viewport": { "width": 400, "height": 600, "direction": "rtl" },
                "data": [{ "title": "one" }, null, { "title": "two" }],
                "options": { "search": true, "search_key": "title" }
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.log_level.to_level_filter(), log::LevelFilter::Debug);
        assert!(parsed.dark_theme);
        assert!(parsed.host_filtering);
        assert_eq!(parsed.viewport.direction, dropdown_ui::LayoutDirection::Rtl);
        assert_eq!(parsed.data.len(), 3);
        assert_eq!(parsed.options.search_key.as_deref(), Some("title"));
    }

    #[test]
    fn test_version_too_new() {
        let json = r#"{ "version": 999 }"#;
        let result = DemoConfig::from_json(json);
        assert!(matches!(
            result,
            Err(ConfigError::VersionTooNew {
                file_version: 999,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            DemoConfig::from_json("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = DemoConfig::load_file(Path::new("/nonexistent/select-dropdown.json"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
