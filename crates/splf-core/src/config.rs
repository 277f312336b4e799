//! Configuration types for the spooled file toolkit.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::options::{OpenMode, OpenOptions, DEFAULT_PAGE_LENGTH};
use crate::spooled_file::{split_name_pattern, FilterType, PATTERN_FIELDS};
use crate::Error;

/// Name pattern used when none is configured.
pub const DEFAULT_NAME_PATTERN: &str = "name,jobName,jobUser,jobNumber,number";

/// Tool configuration loaded from YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ToolConfig {
    /// Print-stream rendering settings
    pub printer: PrinterSettings,
    /// Local file naming settings
    pub naming: NamingSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

impl ToolConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        let config: ToolConfig =
            serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        if self.printer.default_page_length == 0 {
            return Err(Error::InvalidPageLength(self.printer.default_page_length));
        }

        if self.printer.file_extension.trim().is_empty() {
            return Err(Error::Config(
                "printer.file_extension cannot be empty".to_string(),
            ));
        }

        self.naming.validate()
    }

    /// Open options derived from the printer and naming settings.
    pub fn open_options(&self) -> OpenOptions {
        OpenOptions {
            readonly: false,
            open_mode: self.printer.open_mode,
            page_length: Some(self.printer.default_page_length),
            file_extension: self.printer.file_extension.clone(),
            name_pattern: Some(self.naming.name_pattern.clone()),
        }
    }
}

/// Print-stream rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterSettings {
    /// Lines per page when the spooled file does not report one
    pub default_page_length: usize,
    /// Default open mode
    pub open_mode: OpenMode,
    /// Extension of written files
    pub file_extension: String,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            default_page_length: DEFAULT_PAGE_LENGTH,
            open_mode: OpenMode::WithSpaces,
            file_extension: "splf".to_string(),
        }
    }
}

/// Local file naming settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingSettings {
    /// Comma separated spooled file fields making up the file name
    pub name_pattern: String,
    /// Filter kind deciding the leading path segments
    pub filter_type: FilterType,
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            name_pattern: DEFAULT_NAME_PATTERN.to_string(),
            filter_type: FilterType::User,
        }
    }
}

impl NamingSettings {
    /// Check that every field of the name pattern is known.
    pub fn validate(&self) -> crate::Result<()> {
        if self.name_pattern.trim().is_empty() {
            return Err(Error::Config("naming.name_pattern cannot be empty".to_string()));
        }

        for field in split_name_pattern(&self.name_pattern) {
            if !PATTERN_FIELDS.contains(&field) {
                return Err(Error::UnknownPatternField(field.to_string()));
            }
        }

        Ok(())
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
