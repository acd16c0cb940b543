//! Application configuration
//!
//! Two sections, both plain JSON:
//! 1. Logging (level, outputs, per-module filters)
//! 2. Parser settings (external rule table, registered regions)

#![allow(clippy::uninlined_format_args)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::region::Region;
use crate::infrastructure::parsing::ParsingConfig;

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub parsing: ParserSettings,
}

/// Logging configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Write logs to stderr
    pub console_output: bool,

    /// Write logs to `file_name` in the log directory
    pub file_output: bool,

    pub file_name: String,

    /// Module-specific log level filters (e.g., "html5ever": "warn")
    pub module_filters: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            json_format: defaults::LOG_JSON_FORMAT,
            console_output: defaults::LOG_CONSOLE_OUTPUT,
            file_output: defaults::LOG_FILE_OUTPUT,
            file_name: defaults::LOG_FILE_NAME.to_string(),
            module_filters: defaults::LOG_MODULE_FILTERS
                .iter()
                .map(|(module, level)| ((*module).to_string(), (*level).to_string()))
                .collect(),
        }
    }
}

/// Which rule table to compile and for which regions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// JSON rule table replacing the built-in one
    pub rules_path: Option<PathBuf>,

    /// Regions to register; empty means every region of the table
    pub regions: Vec<Region>,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            rules_path: None,
            regions: Region::ALL.to_vec(),
        }
    }
}

impl ParserSettings {
    /// The rule table these settings select.
    pub fn rule_table(&self) -> Result<ParsingConfig> {
        let table = match &self.rules_path {
            Some(path) => ParsingConfig::load(path)?,
            None => ParsingConfig::default(),
        };
        if self.regions.is_empty() {
            return Ok(table);
        }
        Ok(table.restricted_to(&self.regions))
    }
}

/// Loads and stores [`AppConfig`] at a fixed path
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_config(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            info!("Configuration file not found, creating default: {:?}", self.config_path);
            let default_config = AppConfig::default();
            self.save_config(&default_config)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read configuration file {}", self.config_path.display()))?;

        match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => {
                info!("Loaded configuration from: {:?}", self.config_path);
                Ok(config)
            }
            Err(parse_error) => {
                warn!("Configuration file is invalid: {}", parse_error);
                warn!("Falling back to default configuration");

                let backup_path = self.config_path.with_extension("json.corrupted");
                if let Err(e) = fs::copy(&self.config_path, &backup_path) {
                    warn!("Failed to create backup of corrupted config: {}", e);
                } else {
                    info!("Backed up corrupted config to: {:?}", backup_path);
                }

                let default_config = AppConfig::default();
                self.save_config(&default_config)
                    .context("Failed to save default configuration")?;
                Ok(default_config)
            }
        }
    }

    /// Save configuration to file
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(config)
            .context("Failed to serialize configuration")?;
        fs::write(&self.config_path, content).context("Failed to write configuration file")?;

        info!("Saved configuration to: {:?}", self.config_path);
        Ok(())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

/// Default values
pub mod defaults {
    pub const LOG_LEVEL: &str = "info";

    pub const LOG_JSON_FORMAT: bool = false;

    pub const LOG_CONSOLE_OUTPUT: bool = true;

    /// The dump binary prints to stdout; file logging is opt-in
    pub const LOG_FILE_OUTPUT: bool = false;

    pub const LOG_FILE_NAME: &str = "amz-page-parser.log";

    /// Dependencies that are noisy below these levels
    pub const LOG_MODULE_FILTERS: &[(&str, &str)] = &[
        ("html5ever", "warn"),
        ("selectors", "warn"),
    ];

    pub const CONFIG_FILE_NAME: &str = "amz_page_parser_config.json";
}
