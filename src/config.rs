/*!
 * Configuration types for Courier
 */

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CourierError, Result};

/// Main configuration for a client run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierConfig {
    /// Remote endpoint both services are reached on
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Origin address to report (None = resolve the primary interface)
    #[serde(default)]
    pub origin_address: Option<String>,

    /// Log level for diagnostic output
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log file path (None = stderr)
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging (shorthand for log_level = debug)
    #[serde(default)]
    pub verbose: bool,
}

impl Default for CourierConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            origin_address: None,
            log_level: LogLevel::Info,
            log_file: None,
            verbose: false,
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors
    Error,

    /// Warnings and errors
    Warn,

    /// Info, warnings, and errors
    #[default]
    Info,

    /// Debug and above
    Debug,

    /// All messages including traces
    Trace,
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

// Default value functions for serde
fn default_endpoint() -> String {
    // Loopback on the fixed service port
    "http://127.0.0.1:12345".to_string()
}

impl CourierConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CourierError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&contents).map_err(|e| {
            CourierError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}
