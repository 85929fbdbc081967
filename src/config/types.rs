// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::fmt;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
    pub session: SessionConfig,
    pub routes: RoutesConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Content directory configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    /// Flat directory whose files become pages
    pub dir: String,
    /// Page served for the empty path
    pub home_page: String,
}

/// Session cookie attributes
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct SessionConfig {
    pub secure: bool,
    /// Hide the cookie from page scripts
    pub http_only: bool,
}

/// Routes configuration
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct RoutesConfig {
    /// Serve the client-side cookie helpers at `/runtime.js`
    pub runtime_script: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Most verbose level written; access lines are governed by `access_log`
    pub level: LogLevel,
    pub access_log: bool,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Log verbosity, least to most verbose
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}
