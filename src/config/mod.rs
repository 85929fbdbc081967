// Configuration module entry point
// Loads layered configuration and holds the process-wide application state

mod state;
mod types;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use std::net::{AddrParseError, SocketAddr};

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, ContentConfig, LogLevel, LoggingConfig, RoutesConfig, ServerConfig, SessionConfig,
};

/// Config file looked up in the working directory (any supported extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Environment variable selecting the listening port
pub const PORT_ENV: &str = "PORT";

impl Config {
    /// Load configuration from `config.*`, `SERVER_*` variables and `PORT`
    pub fn load() -> Result<Self, ConfigError> {
        let port = std::env::var(PORT_ENV).ok();
        Self::load_layered(DEFAULT_CONFIG_PATH, port)
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// An empty port override is ignored so `PORT=` behaves like an unset variable.
    pub fn load_layered(config_path: &str, port: Option<String>) -> Result<Self, ConfigError> {
        let port = port.filter(|p| !p.is_empty());
        Self::defaults()?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SERVER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("server.port", port)?
            .build()?
            .try_deserialize()
    }

    /// Configuration built from defaults only
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::defaults()?.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("content.dir", "static")?
            .set_default("content.home_page", "index.html")?
            .set_default("session.secure", true)?
            .set_default("session.http_only", true)?
            .set_default("routes.runtime_script", true)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let cfg = Config::with_defaults().unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.server.workers.is_none());
        assert_eq!(cfg.content.dir, "static");
        assert_eq!(cfg.content.home_page, "index.html");
        assert!(cfg.session.secure);
        assert!(cfg.session.http_only);
        assert!(cfg.routes.runtime_script);
        assert_eq!(cfg.logging.level, LogLevel::Info);
        assert!(cfg.logging.access_log);
        assert!(cfg.logging.access_log_file.is_none());
    }

    #[test]
    fn test_log_level_from_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("quiet.toml"), "[logging]\nlevel = \"warn\"\n").unwrap();
        fs::write(dir.path().join("noisy.toml"), "[logging]\nlevel = \"verbose\"\n").unwrap();

        let quiet = dir.path().join("quiet");
        let cfg = Config::load_layered(quiet.to_str().unwrap(), None).unwrap();
        assert_eq!(cfg.logging.level, LogLevel::Warn);
        assert_eq!(cfg.logging.level.to_string(), "warn");

        let noisy = dir.path().join("noisy");
        assert!(Config::load_layered(noisy.to_str().unwrap(), None).is_err());
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
    }

    #[test]
    fn test_port_override() {
        let cfg = Config::load_layered("does-not-exist", Some("9090".to_string())).unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "0.0.0.0:9090".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_empty_port_falls_back_to_default() {
        let cfg = Config::load_layered("does-not-exist", Some(String::new())).unwrap();
        assert_eq!(cfg.server.port, 8080);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Config::load_layered("does-not-exist", Some("http".to_string())).is_err());
    }

    #[test]
    fn test_file_source_and_port_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(
            &path,
            "[server]\nport = 3000\n\n[content]\ndir = \"pages\"\n\n[session]\nhttp_only = false\n",
        )
        .unwrap();
        let base = dir.path().join("site");
        let base = base.to_str().unwrap();

        let from_file = Config::load_layered(base, None).unwrap();
        assert_eq!(from_file.server.port, 3000);
        assert_eq!(from_file.content.dir, "pages");
        assert!(!from_file.session.http_only);
        assert!(from_file.session.secure);

        let overridden = Config::load_layered(base, Some("4000".to_string())).unwrap();
        assert_eq!(overridden.server.port, 4000);
    }
}
