//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `STUDYBUDDY_*` environment overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::ApiBase;
use crate::auth::FileTokenStore;
use crate::server::ServerConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend the CLI talks to
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub url: ApiBase,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: ApiBase::default(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Fixture server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built UI to serve next to the API
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

/// Where the CLI keeps the login token
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Defaults to `<data dir>/studybuddy/session.json`
    #[serde(default)]
    pub token_file: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// `EnvFilter` directive for this crate's targets
    pub fn filter_directive(&self) -> String {
        format!("studybuddy={},tower_http={}", self.level, self.level)
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("studybuddy").join("config.toml")),
            Some(PathBuf::from("/etc/studybuddy/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Load `path` if given, otherwise the default locations
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load_with_env(p),
            None => Ok(Self::load_default()),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `STUDYBUDDY_*` overrides read through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("STUDYBUDDY_API_URL") {
            self.api.url = ApiBase::new(url);
        }

        if let Some(host) = lookup("STUDYBUDDY_SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("STUDYBUDDY_SERVER_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid STUDYBUDDY_SERVER_PORT: {}", port),
            }
        }
        if let Some(dir) = lookup("STUDYBUDDY_STATIC_DIR") {
            self.server.static_dir = Some(PathBuf::from(dir));
        }

        if let Some(file) = lookup("STUDYBUDDY_TOKEN_FILE") {
            self.auth.token_file = Some(PathBuf::from(file));
        }

        if let Some(level) = lookup("STUDYBUDDY_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("STUDYBUDDY_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Settings for the fixture server
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.server.host.clone(),
            port: self.server.port,
            static_dir: self.server.static_dir.clone(),
        }
    }

    /// Token store at the configured (or default) location
    pub fn token_store(&self) -> Result<FileTokenStore, ConfigError> {
        self.auth
            .token_file
            .clone()
            .or_else(FileTokenStore::default_path)
            .map(FileTokenStore::new)
            .ok_or(ConfigError::NoDataDir)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("No data directory available; set STUDYBUDDY_TOKEN_FILE")]
    NoDataDir,
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# StudyBuddy Configuration
#
# Environment variables override these settings:
# - STUDYBUDDY_API_URL
# - STUDYBUDDY_SERVER_HOST
# - STUDYBUDDY_SERVER_PORT
# - STUDYBUDDY_STATIC_DIR
# - STUDYBUDDY_TOKEN_FILE
# - STUDYBUDDY_LOG_LEVEL
# - STUDYBUDDY_LOG_FORMAT

[api]
# Backend base URL
url = "http://localhost:5000"

# Request timeout (ms)
timeout_ms = 10000

[server]
# Fixture server host
host = "127.0.0.1"

# Fixture server port
port = 5000

# Serve a built UI from this directory
# static_dir = "./studybuddy-ui/dist"

[auth]
# Where the login token is kept
# token_file = "~/.local/share/studybuddy/session.json"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_generated_default_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.url, ApiBase::default());
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(config.server.port, 5000);
        assert!(config.server.static_dir.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nurl = \" http://backend:5000/ \"\n\n[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.url.as_str(), "http://backend:5000");
        assert!(config.logging.is_json());
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[server]\nport = \"many\"").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("STUDYBUDDY_API_URL", "https://api.example.org/"),
            ("STUDYBUDDY_SERVER_PORT", "7001"),
            ("STUDYBUDDY_STATIC_DIR", "/srv/ui"),
            ("STUDYBUDDY_TOKEN_FILE", "/tmp/token.json"),
            ("STUDYBUDDY_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.api.url.as_str(), "https://api.example.org");
        assert_eq!(config.server.port, 7001);
        assert_eq!(config.server_config().static_dir, Some(PathBuf::from("/srv/ui")));
        assert_eq!(
            config.token_store().unwrap().path(),
            Path::new("/tmp/token.json")
        );
        assert_eq!(config.logging.filter_directive(), "studybuddy=debug,tower_http=debug");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|k| (k == "STUDYBUDDY_SERVER_PORT").then(|| "abc".to_string()));
        assert_eq!(config.server.port, 5000);
    }
}
