//! Server configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `SHAPESHIFT_*` environment variables, then CLI flags (applied by
//! the binary through the `with_*` setters).

use app_ui::Mode;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Environment variable overriding the bind address
pub const ENV_BIND: &str = "SHAPESHIFT_BIND";
/// Environment variable pinning the mode (`auto` clears a pin)
pub const ENV_MODE: &str = "SHAPESHIFT_MODE";
/// Environment variable overriding the log filter
pub const ENV_LOG: &str = "SHAPESHIFT_LOG";

/// Default listen address
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`ServerConfig`]
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A mode name that is not one of the seven modes
    #[error("Invalid mode override: {0}")]
    InvalidMode(String),

    /// A bind address that is not `host:port`
    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),
}

/// Runtime settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_address: String,
    /// Serve every request in this mode instead of the clock-derived one
    pub mode_override: Option<Mode>,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND.to_string(),
            mode_override: None,
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Parse TOML; missing keys keep their defaults
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Defaults, then the file if given, then the process environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.apply_env(|key| std::env::var(key).ok())
    }

    /// Apply `SHAPESHIFT_*` overrides read through `lookup`
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup(ENV_BIND).filter(|v| !v.is_empty()) {
            self.bind_address = bind;
        }
        if let Some(mode) = lookup(ENV_MODE).filter(|v| !v.is_empty()) {
            self.mode_override = parse_mode_override(&mode)?;
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|v| !v.is_empty()) {
            self.log_filter = filter;
        }
        Ok(self)
    }

    /// Override the bind address
    pub fn with_bind_address(mut self, bind: impl Into<String>) -> Self {
        self.bind_address = bind.into();
        self
    }

    /// Pin or unpin the mode
    pub fn with_mode_override(mut self, mode: Option<Mode>) -> Self {
        self.mode_override = mode;
        self
    }

    /// Parsed bind address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_address
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(self.bind_address.clone()))
    }
}

/// Parse a mode name; `auto` means no override
pub fn parse_mode_override(value: &str) -> Result<Option<Mode>, ConfigError> {
    if value.trim().eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    value.parse::<Mode>().map(Some).map_err(ConfigError::InvalidMode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.mode_override, None);
        assert_eq!(config.log_filter, "info");
        assert!(config.socket_addr().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml_str("mode_override = \"flash_sale\"").unwrap();
        assert_eq!(config.mode_override, Some(Mode::FlashSale));
        assert_eq!(config.bind_address, DEFAULT_BIND);
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            ServerConfig::from_toml_str("mode_override = \"teatime\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ServerConfig::from_toml_str("bind_address = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_address = \"127.0.0.1:9000\"").unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();

        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ServerConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_env_overrides_file() {
        let config = ServerConfig::from_toml_str("bind_address = \"127.0.0.1:9000\"")
            .unwrap()
            .apply_env(env(&[
                (ENV_BIND, "127.0.0.1:9100"),
                (ENV_MODE, "Evening"),
                (ENV_LOG, "warn"),
            ]))
            .unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9100");
        assert_eq!(config.mode_override, Some(Mode::Evening));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_env_auto_clears_pin() {
        let config = ServerConfig::default()
            .with_mode_override(Some(Mode::Night))
            .apply_env(env(&[(ENV_MODE, "auto")]))
            .unwrap();
        assert_eq!(config.mode_override, None);
    }

    #[test]
    fn test_env_bad_mode() {
        let result = ServerConfig::default().apply_env(env(&[(ENV_MODE, "brunch")]));
        assert!(matches!(result, Err(ConfigError::InvalidMode(_))));
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let config = ServerConfig::default()
            .apply_env(env(&[(ENV_BIND, ""), (ENV_MODE, "")]))
            .unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_cli_setters() {
        let config = ServerConfig::default()
            .with_bind_address("not an address")
            .with_mode_override(Some(Mode::Morning));
        assert_eq!(config.mode_override, Some(Mode::Morning));
        assert!(matches!(config.socket_addr(), Err(ConfigError::InvalidAddress(_))));
    }
}
