//! Client settings
//!
//! A TOML file with `[api]`, `[session]`, `[oauth]` and `[logging]`
//! sections; every key has a default. `MAKERLAB_*` environment variables
//! win over the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub oauth: OAuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("makerlab/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Where the login session is persisted
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_path")]
    pub path: PathBuf,
}

fn default_session_path() -> PathBuf {
    dirs::config_dir()
        .map(|p| p.join("makerlab").join("session.json"))
        .unwrap_or_else(|| PathBuf::from("./makerlab_session.json"))
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

/// Social login client settings
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthConfig {
    pub google_client_id: Option<String>,

    pub kakao_client_id: Option<String>,

    #[serde(default = "default_redirect_base")]
    pub redirect_base: String,
}

fn default_redirect_base() -> String {
    "http://localhost:3000".to_string()
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            google_client_id: None,
            kakao_client_id: None,
            redirect_base: default_redirect_base(),
        }
    }
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
    "warn".to_string()
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

impl Config {
    /// Parse `path` without environment overrides
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

    /// Defaults plus environment overrides
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// First readable file of the user config dir, `/etc/makerlab` and the
    /// working directory; defaults when none loads
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("makerlab").join("config.toml")),
            Some(PathBuf::from("/etc/makerlab/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {:?}", path_opt);
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

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `MAKERLAB_*` overrides from any key lookup
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("MAKERLAB_API_URL") {
            self.api.base_url = url;
        }
        if let Some(path) = lookup("MAKERLAB_SESSION_PATH") {
            self.session.path = PathBuf::from(path);
        }
        if let Some(level) = lookup("MAKERLAB_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("MAKERLAB_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Commented template written by `makerlab config`
pub fn generate_default_config() -> String {
    r#"# AI Maker Lab client configuration
#
# Environment variables override these settings:
# - MAKERLAB_API_URL
# - MAKERLAB_SESSION_PATH
# - MAKERLAB_LOG_LEVEL
# - MAKERLAB_LOG_FORMAT

[api]
# Backend REST root; resource paths are appended to it
base_url = "http://localhost:8000/api/v1"

# Per-request timeout (seconds)
request_timeout_secs = 30

[session]
# Login session file (defaults to the user config directory)
# path = "~/.config/makerlab/session.json"

[oauth]
# google_client_id = ""
# kakao_client_id = ""
redirect_base = "http://localhost:3000"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty, json
format = "pretty"
"#
    .to_string()
}
