//! Configuration
//!
//! TOML file with `CLUB_SIGNUP_*` environment overrides on top. Every
//! section and key is optional.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Environment variable overriding `[api] base_url`
pub const ENV_API_URL: &str = "CLUB_SIGNUP_API_URL";
/// Environment variable overriding `[notice] hide_after_ms`
pub const ENV_NOTICE_MS: &str = "CLUB_SIGNUP_NOTICE_MS";
/// Environment variable overriding `[logging] level`
pub const ENV_LOG_LEVEL: &str = "CLUB_SIGNUP_LOG_LEVEL";
/// Environment variable overriding `[logging] format`
pub const ENV_LOG_FORMAT: &str = "CLUB_SIGNUP_LOG_FORMAT";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub notice: NoticeConfig,
    pub logging: LoggingConfig,
}

/// Where the activities API lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Unset means requests never time out
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    pub hide_after_ms: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self { hide_after_ms: 5000 }
    }
}

impl NoticeConfig {
    /// How long a signup notice stays visible
    pub fn hide_after(&self) -> Duration {
        Duration::from_millis(self.hide_after_ms)
    }
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for development
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::Invalid {
                key: "logging.format",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for this crate's targets when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
    /// Append log lines to this file instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

impl Config {
    /// Read and parse one file, without environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse TOML text; `origin` names the source in errors
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// One file plus environment overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::load(path)?.with_overrides(|key| std::env::var(key).ok()))
    }

    /// First readable file among [`Config::search_paths`], else defaults.
    /// Environment overrides apply either way.
    pub fn load_default() -> Self {
        let found = Self::search_paths()
            .into_iter()
            .filter(|path| path.is_file())
            .find_map(|path| match Self::load_with_env(&path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded config");
                    Some(config)
                }
                Err(error) => {
                    tracing::warn!(%error, "Skipping config file");
                    None
                }
            });

        found.unwrap_or_else(|| {
            tracing::info!("No config file found, using defaults");
            Self::from_env()
        })
    }

    /// Candidate config files, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(2);
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("club-signup").join("config.toml"));
        }
        paths.push(PathBuf::from("config.toml"));
        paths
    }

    /// Apply overrides from `lookup`. Unparseable values are logged and
    /// leave the current setting alone.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api.base_url = url;
        }

        if let Some(raw) = lookup(ENV_NOTICE_MS) {
            match raw.trim().parse() {
                Ok(ms) => self.notice.hide_after_ms = ms,
                Err(_) => tracing::warn!(var = ENV_NOTICE_MS, value = %raw, "Ignoring override"),
            }
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            match raw.parse() {
                Ok(format) => self.logging.format = format,
                Err(error) => tracing::warn!(var = ENV_LOG_FORMAT, %error, "Ignoring override"),
            }
        }

        self
    }
}

const TEMPLATE: &str = r#"# club-signup
#
# Every key is optional. These variables take precedence:
#   CLUB_SIGNUP_API_URL     [api] base_url
#   CLUB_SIGNUP_NOTICE_MS   [notice] hide_after_ms
#   CLUB_SIGNUP_LOG_LEVEL   [logging] level
#   CLUB_SIGNUP_LOG_FORMAT  [logging] format

[api]
base_url = "http://localhost:8000"
# request_timeout_secs = 30

[notice]
# Milliseconds a signup notice stays on screen
hide_after_ms = 5000

[logging]
# trace | debug | info | warn | error (RUST_LOG wins when set)
level = "info"
# pretty | json
format = "pretty"
# file = "club-signup.log"
"#;

/// Commented config file matching [`Config::default`]
pub fn generate_default_config() -> String {
    TEMPLATE.to_string()
}
