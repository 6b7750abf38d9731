//! Application configuration structs
//!
//! Loads configuration from environment variables and config files.

use std::env;
use std::path::Path;
use std::time::Duration;

use collab_core::DEFAULT_AVATAR;
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CollabConfig {
    #[serde(default)]
    pub app: AppSettings,
    pub client: ClientConfig,
    pub directory: DirectoryConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            env: default_env(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Collaboration service client settings
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Public key used to authenticate with the collaboration back end
    pub public_api_key: String,
}

/// External user directory settings
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    pub base_url: String,
    #[serde(default = "default_users_path")]
    pub users_path: String,
    /// Sent as a bearer token when present
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Unbounded when absent
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_avatar")]
    pub default_avatar: String,
}

impl DirectoryConfig {
    /// Directory config with defaults for everything but the base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            users_path: default_users_path(),
            auth_token: None,
            timeout_secs: None,
            default_avatar: default_avatar(),
        }
    }

    /// Full URL of the users endpoint
    #[must_use]
    pub fn users_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.users_path.trim_start_matches('/')
        )
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

// Default value functions
fn default_app_name() -> String {
    "collab-rooms".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_users_path() -> String {
    "/api/users".to_string()
}

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

impl CollabConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Uses the same variable names as [`CollabConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let timeout_secs = match lookup("USERS_API_TIMEOUT_SECS") {
            Some(raw) => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("USERS_API_TIMEOUT_SECS", raw))?,
            ),
            None => None,
        };

        let env = match lookup("APP_ENV") {
            Some(raw) => {
                Environment::parse(&raw).ok_or(ConfigError::InvalidValue("APP_ENV", raw))?
            }
            None => default_env(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            client: ClientConfig {
                public_api_key: lookup("COLLAB_PUBLIC_KEY")
                    .ok_or(ConfigError::MissingVar("COLLAB_PUBLIC_KEY"))?,
            },
            directory: DirectoryConfig {
                base_url: lookup("USERS_API_BASE_URL")
                    .ok_or(ConfigError::MissingVar("USERS_API_BASE_URL"))?,
                users_path: lookup("USERS_API_PATH").unwrap_or_else(default_users_path),
                auth_token: lookup("USERS_API_TOKEN").filter(|token| !token.is_empty()),
                timeout_secs,
                default_avatar: lookup("DEFAULT_AVATAR").unwrap_or_else(default_avatar),
            },
        })
    }

    /// Load configuration from an optional file, overridden by
    /// `COLLAB__`-prefixed environment variables
    /// (e.g. `COLLAB__DIRECTORY__BASE_URL`)
    ///
    /// # Errors
    /// Returns an error if the merged sources do not form a valid configuration
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("COLLAB")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| ConfigError::Load(e.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),

    #[error("Failed to load configuration: {0}")]
    Load(String),
}
