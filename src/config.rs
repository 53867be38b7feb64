//! Client configuration
//!
//! Loaded from a YAML file or from `BYBIT_*` environment variables, then
//! validated before a client is built from it.

use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, MAINNET_URL, TESTNET_URL};
use crate::pagination::PaginationConfig;
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "BYBIT_API_KEY";
/// Environment variable holding the API secret
pub const ENV_API_SECRET: &str = "BYBIT_API_SECRET";
/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "BYBIT_BASE_URL";
/// Environment variable selecting testnet (`1`/`true`)
pub const ENV_TESTNET: &str = "BYBIT_TESTNET";
/// Environment variable overriding the receive window
pub const ENV_RECV_WINDOW: &str = "BYBIT_RECV_WINDOW";

/// Complete client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key; requests are unsigned when absent
    #[serde(default)]
    pub api_key: Option<String>,

    /// API secret
    #[serde(default)]
    pub api_secret: Option<String>,

    /// Explicit base URL, overrides `testnet`
    #[serde(default)]
    pub base_url: Option<String>,

    /// Use the testnet endpoint
    #[serde(default)]
    pub testnet: bool,

    /// Receive window for signed requests in milliseconds
    #[serde(default = "default_recv_window")]
    pub recv_window: u64,

    /// HTTP settings
    #[serde(default)]
    pub http: HttpSettings,

    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// HTTP transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Maximum number of retries
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Backoff strategy between retries
    #[serde(default)]
    pub backoff: BackoffType,

    /// Initial backoff in milliseconds
    #[serde(default = "default_initial_backoff")]
    pub initial_backoff_ms: u64,

    /// Maximum backoff in milliseconds
    #[serde(default = "default_max_backoff")]
    pub max_backoff_ms: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            backoff: BackoffType::default(),
            initial_backoff_ms: default_initial_backoff(),
            max_backoff_ms: default_max_backoff(),
        }
    }
}

fn default_recv_window() -> u64 {
    5000
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_backoff() -> u64 {
    100
}

fn default_max_backoff() -> u64 {
    60_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            base_url: None,
            testnet: false,
            recv_window: default_recv_window(),
            http: HttpSettings::default(),
            pagination: PaginationConfig::default(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("testnet", &self.testnet)
            .field("recv_window", &self.recv_window)
            .field("http", &self.http)
            .field("pagination", &self.pagination)
            .finish()
    }
}

impl ClientConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Read `BYBIT_*` environment variables over the defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self {
            api_key: lookup(ENV_API_KEY),
            api_secret: lookup(ENV_API_SECRET),
            base_url: lookup(ENV_BASE_URL),
            ..Self::default()
        };

        if let Some(testnet) = lookup(ENV_TESTNET) {
            config.testnet = matches!(testnet.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        if let Some(recv_window) = lookup(ENV_RECV_WINDOW) {
            config.recv_window = recv_window
                .parse()
                .map_err(|_| Error::invalid_value(ENV_RECV_WINDOW, "expected milliseconds"))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.effective_base_url())?;

        match (&self.api_key, &self.api_secret) {
            (Some(key), _) if key.is_empty() => {
                return Err(Error::invalid_value("api_key", "must not be empty"));
            }
            (_, Some(secret)) if secret.is_empty() => {
                return Err(Error::invalid_value("api_secret", "must not be empty"));
            }
            (Some(_), None) => return Err(Error::missing_field("api_secret")),
            (None, Some(_)) => return Err(Error::missing_field("api_key")),
            _ => {}
        }

        if self.recv_window == 0 {
            return Err(Error::invalid_value("recv_window", "must be positive"));
        }

        if self.pagination.max_pages == Some(0) {
            return Err(Error::invalid_value("pagination.max_pages", "must be positive"));
        }

        Ok(())
    }

    /// Base URL after applying the testnet switch
    pub fn effective_base_url(&self) -> String {
        match (&self.base_url, self.testnet) {
            (Some(url), _) => url.clone(),
            (None, true) => TESTNET_URL.to_string(),
            (None, false) => MAINNET_URL.to_string(),
        }
    }

    /// Key pair, when both halves are configured
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.api_key, &self.api_secret) {
            (Some(key), Some(secret)) => Some(Credentials::new(key, secret)),
            _ => None,
        }
    }

    /// Transport configuration
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .base_url(self.effective_base_url())
            .timeout(Duration::from_secs(self.http.timeout_seconds))
            .max_retries(self.http.max_retries)
            .backoff(
                self.http.backoff,
                Duration::from_millis(self.http.initial_backoff_ms),
                Duration::from_millis(self.http.max_backoff_ms),
            )
            .recv_window(self.recv_window)
            .build()
    }
}
