//! HTTP client with request signing and retry
//!
//! Provides the reqwest-backed transport that handles:
//! - Bybit v5 request signing (re-signed on every attempt)
//! - Automatic retries with configurable backoff
//! - Envelope inspection: a non-zero `retCode` is surfaced as an error

use crate::auth::{Credentials, Signer};
use crate::error::{is_retryable_status, Error, Result};
use crate::types::{BackoffType, Params};
use reqwest::{Client, Method};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Bybit mainnet REST endpoint
pub const MAINNET_URL: &str = "https://api.bybit.com";

/// Bybit testnet REST endpoint
pub const TESTNET_URL: &str = "https://api-testnet.bybit.com";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries
    pub max_retries: u32,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff
    pub max_backoff: Duration,
    /// Type of backoff strategy
    pub backoff_type: BackoffType,
    /// Receive window sent with signed requests (ms)
    pub recv_window: u64,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: MAINNET_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(60),
            backoff_type: BackoffType::Exponential,
            recv_window: 5000,
            default_headers: HashMap::new(),
            user_agent: format!("bybit-rest/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Point the client at testnet
    pub fn testnet(mut self) -> Self {
        self.config.base_url = TESTNET_URL.to_string();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set backoff configuration
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.config.backoff_type = backoff_type;
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Set the receive window for signed requests
    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.config.recv_window = recv_window;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client for the Bybit v5 REST API
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    signer: Option<Signer>,
}

impl HttpClient {
    /// Create an unauthenticated client
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            config,
            signer: None,
        })
    }

    /// Create a client that signs every request
    pub fn with_credentials(config: HttpClientConfig, credentials: Credentials) -> Result<Self> {
        let recv_window = config.recv_window;
        let mut client = Self::with_config(config)?;
        client.signer = Some(Signer::new(credentials, recv_window));
        Ok(client)
    }

    /// Client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Whether requests are signed
    pub fn is_authenticated(&self) -> bool {
        self.signer.is_some()
    }

    /// Signed GET returning the decoded body
    pub async fn get_json(&self, path: &str, params: &Params) -> Result<Value> {
        let query = encode_query(params);
        self.execute(Method::GET, path, &query, None).await
    }

    /// Signed POST of a JSON body returning the decoded body
    pub async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let body = serde_json::to_string(body)?;
        self.execute(Method::POST, path, "", Some(body)).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &str,
        body: Option<String>,
    ) -> Result<Value> {
        let full_url = self.build_url(path, query);
        let max_retries = self.config.max_retries;
        let timeout = self.config.timeout;
        // GET signs the query string, POST signs the raw body
        let payload = body.as_deref().unwrap_or(query);

        let mut last_error = None;
        let mut attempt = 0;

        while attempt <= max_retries {
            let mut req = self.client.request(method.clone(), &full_url);

            for (key, value) in &self.config.default_headers {
                req = req.header(key.as_str(), value.as_str());
            }

            if let Some(ref signer) = self.signer {
                req = signer.headers(payload)?.apply(req);
            }

            if let Some(ref body) = body {
                req = req
                    .header("Content-Type", "application/json")
                    .body(body.clone());
            }

            match req.send().await {
                Ok(response) => {
                    let status = response.status();

                    if is_retryable_status(status.as_u16()) && attempt < max_retries {
                        let delay = self.calculate_backoff(attempt);
                        warn!(
                            "Request failed with {}, attempt {}/{}, retrying in {:?}",
                            status.as_u16(),
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        last_error = Some(Error::http_status(status.as_u16(), ""));
                        continue;
                    }

                    if !status.is_success() {
                        let body = response.text().await.unwrap_or_default();
                        return Err(Error::http_status(status.as_u16(), body));
                    }

                    debug!("{} {} -> {}", method, path, status);
                    let value: Value = response.json().await?;
                    return check_ret_code(value);
                }
                Err(e) => {
                    if e.is_timeout() {
                        if attempt < max_retries {
                            let delay = self.calculate_backoff(attempt);
                            warn!(
                                "Request timeout, attempt {}/{}, retrying in {:?}",
                                attempt + 1,
                                max_retries + 1,
                                delay
                            );
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                            last_error = Some(Error::Timeout {
                                timeout_ms: timeout.as_millis() as u64,
                            });
                            continue;
                        }
                        return Err(Error::Timeout {
                            timeout_ms: timeout.as_millis() as u64,
                        });
                    }

                    if e.is_connect() && attempt < max_retries {
                        let delay = self.calculate_backoff(attempt);
                        warn!(
                            "Connection error, attempt {}/{}, retrying in {:?}",
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        last_error = Some(Error::Http(e));
                        continue;
                    }

                    return Err(Error::Http(e));
                }
            }
        }

        Err(last_error.unwrap_or(Error::MaxRetriesExceeded { max_retries }))
    }

    /// Build full URL from path and encoded query
    fn build_url(&self, path: &str, query: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if query.is_empty() {
            format!("{base}/{path}")
        } else {
            format!("{base}/{path}?{query}")
        }
    }

    /// Calculate backoff delay for a given attempt
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let delay = match self.config.backoff_type {
            BackoffType::Constant => self.config.initial_backoff,
            BackoffType::Linear => self.config.initial_backoff * (attempt + 1),
            BackoffType::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                self.config.initial_backoff * factor
            }
        };

        std::cmp::min(delay, self.config.max_backoff)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("authenticated", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

/// Encode parameters as an `application/x-www-form-urlencoded` query string
pub fn encode_query(params: &Params) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish()
}

/// Reject envelopes whose `retCode` is present and non-zero
fn check_ret_code(value: Value) -> Result<Value> {
    match value.get("retCode").and_then(Value::as_i64) {
        Some(0) | None => Ok(value),
        Some(code) => {
            let msg = value
                .get("retMsg")
                .and_then(Value::as_str)
                .unwrap_or_default();
            Err(Error::api(code, msg))
        }
    }
}
