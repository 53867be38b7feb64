//! HMAC-SHA256 request signer

use crate::error::{Error, Result};
use hmac::{Hmac, Mac};
use reqwest::RequestBuilder;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the API key
pub const HEADER_API_KEY: &str = "X-BAPI-API-KEY";
/// Header carrying the request timestamp in milliseconds
pub const HEADER_TIMESTAMP: &str = "X-BAPI-TIMESTAMP";
/// Header carrying the hex signature
pub const HEADER_SIGN: &str = "X-BAPI-SIGN";
/// Header carrying the receive window in milliseconds
pub const HEADER_RECV_WINDOW: &str = "X-BAPI-RECV-WINDOW";

/// API key pair
#[derive(Clone)]
pub struct Credentials {
    /// Public API key
    pub api_key: String,
    /// API secret used as the HMAC key
    pub api_secret: String,
}

impl Credentials {
    /// Create a key pair
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Headers attached to one signed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub api_key: String,
    pub timestamp: i64,
    pub recv_window: u64,
    pub signature: String,
}

impl SignedHeaders {
    /// Attach the headers to a request
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(HEADER_API_KEY, &self.api_key)
            .header(HEADER_TIMESTAMP, self.timestamp.to_string())
            .header(HEADER_RECV_WINDOW, self.recv_window.to_string())
            .header(HEADER_SIGN, &self.signature)
    }
}

/// Signs request payloads for one key pair
#[derive(Debug, Clone)]
pub struct Signer {
    credentials: Credentials,
    recv_window: u64,
}

impl Signer {
    /// Create a signer with the given receive window (ms)
    pub fn new(credentials: Credentials, recv_window: u64) -> Self {
        Self {
            credentials,
            recv_window,
        }
    }

    /// Receive window in milliseconds
    pub fn recv_window(&self) -> u64 {
        self.recv_window
    }

    /// Compute the hex signature for a payload at a given timestamp
    pub fn sign(&self, timestamp: i64, payload: &str) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(self.credentials.api_secret.as_bytes())
            .map_err(|e| Error::auth(format!("invalid API secret: {e}")))?;
        mac.update(timestamp.to_string().as_bytes());
        mac.update(self.credentials.api_key.as_bytes());
        mac.update(self.recv_window.to_string().as_bytes());
        mac.update(payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Sign a payload at a given timestamp
    pub fn headers_at(&self, timestamp: i64, payload: &str) -> Result<SignedHeaders> {
        Ok(SignedHeaders {
            api_key: self.credentials.api_key.clone(),
            timestamp,
            recv_window: self.recv_window,
            signature: self.sign(timestamp, payload)?,
        })
    }

    /// Sign a payload with the current clock
    pub fn headers(&self, payload: &str) -> Result<SignedHeaders> {
        self.headers_at(chrono::Utc::now().timestamp_millis(), payload)
    }
}
