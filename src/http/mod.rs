//! HTTP transport module
//!
//! Provides the `Transport` seam the accessors are written against and the
//! reqwest-backed `HttpClient` that implements it.
//!
//! # Features
//!
//! - **Request Signing**: Bybit v5 HMAC headers on every attempt
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Envelope Checks**: Non-zero `retCode` bodies become `Error::Api`

mod client;
mod transport;

pub use client::{
    encode_query, HttpClient, HttpClientConfig, HttpClientConfigBuilder, MAINNET_URL, TESTNET_URL,
};
pub use transport::Transport;

#[cfg(test)]
pub(crate) mod mock;

#[cfg(test)]
mod tests;
