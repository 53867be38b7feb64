// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Bybit REST
//!
//! Typed async accessors for the Bybit v5 REST API, built around one
//! cursor-pagination aggregator shared by every paginated endpoint.
//!
//! ## Features
//!
//! - **Signed Requests**: HMAC-SHA256 `X-BAPI-*` headers on every attempt
//! - **Cursor Aggregation**: Walks `nextPageCursor` until the server reports
//!   the last page and returns one response holding every record
//! - **Typed Requests**: Builders that omit unset query fields
//! - **Retries**: Backoff on transport failures and 5xx/429 statuses
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bybit_rest::{BybitClient, ClientConfig, Category, GetDeliveryRecordRequest, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = BybitClient::from_config(&ClientConfig::from_env()?)?;
//!
//!     // Every page, concatenated in server order
//!     let response = client
//!         .asset()
//!         .get_delivery_records(GetDeliveryRecordRequest::new(Category::Options))
//!         .await?;
//!
//!     for record in &response.result.list {
//!         println!("{} {}", record.symbol, record.delivery_price);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        BybitClient                          │
//! │        asset() → AssetApi          trade() → TradeApi       │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────┬───────────┬──────┴────────┬───────────┬──────────┐
//! │  Query   │   Auth    │  Pagination   │  Decode   │   HTTP   │
//! ├──────────┼───────────┼───────────────┼───────────┼──────────┤
//! │ Builder  │ HMAC sign │ Aggregator    │ Envelope  │ Transport│
//! │ ToQuery  │ Headers   │ Page bound    │ Page      │ Retry    │
//! └──────────┴───────────┴───────────────┴───────────┴──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Query string construction
pub mod query;

/// Request signing
pub mod auth;

/// HTTP transport with retry and signing
pub mod http;

/// Response envelope decoding
pub mod decode;

/// Cursor pagination aggregator
pub mod pagination;

/// Asset endpoints
pub mod asset;

/// Trade endpoints
pub mod trade;

/// Client configuration
pub mod config;

/// Top-level client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use asset::*;
pub use client::BybitClient;
pub use config::ClientConfig;
pub use decode::{Envelope, Page};
pub use http::{HttpClient, HttpClientConfig, Transport};
pub use pagination::{Aggregator, PaginationConfig};
pub use trade::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
