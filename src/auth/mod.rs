//! Authentication module
//!
//! Bybit v5 signs each private request with HMAC-SHA256 over
//! `timestamp + api_key + recv_window + payload`, where the payload is the
//! query string of a GET or the JSON body of a POST. The signature and its
//! inputs travel in `X-BAPI-*` headers.

mod signer;

pub use signer::{Credentials, SignedHeaders, Signer};
