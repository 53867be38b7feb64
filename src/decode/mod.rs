//! Response decoder module
//!
//! The transport hands back endpoint-agnostic JSON. Decoding specializes it
//! into an [`Envelope`] around the result type the caller names, so one
//! transport serves every endpoint.

mod decoders;
mod types;

pub use decoders::decode_envelope;
pub use types::{Envelope, Page};

#[cfg(test)]
mod tests;
