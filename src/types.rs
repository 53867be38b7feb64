//! Common types used throughout the crate
//!
//! Shared type aliases and the enumerations that appear as required
//! request fields on more than one endpoint.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Flat query parameter mapping sent with a GET request.
///
/// Ordered so the encoded query string, and therefore the request
/// signature, is deterministic.
pub type Params = BTreeMap<String, String>;

// ============================================================================
// Product Category
// ============================================================================

/// Product category of a Bybit v5 request
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Spot,
    Linear,
    Inverse,
    #[serde(rename = "option")]
    #[value(name = "option")]
    Options,
}

impl Category {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Spot => "spot",
            Category::Linear => "linear",
            Category::Inverse => "inverse",
            Category::Options => "option",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Account Type
// ============================================================================

/// Wallet account type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    Unified,
    Contract,
    Spot,
    Fund,
    #[serde(rename = "OPTION")]
    #[value(name = "option")]
    Options,
    Investment,
}

impl AccountType {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Unified => "UNIFIED",
            AccountType::Contract => "CONTRACT",
            AccountType::Spot => "SPOT",
            AccountType::Fund => "FUND",
            AccountType::Options => "OPTION",
            AccountType::Investment => "INVESTMENT",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for transport retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}
