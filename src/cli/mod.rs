//! CLI module
//!
//! Command-line interface over the REST client.
//!
//! # Commands
//!
//! - `exchange-records` - All coin exchange records
//! - `delivery-records` - All delivery records
//! - `settlement-records` - All session settlement records
//! - `asset-info` - Spot asset information
//! - `balance` - Every coin balance of one account
//! - `place-order` - Submit one order

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
