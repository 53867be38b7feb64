//! CLI commands and argument parsing

use crate::trade::{OrderType, Side, TimeInForce};
use crate::types::{AccountType, Category};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bybit REST command-line client
#[derive(Parser, Debug)]
#[command(name = "bybit-rest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML); falls back to BYBIT_* environment variables
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Use the testnet endpoint
    #[arg(long, global = true)]
    pub testnet: bool,

    /// Fail instead of fetching more than this many pages
    #[arg(long, global = true)]
    pub max_pages: Option<u32>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// All coin exchange records
    ExchangeRecords {
        #[arg(long)]
        from_coin: Option<String>,

        #[arg(long)]
        to_coin: Option<String>,

        /// Page size
        #[arg(long)]
        limit: Option<u32>,
    },

    /// All USDC futures and options delivery records
    DeliveryRecords {
        #[arg(long, value_enum)]
        category: Category,

        #[arg(long)]
        symbol: Option<String>,

        /// Start of the window, epoch milliseconds
        #[arg(long, requires = "end_time")]
        start_time: Option<i64>,

        /// End of the window, epoch milliseconds
        #[arg(long, requires = "start_time")]
        end_time: Option<i64>,

        /// Expiry date, e.g. 25MAR22
        #[arg(long)]
        exp_date: Option<String>,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// All USDC perpetual session settlement records
    SettlementRecords {
        #[arg(long, value_enum)]
        category: Category,

        #[arg(long)]
        symbol: Option<String>,

        #[arg(long, requires = "end_time")]
        start_time: Option<i64>,

        #[arg(long, requires = "start_time")]
        end_time: Option<i64>,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// Spot asset information
    AssetInfo {
        #[arg(long, value_enum, default_value = "spot")]
        account_type: AccountType,

        #[arg(long)]
        coin: Option<String>,
    },

    /// Balances of every coin in one account
    Balance {
        #[arg(long, value_enum)]
        account_type: AccountType,

        #[arg(long)]
        member_id: Option<String>,

        /// Comma-separated coin list
        #[arg(long)]
        coin: Option<String>,

        #[arg(long)]
        with_bonus: bool,
    },

    /// Place one order
    PlaceOrder {
        #[arg(long, value_enum)]
        category: Category,

        #[arg(long)]
        symbol: String,

        #[arg(long, value_enum)]
        side: Side,

        #[arg(long, value_enum, default_value = "market")]
        order_type: OrderType,

        #[arg(long)]
        qty: String,

        /// Required for limit orders
        #[arg(long)]
        price: Option<String>,

        #[arg(long, value_enum)]
        time_in_force: Option<TimeInForce>,

        #[arg(long)]
        order_link_id: Option<String>,

        #[arg(long)]
        reduce_only: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delivery_records() {
        let cli = Cli::try_parse_from([
            "bybit-rest",
            "--testnet",
            "--max-pages",
            "10",
            "delivery-records",
            "--category",
            "option",
            "--start-time",
            "1700000000000",
            "--end-time",
            "1700086400000",
        ])
        .unwrap();

        assert!(cli.testnet);
        assert_eq!(cli.max_pages, Some(10));
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::DeliveryRecords {
                category,
                start_time,
                ..
            } => {
                assert_eq!(category, Category::Options);
                assert_eq!(start_time, Some(1_700_000_000_000));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_time_window_needs_both_ends() {
        let result = Cli::try_parse_from([
            "bybit-rest",
            "settlement-records",
            "--category",
            "linear",
            "--start-time",
            "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_place_order() {
        let cli = Cli::try_parse_from([
            "bybit-rest",
            "--format",
            "pretty",
            "place-order",
            "--category",
            "spot",
            "--symbol",
            "BTCUSDT",
            "--side",
            "buy",
            "--order-type",
            "limit",
            "--qty",
            "0.01",
            "--price",
            "30000",
            "--time-in-force",
            "post-only",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Pretty);
        match cli.command {
            Commands::PlaceOrder {
                side,
                order_type,
                time_in_force,
                ..
            } => {
                assert_eq!(side, Side::Buy);
                assert_eq!(order_type, OrderType::Limit);
                assert_eq!(time_in_force, Some(TimeInForce::PostOnly));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_balance_account_type() {
        let cli = Cli::try_parse_from([
            "bybit-rest",
            "balance",
            "--account-type",
            "fund",
            "--with-bonus",
        ])
        .unwrap();

        match cli.command {
            Commands::Balance {
                account_type,
                with_bonus,
                ..
            } => {
                assert_eq!(account_type, AccountType::Fund);
                assert!(with_bonus);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
