//! CLI runner - executes commands

use crate::asset::{
    GetAllCoinsBalanceRequest, GetAssetInfoRequest, GetCoinExchangeRecordsRequest,
    GetDeliveryRecordRequest, GetSessionSettlementRecordRequest,
};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::BybitClient;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::pagination::PaginationConfig;
use crate::trade::{OrderType, PlaceOrderRequest};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = BybitClient::from_config(&self.load_config()?)?;
        let started = Instant::now();

        match &self.cli.command {
            Commands::ExchangeRecords {
                from_coin,
                to_coin,
                limit,
            } => {
                let mut req = GetCoinExchangeRecordsRequest::new();
                if let Some(coin) = from_coin {
                    req = req.from_coin(coin);
                }
                if let Some(coin) = to_coin {
                    req = req.to_coin(coin);
                }
                if let Some(limit) = limit {
                    req = req.limit(*limit);
                }
                let response = client.asset().get_coin_exchange_records(req).await?;
                self.log_records("exchange records", response.result.order_body.len(), started);
                self.output(&response)
            }

            Commands::DeliveryRecords {
                category,
                symbol,
                start_time,
                end_time,
                exp_date,
                limit,
            } => {
                let mut req = GetDeliveryRecordRequest::new(*category);
                if let Some(symbol) = symbol {
                    req = req.symbol(symbol);
                }
                if let Some((start, end)) = time_window(*start_time, *end_time)? {
                    req = req.time_range(start, end);
                }
                if let Some(exp_date) = exp_date {
                    req = req.exp_date(exp_date);
                }
                if let Some(limit) = limit {
                    req = req.limit(*limit);
                }
                let response = client.asset().get_delivery_records(req).await?;
                self.log_records("delivery records", response.result.list.len(), started);
                self.output(&response)
            }

            Commands::SettlementRecords {
                category,
                symbol,
                start_time,
                end_time,
                limit,
            } => {
                let mut req = GetSessionSettlementRecordRequest::new(*category);
                if let Some(symbol) = symbol {
                    req = req.symbol(symbol);
                }
                if let Some((start, end)) = time_window(*start_time, *end_time)? {
                    req = req.time_range(start, end);
                }
                if let Some(limit) = limit {
                    req = req.limit(*limit);
                }
                let response = client.asset().get_session_settlement_records(req).await?;
                self.log_records("settlement records", response.result.list.len(), started);
                self.output(&response)
            }

            Commands::AssetInfo { account_type, coin } => {
                let mut req = GetAssetInfoRequest::new(*account_type);
                if let Some(coin) = coin {
                    req = req.coin(coin);
                }
                let response = client.asset().get_asset_info(req).await?;
                self.output(&response)
            }

            Commands::Balance {
                account_type,
                member_id,
                coin,
                with_bonus,
            } => {
                let mut req = GetAllCoinsBalanceRequest::new(*account_type);
                if let Some(member_id) = member_id {
                    req = req.member_id(member_id);
                }
                if let Some(coin) = coin {
                    req = req.coin(coin);
                }
                if *with_bonus {
                    req = req.with_bonus(true);
                }
                let response = client.asset().get_all_coins_balance(req).await?;
                self.output(&response)
            }

            Commands::PlaceOrder {
                category,
                symbol,
                side,
                order_type,
                qty,
                price,
                time_in_force,
                order_link_id,
                reduce_only,
            } => {
                let mut req = match (order_type, price) {
                    (OrderType::Market, _) => {
                        PlaceOrderRequest::market(*category, symbol, *side, qty)
                    }
                    (OrderType::Limit, Some(price)) => {
                        PlaceOrderRequest::limit(*category, symbol, *side, qty, price)
                    }
                    (OrderType::Limit, None) => {
                        return Err(Error::invalid_value("price", "required for limit orders"));
                    }
                };
                if let Some(tif) = time_in_force {
                    req = req.time_in_force(*tif);
                }
                if let Some(id) = order_link_id {
                    req = req.order_link_id(id);
                }
                if *reduce_only {
                    req = req.reduce_only(true);
                }
                let response = client.trade().place_order(&req).await?;
                self.output(&response)
            }
        }
    }

    /// File config when given, environment otherwise, then CLI overrides
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::from_env()?,
        };

        if self.cli.testnet {
            config.testnet = true;
        }
        if let Some(max_pages) = self.cli.max_pages {
            config.pagination = PaginationConfig::bounded(max_pages);
        }

        config.validate()?;
        debug!(?config, "loaded configuration");
        Ok(config)
    }

    fn log_records(&self, what: &str, count: usize, started: Instant) {
        let elapsed_ms = started.elapsed().as_millis() as u64;
        if self.cli.verbose {
            info!(count, elapsed_ms, "fetched {what}");
        } else {
            debug!(count, elapsed_ms, "fetched {what}");
        }
    }

    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{rendered}");
        Ok(())
    }
}

/// Convert an optional epoch-millisecond window into timestamps
fn time_window(
    start: Option<i64>,
    end: Option<i64>,
) -> Result<Option<(DateTime<Utc>, DateTime<Utc>)>> {
    let (Some(start), Some(end)) = (start, end) else {
        return Ok(None);
    };
    let start = millis("start_time", start)?;
    let end = millis("end_time", end)?;
    if end < start {
        return Err(Error::invalid_value("end_time", "must not precede start_time"));
    }
    Ok(Some((start, end)))
}

fn millis(field: &str, value: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(value)
        .ok_or_else(|| Error::invalid_value(field, "not a valid epoch-millisecond timestamp"))
}
