//! Asset request and response shapes

use crate::decode::{Envelope, Page};
use crate::query::{CursorRequest, QueryBuilder, ToQuery};
use crate::types::{AccountType, Category, Params};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Coin Exchange Records
// ============================================================================

/// Query for `/v5/asset/exchange/order-record`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCoinExchangeRecordsRequest {
    pub from_coin: Option<String>,
    pub to_coin: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl GetCoinExchangeRecordsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_coin(mut self, coin: impl Into<String>) -> Self {
        self.from_coin = Some(coin.into());
        self
    }

    #[must_use]
    pub fn to_coin(mut self, coin: impl Into<String>) -> Self {
        self.to_coin = Some(coin.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl ToQuery for GetCoinExchangeRecordsRequest {
    fn to_query(&self) -> Params {
        QueryBuilder::new()
            .optional("fromCoin", self.from_coin.as_deref())
            .optional("toCoin", self.to_coin.as_deref())
            .optional("limit", self.limit)
            .optional("cursor", self.cursor.as_deref())
            .build()
    }
}

impl CursorRequest for GetCoinExchangeRecordsRequest {
    fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }
}

/// One coin conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinExchangeRecord {
    pub from_coin: String,
    pub from_amount: String,
    pub to_coin: String,
    pub to_amount: String,
    pub exchange_rate: String,
    pub created_time: String,
    pub exchange_tx_id: String,
}

/// Result of one coin exchange page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinExchangeRecordsResult {
    pub order_body: Vec<CoinExchangeRecord>,
    pub next_page_cursor: String,
}

impl Page for CoinExchangeRecordsResult {
    type Record = CoinExchangeRecord;

    fn take_records(&mut self) -> Vec<Self::Record> {
        std::mem::take(&mut self.order_body)
    }

    fn next_cursor(&self) -> &str {
        &self.next_page_cursor
    }

    fn finish(&mut self, records: Vec<Self::Record>) {
        self.order_body = records;
        self.next_page_cursor.clear();
    }
}

pub type GetCoinExchangeRecordsResponse = Envelope<CoinExchangeRecordsResult>;

// ============================================================================
// Delivery Records
// ============================================================================

/// Query for `/v5/asset/delivery-record`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDeliveryRecordRequest {
    pub category: Category,
    pub symbol: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Expiry date, e.g. `25MAR22`
    pub exp_date: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl GetDeliveryRecordRequest {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            symbol: None,
            start_time: None,
            end_time: None,
            exp_date: None,
            limit: None,
            cursor: None,
        }
    }

    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    #[must_use]
    pub fn time_range(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    #[must_use]
    pub fn exp_date(mut self, exp_date: impl Into<String>) -> Self {
        self.exp_date = Some(exp_date.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl ToQuery for GetDeliveryRecordRequest {
    fn to_query(&self) -> Params {
        QueryBuilder::new()
            .required("category", self.category)
            .optional("symbol", self.symbol.as_deref())
            .optional("startTime", self.start_time)
            .optional("endTime", self.end_time)
            .optional("expDate", self.exp_date.as_deref())
            .optional("limit", self.limit)
            .optional("cursor", self.cursor.as_deref())
            .build()
    }
}

impl CursorRequest for GetDeliveryRecordRequest {
    fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }
}

/// One delivery of an expired futures or options position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRecord {
    /// Delivery time in milliseconds
    pub delivery_time: i64,
    pub symbol: String,
    pub side: String,
    pub position: String,
    pub delivery_price: String,
    pub strike: String,
    pub fee: String,
    pub delivery_rpl: String,
}

/// Result of one delivery record page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRecordsResult {
    pub category: String,
    pub list: Vec<DeliveryRecord>,
    pub next_page_cursor: String,
}

impl Page for DeliveryRecordsResult {
    type Record = DeliveryRecord;

    fn take_records(&mut self) -> Vec<Self::Record> {
        std::mem::take(&mut self.list)
    }

    fn next_cursor(&self) -> &str {
        &self.next_page_cursor
    }

    fn finish(&mut self, records: Vec<Self::Record>) {
        self.list = records;
        self.next_page_cursor.clear();
    }
}

pub type GetDeliveryRecordResponse = Envelope<DeliveryRecordsResult>;

// ============================================================================
// Session Settlement Records
// ============================================================================

/// Query for `/v5/asset/settlement-record`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSessionSettlementRecordRequest {
    pub category: Category,
    pub symbol: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl GetSessionSettlementRecordRequest {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            symbol: None,
            start_time: None,
            end_time: None,
            limit: None,
            cursor: None,
        }
    }

    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    #[must_use]
    pub fn time_range(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl ToQuery for GetSessionSettlementRecordRequest {
    fn to_query(&self) -> Params {
        QueryBuilder::new()
            .required("category", self.category)
            .optional("symbol", self.symbol.as_deref())
            .optional("startTime", self.start_time)
            .optional("endTime", self.end_time)
            .optional("limit", self.limit)
            .optional("cursor", self.cursor.as_deref())
            .build()
    }
}

impl CursorRequest for GetSessionSettlementRecordRequest {
    fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }
}

/// Realised PnL of one USDC perpetual/futures settlement session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSettlementRecord {
    pub symbol: String,
    pub side: String,
    pub size: String,
    pub session_avg_price: String,
    pub mark_price: String,
    pub realised_pnl: String,
    pub created_time: String,
}

/// Result of one settlement record page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSettlementRecordsResult {
    pub category: String,
    pub list: Vec<SessionSettlementRecord>,
    pub next_page_cursor: String,
}

impl Page for SessionSettlementRecordsResult {
    type Record = SessionSettlementRecord;

    fn take_records(&mut self) -> Vec<Self::Record> {
        std::mem::take(&mut self.list)
    }

    fn next_cursor(&self) -> &str {
        &self.next_page_cursor
    }

    fn finish(&mut self, records: Vec<Self::Record>) {
        self.list = records;
        self.next_page_cursor.clear();
    }
}

pub type GetSessionSettlementRecordResponse = Envelope<SessionSettlementRecordsResult>;

// ============================================================================
// Asset Info
// ============================================================================

/// Query for `/v5/asset/transfer/query-asset-info`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAssetInfoRequest {
    pub account_type: AccountType,
    pub coin: Option<String>,
}

impl GetAssetInfoRequest {
    pub fn new(account_type: AccountType) -> Self {
        Self {
            account_type,
            coin: None,
        }
    }

    #[must_use]
    pub fn coin(mut self, coin: impl Into<String>) -> Self {
        self.coin = Some(coin.into());
        self
    }
}

impl ToQuery for GetAssetInfoRequest {
    fn to_query(&self) -> Params {
        QueryBuilder::new()
            .required("accountType", self.account_type)
            .optional("coin", self.coin.as_deref())
            .build()
    }
}

/// Holding of one coin in the spot account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotAsset {
    pub coin: String,
    pub frozen: String,
    pub free: String,
    pub withdraw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotAssetInfo {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub assets: Vec<SpotAsset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfoResult {
    pub spot: SpotAssetInfo,
}

pub type GetAssetInfoResponse = Envelope<AssetInfoResult>;

// ============================================================================
// All Coins Balance
// ============================================================================

/// Query for `/v5/asset/transfer/query-account-coins-balance`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAllCoinsBalanceRequest {
    /// Sub-account UID, queried with a master key
    pub member_id: Option<String>,
    pub account_type: AccountType,
    /// Comma-separated coin list
    pub coin: Option<String>,
    /// Include bonus in the balance
    pub with_bonus: Option<bool>,
}

impl GetAllCoinsBalanceRequest {
    pub fn new(account_type: AccountType) -> Self {
        Self {
            member_id: None,
            account_type,
            coin: None,
            with_bonus: None,
        }
    }

    #[must_use]
    pub fn member_id(mut self, member_id: impl Into<String>) -> Self {
        self.member_id = Some(member_id.into());
        self
    }

    #[must_use]
    pub fn coin(mut self, coin: impl Into<String>) -> Self {
        self.coin = Some(coin.into());
        self
    }

    #[must_use]
    pub fn with_bonus(mut self, with_bonus: bool) -> Self {
        self.with_bonus = Some(with_bonus);
        self
    }
}

impl ToQuery for GetAllCoinsBalanceRequest {
    fn to_query(&self) -> Params {
        QueryBuilder::new()
            .optional("memberId", self.member_id.as_deref())
            .required("accountType", self.account_type)
            .optional("coin", self.coin.as_deref())
            .optional("withBonus", self.with_bonus.map(u8::from))
            .build()
    }
}

/// Balance of one coin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinBalance {
    pub coin: String,
    pub wallet_balance: String,
    pub transfer_balance: String,
    #[serde(default)]
    pub bonus: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllCoinsBalanceResult {
    pub account_type: String,
    #[serde(default)]
    pub biz_type: Option<i64>,
    #[serde(default)]
    pub member_id: String,
    pub balance: Vec<CoinBalance>,
}

pub type GetAllCoinsBalanceResponse = Envelope<AllCoinsBalanceResult>;
