//! Asset endpoint accessors

use super::types::{
    AllCoinsBalanceResult, AssetInfoResult, CoinExchangeRecordsResult, DeliveryRecordsResult,
    GetAllCoinsBalanceRequest, GetAllCoinsBalanceResponse, GetAssetInfoRequest,
    GetAssetInfoResponse, GetCoinExchangeRecordsRequest, GetCoinExchangeRecordsResponse,
    GetDeliveryRecordRequest, GetDeliveryRecordResponse, GetSessionSettlementRecordRequest,
    GetSessionSettlementRecordResponse, SessionSettlementRecordsResult,
};
use crate::decode::{decode_envelope, Envelope};
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::pagination::{Aggregator, PaginationConfig};
use crate::query::ToQuery;
use serde::de::DeserializeOwned;
use tracing::debug;

pub const COIN_EXCHANGE_RECORDS_PATH: &str = "/v5/asset/exchange/order-record";
pub const DELIVERY_RECORDS_PATH: &str = "/v5/asset/delivery-record";
pub const SETTLEMENT_RECORDS_PATH: &str = "/v5/asset/settlement-record";
pub const ASSET_INFO_PATH: &str = "/v5/asset/transfer/query-asset-info";
pub const ALL_COINS_BALANCE_PATH: &str = "/v5/asset/transfer/query-account-coins-balance";

/// Accessor for the asset endpoints
pub struct AssetApi<T> {
    transport: T,
    pagination: PaginationConfig,
}

impl<T: Transport> AssetApi<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            pagination: PaginationConfig::default(),
        }
    }

    /// Set the pagination configuration used by the record endpoints
    #[must_use]
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    fn aggregator(&self) -> Aggregator<'_, T> {
        Aggregator::new(&self.transport).with_config(self.pagination.clone())
    }

    /// All coin exchange records, across every page
    pub async fn get_coin_exchange_records(
        &self,
        req: GetCoinExchangeRecordsRequest,
    ) -> Result<GetCoinExchangeRecordsResponse> {
        self.aggregator()
            .aggregate::<_, CoinExchangeRecordsResult>(COIN_EXCHANGE_RECORDS_PATH, req)
            .await
    }

    /// All delivery records of USDC futures and options, across every page
    pub async fn get_delivery_records(
        &self,
        req: GetDeliveryRecordRequest,
    ) -> Result<GetDeliveryRecordResponse> {
        self.aggregator()
            .aggregate::<_, DeliveryRecordsResult>(DELIVERY_RECORDS_PATH, req)
            .await
    }

    /// All session settlement records of USDC perpetual and futures, across every page
    pub async fn get_session_settlement_records(
        &self,
        req: GetSessionSettlementRecordRequest,
    ) -> Result<GetSessionSettlementRecordResponse> {
        self.aggregator()
            .aggregate::<_, SessionSettlementRecordsResult>(SETTLEMENT_RECORDS_PATH, req)
            .await
    }

    /// Asset information of the spot account
    pub async fn get_asset_info(&self, req: GetAssetInfoRequest) -> Result<GetAssetInfoResponse> {
        self.fetch_one::<AssetInfoResult>(ASSET_INFO_PATH, &req)
            .await
    }

    /// Balances of all coins for one account type
    pub async fn get_all_coins_balance(
        &self,
        req: GetAllCoinsBalanceRequest,
    ) -> Result<GetAllCoinsBalanceResponse> {
        self.fetch_one::<AllCoinsBalanceResult>(ALL_COINS_BALANCE_PATH, &req)
            .await
    }

    async fn fetch_one<R: DeserializeOwned>(
        &self,
        path: &str,
        req: &(impl ToQuery + Sync),
    ) -> Result<Envelope<R>> {
        let params = req.to_query();
        debug!(path, "fetching");
        let value = self
            .transport
            .get(path, &params)
            .await
            .map_err(|e| Error::fetch(path, e))?;
        decode_envelope(&value).map_err(|e| Error::decode(path, e))
    }
}
