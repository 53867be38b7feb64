//! Asset module
//!
//! Account asset queries. The three record endpoints are cursor-paginated
//! and drained completely by the [`Aggregator`](crate::pagination::Aggregator);
//! asset info and all-coins balance are single requests.

mod api;
mod types;

pub use api::{
    AssetApi, ALL_COINS_BALANCE_PATH, ASSET_INFO_PATH, COIN_EXCHANGE_RECORDS_PATH,
    DELIVERY_RECORDS_PATH, SETTLEMENT_RECORDS_PATH,
};
pub use types::*;
