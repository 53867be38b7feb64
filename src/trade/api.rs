//! Trade endpoint accessors

use super::types::{OrderAck, PlaceOrderRequest, PlaceOrderResponse};
use crate::decode::decode_envelope;
use crate::error::{Error, Result};
use crate::http::Transport;
use tracing::info;

pub const PLACE_ORDER_PATH: &str = "/v5/order/create";

/// Accessor for the trade endpoints
pub struct TradeApi<T> {
    transport: T,
}

impl<T: Transport> TradeApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Submit one order
    pub async fn place_order(&self, req: &PlaceOrderRequest) -> Result<PlaceOrderResponse> {
        let body = serde_json::to_value(req)?;
        let value = self
            .transport
            .post(PLACE_ORDER_PATH, &body)
            .await
            .map_err(|e| Error::fetch(PLACE_ORDER_PATH, e))?;
        let response = decode_envelope::<OrderAck>(&value)
            .map_err(|e| Error::decode(PLACE_ORDER_PATH, e))?;
        info!(
            symbol = %req.symbol,
            order_id = %response.result.order_id,
            "order placed"
        );
        Ok(response)
    }
}
