//! Trade module
//!
//! Order placement. The request is sent as a JSON body; unset optional
//! fields are left out of the body entirely.

mod api;
mod types;

pub use api::{TradeApi, PLACE_ORDER_PATH};
pub use types::{
    OrderAck, OrderType, PlaceOrderRequest, PlaceOrderResponse, Side, TimeInForce,
};
