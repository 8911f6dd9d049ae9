//! Wire types for order history and order placement (REST).

use crate::shared::{serde_util, OrderId, Side};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One element of the `GET /orders` payload.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OrderResponse {
    pub order_id: OrderId,
    pub tradingsymbol: String,
    pub exchange: String,
    pub transaction_type: Side,
    pub quantity: u64,
    #[serde(default)]
    pub price: Decimal,
    pub status: String,
    #[serde(
        default,
        alias = "order_timestamp",
        deserialize_with = "serde_util::broker_timestamp::deserialize"
    )]
    pub timestamp: Option<NaiveDateTime>,
}

/// Form body for `POST /orders/regular`. Every value is decimal text.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlaceOrderForm {
    pub tradingsymbol: String,
    pub exchange: String,
    pub transaction_type: &'static str,
    pub quantity: String,
    pub price: String,
    pub product: &'static str,
    pub order_type: &'static str,
}

/// `data` payload of `POST /orders/regular`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlaceOrderResponse {
    pub order_id: OrderId,
}
