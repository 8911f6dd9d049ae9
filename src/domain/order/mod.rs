//! Order domain — order history and outbound order requests.

pub mod client;
mod convert;
pub mod wire;

use crate::error::OrderValidationError;
use crate::shared::{OrderId, Side};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use client::Orders;

// ─── Product ─────────────────────────────────────────────────────────────────

/// Margin product an order is placed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Product {
    /// Cash and carry (delivery).
    #[default]
    Cnc,
    /// Intraday.
    Mis,
    /// Normal (F&O carry-forward).
    Nrml,
}

impl Product {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cnc => "CNC",
            Self::Mis => "MIS",
            Self::Nrml => "NRML",
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── OrderType ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    #[serde(rename = "MARKET")]
    Market,
    #[default]
    #[serde(rename = "LIMIT")]
    Limit,
    #[serde(rename = "SL")]
    StopLoss,
    #[serde(rename = "SL-M")]
    StopLossMarket,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::StopLoss => "SL",
            Self::StopLossMarket => "SL-M",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// Order status. Serializes as the broker's status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    Open,
    Complete,
    Cancelled,
    Rejected,
    TriggerPending,
    /// Any status string the SDK does not model, kept verbatim.
    Other(String),
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "OPEN" => Self::Open,
            "COMPLETE" => Self::Complete,
            "CANCELLED" => Self::Cancelled,
            "REJECTED" => Self::Rejected,
            "TRIGGER PENDING" => Self::TriggerPending,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "OPEN",
            Self::Complete => "COMPLETE",
            Self::Cancelled => "CANCELLED",
            Self::Rejected => "REJECTED",
            Self::TriggerPending => "TRIGGER PENDING",
            Self::Other(s) => s,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Cancelled | Self::Rejected)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// An order from the day's order book, as reported by the broker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub tradingsymbol: String,
    pub exchange: String,
    pub side: Side,
    pub quantity: u64,
    pub price: Decimal,
    pub status: OrderStatus,
    pub timestamp: Option<NaiveDateTime>,
}

// ─── OrderRequest ────────────────────────────────────────────────────────────

/// An order to submit. Checked by [`OrderRequest::validate`] before any I/O.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub tradingsymbol: String,
    pub exchange: String,
    pub side: Side,
    pub quantity: u64,
    pub price: Decimal,
    pub product: Product,
    pub order_type: OrderType,
}

impl OrderRequest {
    /// A delivery (`CNC`) limit order on NSE.
    pub fn new(tradingsymbol: impl Into<String>, side: Side, quantity: u64, price: Decimal) -> Self {
        Self {
            tradingsymbol: tradingsymbol.into(),
            exchange: "NSE".to_string(),
            side,
            quantity,
            price,
            product: Product::default(),
            order_type: OrderType::default(),
        }
    }

    pub fn buy(tradingsymbol: impl Into<String>, quantity: u64, price: Decimal) -> Self {
        Self::new(tradingsymbol, Side::Buy, quantity, price)
    }

    pub fn sell(tradingsymbol: impl Into<String>, quantity: u64, price: Decimal) -> Self {
        Self::new(tradingsymbol, Side::Sell, quantity, price)
    }

    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = exchange.into();
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.product = product;
        self
    }

    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    /// `quantity × price`, the amount shown on an order summary.
    pub fn estimated_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }

    pub fn validate(&self) -> Result<(), OrderValidationError> {
        if self.tradingsymbol.trim().is_empty() {
            return Err(OrderValidationError::EmptySymbol);
        }
        if self.exchange.trim().is_empty() {
            return Err(OrderValidationError::EmptyExchange);
        }
        if self.quantity == 0 {
            return Err(OrderValidationError::ZeroQuantity);
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(OrderValidationError::NegativePrice(self.price.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_uses_panel_defaults() {
        let req = OrderRequest::buy("TCS", 10, dec!(3300.00));
        assert_eq!(req.exchange, "NSE");
        assert_eq!(req.product, Product::Cnc);
        assert_eq!(req.order_type, OrderType::Limit);
        assert_eq!(req.side, Side::Buy);
    }

    #[test]
    fn test_validate_accepts_zero_price() {
        let req = OrderRequest::sell("INFY", 1, Decimal::ZERO).with_order_type(OrderType::Market);
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        assert_eq!(
            OrderRequest::buy("TCS", 0, dec!(1)).validate(),
            Err(OrderValidationError::ZeroQuantity)
        );
        assert_eq!(
            OrderRequest::buy("TCS", 1, dec!(-0.05)).validate(),
            Err(OrderValidationError::NegativePrice("-0.05".into()))
        );
        assert_eq!(
            OrderRequest::buy("  ", 1, dec!(1)).validate(),
            Err(OrderValidationError::EmptySymbol)
        );
        assert_eq!(
            OrderRequest::buy("TCS", 1, dec!(1)).with_exchange("").validate(),
            Err(OrderValidationError::EmptyExchange)
        );
    }

    #[test]
    fn test_estimated_value() {
        let req = OrderRequest::buy("TCS", 10, dec!(3300.00));
        assert_eq!(req.estimated_value(), dec!(33000));
    }

    #[test]
    fn test_order_status_serde_uses_broker_strings() {
        let json = serde_json::to_string(&OrderStatus::TriggerPending).unwrap();
        assert_eq!(json, "\"TRIGGER PENDING\"");
        let back: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OrderStatus::TriggerPending);

        let other = OrderStatus::Other("AMO REQ RECEIVED".into());
        let json = serde_json::to_string(&other).unwrap();
        assert_eq!(json, "\"AMO REQ RECEIVED\"");
        assert_eq!(serde_json::from_str::<OrderStatus>(&json).unwrap(), other);
        assert_eq!(
            serde_json::from_str::<OrderStatus>("\"complete\"").unwrap(),
            OrderStatus::Complete
        );
    }

    #[test]
    fn test_order_status_parsing() {
        assert_eq!(OrderStatus::from("COMPLETE"), OrderStatus::Complete);
        assert_eq!(OrderStatus::from("TRIGGER PENDING"), OrderStatus::TriggerPending);
        assert_eq!(
            OrderStatus::from("AMO REQ RECEIVED"),
            OrderStatus::Other("AMO REQ RECEIVED".into())
        );
        assert!(OrderStatus::Rejected.is_terminal());
        assert!(!OrderStatus::Open.is_terminal());
    }

    #[test]
    fn test_order_type_serde() {
        assert_eq!(serde_json::to_string(&OrderType::StopLossMarket).unwrap(), "\"SL-M\"");
        let p: Product = serde_json::from_str("\"MIS\"").unwrap();
        assert_eq!(p, Product::Mis);
    }
}
