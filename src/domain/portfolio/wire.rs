//! Wire types for portfolio and holdings responses (REST).

use rust_decimal::Decimal;
use serde::Deserialize;

/// `data` payload of `GET /portfolio/holdings` (one element).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HoldingResponse {
    pub tradingsymbol: String,
    pub exchange: String,
    #[serde(default)]
    pub isin: Option<String>,
    pub quantity: u64,
    pub average_price: Decimal,
    pub last_price: Decimal,
    #[serde(default)]
    pub pnl: Decimal,
    #[serde(default)]
    pub day_change: Decimal,
    #[serde(default)]
    pub day_change_percentage: Decimal,
}

/// `data` payload of `GET /portfolio/positions`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PortfolioResponse {
    pub net: Decimal,
    #[serde(default)]
    pub day_pnl: Decimal,
    #[serde(default)]
    pub day_pnl_percentage: Decimal,
    #[serde(default)]
    pub holdings: Vec<HoldingResponse>,
}
