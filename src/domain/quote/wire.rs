//! Wire types for quote responses (REST).

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// `data` payload of `GET /quote/ltp`: instrument key → quote.
pub type QuotesResponse = HashMap<String, QuoteResponse>;

/// One quote. Only `last_price` is guaranteed; the rest depends on the
/// endpoint tier, and OHLC may arrive flat or nested under `ohlc`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QuoteResponse {
    #[serde(default)]
    pub tradingsymbol: Option<String>,
    #[serde(default)]
    pub instrument_token: Option<u64>,
    pub last_price: Decimal,
    #[serde(default, alias = "net_change")]
    pub change: Option<Decimal>,
    #[serde(default)]
    pub change_percentage: Option<Decimal>,
    #[serde(default)]
    pub high: Option<Decimal>,
    #[serde(default)]
    pub low: Option<Decimal>,
    #[serde(default)]
    pub open: Option<Decimal>,
    #[serde(default)]
    pub close: Option<Decimal>,
    #[serde(default)]
    pub ohlc: Option<Ohlc>,
    #[serde(default)]
    pub volume: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Ohlc {
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}
