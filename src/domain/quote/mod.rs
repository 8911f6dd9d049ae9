//! Quote domain — last-traded-price snapshots, fetched on demand.

pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market snapshot for one instrument. Values are passed through as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub tradingsymbol: String,
    pub last_price: Decimal,
    pub change: Decimal,
    pub change_percentage: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub open: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

/// Strip the `EXCHANGE:` prefix from an instrument key (`NSE:INFY` → `INFY`).
pub fn symbol_from_instrument(instrument: &str) -> &str {
    instrument
        .split_once(':')
        .map(|(_, symbol)| symbol)
        .unwrap_or(instrument)
}
