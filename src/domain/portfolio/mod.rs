//! Portfolio domain — account summary and long-term holdings.

pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Holding ─────────────────────────────────────────────────────────────────

/// One instrument held in the demat account. P&L figures are supplied by the
/// broker and never recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub tradingsymbol: String,
    pub exchange: String,
    pub isin: String,
    pub quantity: u64,
    pub average_price: Decimal,
    pub last_price: Decimal,
    pub pnl: Decimal,
    pub day_change: Decimal,
    pub day_change_percentage: Decimal,
}

impl Holding {
    /// Position value at the last traded price.
    pub fn current_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.last_price
    }

    /// Cost basis at the average buy price.
    pub fn invested_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.average_price
    }

    pub fn is_profitable(&self) -> bool {
        self.pnl >= Decimal::ZERO
    }
}

// ─── Portfolio ───────────────────────────────────────────────────────────────

/// Account-level summary. `net` is the broker's figure, taken as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub net: Decimal,
    pub day_pnl: Decimal,
    pub day_pnl_percentage: Decimal,
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    /// Sum of [`Holding::current_value`] across the contained holdings.
    pub fn holdings_value(&self) -> Decimal {
        self.holdings.iter().map(Holding::current_value).sum()
    }
}
