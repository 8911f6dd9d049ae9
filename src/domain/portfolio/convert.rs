//! Conversions from wire types to portfolio domain types.

use super::wire::{HoldingResponse, PortfolioResponse};
use super::{Holding, Portfolio};

impl From<HoldingResponse> for Holding {
    fn from(h: HoldingResponse) -> Self {
        Self {
            tradingsymbol: h.tradingsymbol,
            exchange: h.exchange,
            isin: h.isin.unwrap_or_default(),
            quantity: h.quantity,
            average_price: h.average_price,
            last_price: h.last_price,
            pnl: h.pnl,
            day_change: h.day_change,
            day_change_percentage: h.day_change_percentage,
        }
    }
}

impl From<PortfolioResponse> for Portfolio {
    fn from(p: PortfolioResponse) -> Self {
        Self {
            net: p.net,
            day_pnl: p.day_pnl,
            day_pnl_percentage: p.day_pnl_percentage,
            holdings: p.holdings.into_iter().map(Holding::from).collect(),
        }
    }
}
