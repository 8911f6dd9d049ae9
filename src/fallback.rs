//! Fixed sample data served when a dashboard read cannot reach the broker.
//!
//! Pure and deterministic: every call returns the same values.

use rust_decimal_macros::dec;

use crate::domain::portfolio::{Holding, Portfolio};

/// Sample portfolio wrapping [`holdings`].
pub fn portfolio() -> Portfolio {
    Portfolio {
        net: dec!(125000),
        day_pnl: dec!(2500),
        day_pnl_percentage: dec!(2.04),
        holdings: holdings(),
    }
}

/// Three sample NSE holdings: RELIANCE, TCS, INFY.
pub fn holdings() -> Vec<Holding> {
    vec![
        Holding {
            tradingsymbol: "RELIANCE".to_string(),
            exchange: "NSE".to_string(),
            isin: "INE002A01018".to_string(),
            quantity: 100,
            average_price: dec!(2450.50),
            last_price: dec!(2500.00),
            pnl: dec!(4950.00),
            day_change: dec!(25.50),
            day_change_percentage: dec!(1.03),
        },
        Holding {
            tradingsymbol: "TCS".to_string(),
            exchange: "NSE".to_string(),
            isin: "INE467B01029".to_string(),
            quantity: 50,
            average_price: dec!(3200.00),
            last_price: dec!(3350.00),
            pnl: dec!(7500.00),
            day_change: dec!(45.00),
            day_change_percentage: dec!(1.36),
        },
        Holding {
            tradingsymbol: "INFY".to_string(),
            exchange: "NSE".to_string(),
            isin: "INE009A01021".to_string(),
            quantity: 200,
            average_price: dec!(1450.00),
            last_price: dec!(1420.00),
            pnl: dec!(-6000.00),
            day_change: dec!(-15.00),
            day_change_percentage: dec!(-1.04),
        },
    ]
}
