//! Conversion: (instrument key, QuoteResponse) → MarketData.

use super::wire::QuoteResponse;
use super::{symbol_from_instrument, MarketData};
use rust_decimal::Decimal;

impl From<(&str, QuoteResponse)> for MarketData {
    fn from((instrument, q): (&str, QuoteResponse)) -> Self {
        let ohlc = q.ohlc.as_ref();
        MarketData {
            tradingsymbol: q
                .tradingsymbol
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| symbol_from_instrument(instrument).to_string()),
            last_price: q.last_price,
            change: q.change.unwrap_or_default(),
            change_percentage: q.change_percentage.unwrap_or_default(),
            high: q.high.or(ohlc.map(|o| o.high)).unwrap_or(Decimal::ZERO),
            low: q.low.or(ohlc.map(|o| o.low)).unwrap_or(Decimal::ZERO),
            open: q.open.or(ohlc.map(|o| o.open)).unwrap_or(Decimal::ZERO),
            close: q.close.or(ohlc.map(|o| o.close)).unwrap_or(Decimal::ZERO),
            volume: q.volume.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ltp_only_quote() {
        let q: QuoteResponse =
            serde_json::from_str(r#"{"instrument_token": 408065, "last_price": 1420.5}"#).unwrap();
        let md = MarketData::from(("NSE:INFY", q));
        assert_eq!(md.tradingsymbol, "INFY");
        assert_eq!(md.last_price, dec!(1420.5));
        assert_eq!(md.change, dec!(0));
        assert_eq!(md.high, dec!(0));
        assert_eq!(md.volume, 0);
    }

    #[test]
    fn test_nested_ohlc_quote() {
        let q: QuoteResponse = serde_json::from_str(
            r#"{
                "last_price": 2500,
                "net_change": 25.5,
                "volume": 123456,
                "ohlc": {"open": 2480, "high": 2510, "low": 2470, "close": 2474.5}
            }"#,
        )
        .unwrap();
        let md = MarketData::from(("NSE:RELIANCE", q));
        assert_eq!(md.tradingsymbol, "RELIANCE");
        assert_eq!(md.change, dec!(25.5));
        assert_eq!(md.open, dec!(2480));
        assert_eq!(md.high, dec!(2510));
        assert_eq!(md.low, dec!(2470));
        assert_eq!(md.close, dec!(2474.5));
        assert_eq!(md.volume, 123456);
    }

    #[test]
    fn test_flat_fields_win_over_nested() {
        let q: QuoteResponse = serde_json::from_str(
            r#"{
                "tradingsymbol": "TCS",
                "last_price": 3350,
                "high": 3400,
                "ohlc": {"open": 1, "high": 2, "low": 3, "close": 4}
            }"#,
        )
        .unwrap();
        let md = MarketData::from(("NSE:TCS", q));
        assert_eq!(md.tradingsymbol, "TCS");
        assert_eq!(md.high, dec!(3400));
        assert_eq!(md.low, dec!(3));
    }
}
