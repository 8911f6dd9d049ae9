//! Conversions: REST wire types ↔ Order domain types.

use super::wire::{OrderResponse, PlaceOrderForm};
use super::{Order, OrderRequest, OrderStatus};

impl From<OrderResponse> for Order {
    fn from(o: OrderResponse) -> Self {
        Order {
            status: OrderStatus::from(o.status.as_str()),
            order_id: o.order_id,
            tradingsymbol: o.tradingsymbol,
            exchange: o.exchange,
            side: o.transaction_type,
            quantity: o.quantity,
            price: o.price,
            timestamp: o.timestamp,
        }
    }
}

impl From<&OrderRequest> for PlaceOrderForm {
    fn from(req: &OrderRequest) -> Self {
        PlaceOrderForm {
            tradingsymbol: req.tradingsymbol.trim().to_string(),
            exchange: req.exchange.trim().to_string(),
            transaction_type: req.side.as_str(),
            quantity: req.quantity.to_string(),
            price: req.price.to_string(),
            product: req.product.as_str(),
            order_type: req.order_type.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderType, Product};
    use crate::shared::Side;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_response_conversion() {
        let json = r#"{
            "order_id": "151220000000000",
            "tradingsymbol": "TCS",
            "exchange": "NSE",
            "transaction_type": "SELL",
            "quantity": 5,
            "price": 3350.5,
            "status": "COMPLETE",
            "order_timestamp": "2024-03-15 10:01:00",
            "product": "CNC"
        }"#;
        let order: Order = serde_json::from_str::<OrderResponse>(json).unwrap().into();
        assert_eq!(order.order_id.as_str(), "151220000000000");
        assert_eq!(order.side, Side::Sell);
        assert_eq!(order.quantity, 5);
        assert_eq!(order.price, dec!(3350.5));
        assert_eq!(order.status, OrderStatus::Complete);
        assert_eq!(
            order.timestamp.map(|t| t.date()),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }

    #[test]
    fn test_order_response_missing_timestamp() {
        let json = r#"{
            "order_id": 77,
            "tradingsymbol": "INFY",
            "exchange": "NSE",
            "transaction_type": "BUY",
            "quantity": 1,
            "status": "OPEN",
            "timestamp": null
        }"#;
        let order: Order = serde_json::from_str::<OrderResponse>(json).unwrap().into();
        assert_eq!(order.order_id.as_str(), "77");
        assert_eq!(order.price, dec!(0));
        assert!(order.timestamp.is_none());
    }

    #[test]
    fn test_place_order_form_encoding() {
        let req = OrderRequest::buy("TCS", 10, dec!(3300.00))
            .with_product(Product::Mis)
            .with_order_type(OrderType::StopLossMarket);
        let form = PlaceOrderForm::from(&req);
        let encoded = serde_urlencoded::to_string(&form).unwrap();
        assert_eq!(
            encoded,
            "tradingsymbol=TCS&exchange=NSE&transaction_type=BUY&quantity=10&price=3300.00&product=MIS&order_type=SL-M"
        );
    }
}
