//! Live tests against a real brokerage account.
//!
//! All tests are `#[ignore]` because they need network access and a valid
//! session. Put `TRADEDESK_API_KEY` and `TRADEDESK_ACCESS_TOKEN` (and
//! optionally `TRADEDESK_API_URL`) in `.env`, then run:
//! ```bash
//! cargo test --test live_api -- --ignored
//! ```

use tradedesk::prelude::*;

fn live_client() -> BrokerClient {
    dotenvy::dotenv().ok();
    BrokerClientBuilder::from_env()
        .build()
        .expect("client should build")
}

#[tokio::test]
#[ignore = "requires a live brokerage session"]
async fn test_live_session_is_authenticated() {
    let client = live_client();
    assert!(
        client.auth().is_authenticated().await,
        "set TRADEDESK_API_KEY and TRADEDESK_ACCESS_TOKEN"
    );
}

#[tokio::test]
#[ignore = "requires a live brokerage session"]
async fn test_live_holdings() {
    let client = live_client();
    let holdings = client
        .portfolio()
        .try_holdings()
        .await
        .expect("holdings request should succeed");
    for h in &holdings {
        assert!(!h.tradingsymbol.is_empty());
        println!("{} x{} @ {}", h.tradingsymbol, h.quantity, h.last_price);
    }
}

#[tokio::test]
#[ignore = "requires a live brokerage session"]
async fn test_live_orders_and_quotes() {
    let client = live_client();
    let orders = client.orders().try_list().await.expect("orders request should succeed");
    println!("{} orders today", orders.len());

    let quotes = client
        .quotes()
        .try_get(&["NSE:INFY", "NSE:TCS"])
        .await
        .expect("quote request should succeed");
    assert!(quotes.iter().all(|q| q.last_price > Decimal::ZERO));
}
