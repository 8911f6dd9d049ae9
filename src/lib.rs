//! # tradedesk
//!
//! A Rust SDK for a Kite-style brokerage REST API, built for trading
//! dashboards: session handling, portfolio and holdings, order history,
//! quotes and order placement.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes and domain models (portfolio, order, quote)
//! 2. **Auth** — Credentials, session state, token exchange, OAuth helpers
//! 3. **HTTP** — `BrokerHttp` over a pluggable `Transport` (reqwest by default)
//! 4. **High-Level Client** — `BrokerClient` with nested sub-clients
//!
//! Dashboard reads (`portfolio().get()`, `portfolio().holdings()`) fall back
//! to fixed sample data when the broker is unreachable; `orders().list()` and
//! `quotes().get()` fall back to empty lists. Token exchange and order
//! placement always return their errors.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tradedesk::prelude::*;
//!
//! let client = BrokerClient::builder().build()?;
//! client.auth().exchange_token("api_key", "api_secret").await?;
//!
//! let holdings = client.portfolio().holdings().await;
//! let order_id = client
//!     .orders()
//!     .place(&OrderRequest::buy("TCS", 10, dec!(3300.00)))
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Sample data served when dashboard reads fail.
pub mod fallback;

/// Unified SDK error types.
pub mod error;

/// Network URL and header constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: credentials, session state, token exchange.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP client and transport seam.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `BrokerClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{OrderId, Side};

    // Domain types
    pub use crate::domain::order::{Order, OrderRequest, OrderStatus, OrderType, Product};
    pub use crate::domain::portfolio::{Holding, Portfolio};
    pub use crate::domain::quote::MarketData;

    // Errors
    pub use crate::error::{AuthError, HttpError, OrderError, OrderValidationError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_API_VERSION};

    // Auth
    pub use crate::auth::{login_url, request_token_from_redirect, Credentials, SessionState};

    // Client + sub-clients
    pub use crate::client::{
        AuthClient, BrokerClient, BrokerClientBuilder, OrdersClient, QuotesClient,
    };
    pub use crate::domain::portfolio::client::PortfolioClient;

    // Transport seam
    pub use crate::http::{HttpRequest, HttpResponse, Method, Transport};
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;

    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
