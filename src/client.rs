//! High-level client — `BrokerClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::auth::client::Auth;
use crate::auth::{Credentials, SessionState};
use crate::domain::order::client::Orders;
use crate::domain::portfolio::client::PortfolioClient;
use crate::domain::quote::client::Quotes;
use crate::error::SdkError;
use crate::http::{BrokerHttp, Transport};
use crate::network::{DEFAULT_API_URL, DEFAULT_API_VERSION};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::quote::client::Quotes as QuotesClient;

/// Environment variables read by [`BrokerClientBuilder::from_env`].
pub const ENV_API_URL: &str = "TRADEDESK_API_URL";
pub const ENV_API_KEY: &str = "TRADEDESK_API_KEY";
pub const ENV_API_SECRET: &str = "TRADEDESK_API_SECRET";
pub const ENV_ACCESS_TOKEN: &str = "TRADEDESK_ACCESS_TOKEN";

/// The primary entry point for the SDK.
///
/// Construct one per session and pass it to whatever needs it; clones share
/// the same session state and connection pool.
#[derive(Clone)]
pub struct BrokerClient {
    pub(crate) http: BrokerHttp,
}

impl BrokerClient {
    pub fn builder() -> BrokerClientBuilder {
        BrokerClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn portfolio(&self) -> PortfolioClient<'_> {
        PortfolioClient { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn quotes(&self) -> Quotes<'_> {
        Quotes { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BrokerClientBuilder {
    base_url: String,
    api_version: String,
    timeout: Option<Duration>,
    headers: Vec<(String, String)>,
    credentials: Option<Credentials>,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for BrokerClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
            headers: Vec::new(),
            credentials: None,
            transport: None,
        }
    }
}

impl BrokerClientBuilder {
    /// Builder seeded from `TRADEDESK_*` environment variables.
    ///
    /// Unset variables keep their defaults. Credentials are only set when
    /// `TRADEDESK_API_KEY` is present.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let mut builder = Self::default();
        if let Some(url) = var(ENV_API_URL) {
            builder = builder.base_url(&url);
        }
        if let Some(api_key) = var(ENV_API_KEY) {
            builder = builder.credentials(Credentials {
                api_key,
                api_secret: var(ENV_API_SECRET).unwrap_or_default(),
                access_token: var(ENV_ACCESS_TOKEN),
            });
        }
        builder
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn api_version(mut self, version: &str) -> Self {
        self.api_version = version.to_string();
        self
    }

    /// Request timeout for the built-in reqwest transport. Unset by default;
    /// ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Pre-set session credentials on construction.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Use a custom transport instead of the built-in reqwest one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<BrokerClient, SdkError> {
        if self.base_url.trim().is_empty() {
            return Err(SdkError::Validation("base URL is empty".to_string()));
        }
        for (name, _) in &self.headers {
            if name.trim().is_empty() {
                return Err(SdkError::Validation("header name is empty".to_string()));
            }
        }

        let transport = match self.transport {
            Some(t) => t,
            None => default_transport(self.timeout)?,
        };

        Ok(BrokerClient {
            http: BrokerHttp::new(
                &self.base_url,
                &self.api_version,
                self.headers,
                transport,
                SessionState::new(self.credentials),
            ),
        })
    }
}

#[cfg(feature = "http")]
fn default_transport(timeout: Option<Duration>) -> Result<Arc<dyn Transport>, SdkError> {
    Ok(Arc::new(crate::http::ReqwestTransport::new(timeout)?))
}

#[cfg(not(feature = "http"))]
fn default_transport(_timeout: Option<Duration>) -> Result<Arc<dyn Transport>, SdkError> {
    Err(SdkError::Validation(
        "no transport configured; enable the `http` feature or call `transport()`".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = BrokerClient::builder().build().unwrap();
        assert_eq!(client.base_url(), "https://api.kite.trade");
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = BrokerClient::builder()
            .base_url("https://broker.example.com/")
            .header("X-Custom", "test")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://broker.example.com");
    }

    #[test]
    fn test_builder_rejects_empty_url() {
        let err = BrokerClient::builder().base_url("  ").build().err();
        assert!(matches!(err, Some(SdkError::Validation(_))));
    }

    #[tokio::test]
    async fn test_builder_credentials_seed_session() {
        let client = BrokerClient::builder()
            .credentials(Credentials::with_access_token("abc", "tok123"))
            .build()
            .unwrap();
        assert!(client.auth().is_authenticated().await);
        assert_eq!(client.auth().auth_header().await, "token abc:tok123");
    }

    #[test]
    fn test_builder_has_no_default_timeout() {
        assert_eq!(BrokerClientBuilder::default().timeout, None);
    }

    // Env vars are process-wide, so every `from_env` case lives in one test.
    #[tokio::test]
    async fn test_from_env() {
        for name in [ENV_API_URL, ENV_API_KEY, ENV_API_SECRET, ENV_ACCESS_TOKEN] {
            std::env::remove_var(name);
        }
        let builder = BrokerClientBuilder::from_env();
        assert_eq!(builder.base_url, DEFAULT_API_URL);
        assert!(builder.credentials.is_none());

        std::env::set_var(ENV_API_URL, "https://gateway.example.com/");
        std::env::set_var(ENV_API_KEY, "abc");
        std::env::set_var(ENV_API_SECRET, "  ");
        std::env::set_var(ENV_ACCESS_TOKEN, "tok123");
        let client = BrokerClientBuilder::from_env().build().unwrap();
        for name in [ENV_API_URL, ENV_API_KEY, ENV_API_SECRET, ENV_ACCESS_TOKEN] {
            std::env::remove_var(name);
        }

        assert_eq!(client.base_url(), "https://gateway.example.com");
        let creds = client.auth().credentials().await.unwrap();
        assert_eq!(creds.api_key, "abc");
        assert_eq!(creds.api_secret, "");
        assert_eq!(client.auth().auth_header().await, "token abc:tok123");
    }

    #[tokio::test]
    async fn test_clones_share_session() {
        let client = BrokerClient::builder().build().unwrap();
        let other = client.clone();
        client
            .auth()
            .set_credentials(Credentials::with_access_token("k", "t"))
            .await;
        assert!(other.auth().is_authenticated().await);
        other.auth().logout().await;
        assert!(!client.auth().is_authenticated().await);
    }
}
