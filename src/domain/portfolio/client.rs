//! Portfolio sub-client — account summary and holdings.
//!
//! `get()` and `holdings()` never fail: when the live call errors they log
//! and serve the fixed sample data from [`crate::fallback`], so a dashboard
//! stays usable offline. Use the `try_` variants to see the real error.

use crate::client::BrokerClient;
use crate::domain::portfolio::wire::{HoldingResponse, PortfolioResponse};
use crate::domain::portfolio::{Holding, Portfolio};
use crate::error::SdkError;
use crate::fallback;

pub struct PortfolioClient<'a> {
    pub(crate) client: &'a BrokerClient,
}

impl<'a> PortfolioClient<'a> {
    /// Portfolio summary, or the sample portfolio if the request fails.
    pub async fn get(&self) -> Portfolio {
        match self.try_get().await {
            Ok(portfolio) => portfolio,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch portfolio; serving sample data");
                fallback::portfolio()
            }
        }
    }

    /// Holdings in broker order, or the sample holdings if the request fails.
    pub async fn holdings(&self) -> Vec<Holding> {
        match self.try_holdings().await {
            Ok(holdings) => holdings,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch holdings; serving sample data");
                fallback::holdings()
            }
        }
    }

    pub async fn try_get(&self) -> Result<Portfolio, SdkError> {
        let resp: PortfolioResponse = self.client.http.get("/portfolio/positions", &[]).await?;
        Ok(resp.into())
    }

    pub async fn try_holdings(&self) -> Result<Vec<Holding>, SdkError> {
        let resp: Vec<HoldingResponse> = self.client.http.get("/portfolio/holdings", &[]).await?;
        Ok(resp.into_iter().map(Holding::from).collect())
    }
}
