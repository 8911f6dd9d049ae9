//! Orders sub-client — order history and order placement.

use crate::client::BrokerClient;
use crate::domain::order::wire::{OrderResponse, PlaceOrderForm, PlaceOrderResponse};
use crate::domain::order::{Order, OrderRequest};
use crate::error::{OrderError, SdkError};
use crate::shared::OrderId;

pub struct Orders<'a> {
    pub(crate) client: &'a BrokerClient,
}

impl<'a> Orders<'a> {
    /// Today's orders. Empty on any failure; order history is never faked.
    pub async fn list(&self) -> Vec<Order> {
        match self.try_list().await {
            Ok(orders) => orders,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch orders");
                Vec::new()
            }
        }
    }

    /// Today's orders, or the request error. Rows that fail to decode are
    /// skipped with a warning.
    pub async fn try_list(&self) -> Result<Vec<Order>, SdkError> {
        let rows: Vec<serde_json::Value> = self.client.http.get("/orders", &[]).await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<OrderResponse>(row) {
                Ok(order) => Some(Order::from(order)),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed order row");
                    None
                }
            })
            .collect())
    }

    /// Submit a regular order and return the broker's order id.
    ///
    /// The request is validated first; an invalid order never reaches the
    /// network. Failures are always returned, never substituted.
    pub async fn place(&self, request: &OrderRequest) -> Result<OrderId, SdkError> {
        request.validate().map_err(OrderError::from)?;

        let form = PlaceOrderForm::from(request);
        let resp: PlaceOrderResponse = self
            .client
            .http
            .post_form("/orders/regular", &form)
            .await
            .map_err(OrderError::SubmissionFailed)?;

        if resp.order_id.is_empty() {
            return Err(OrderError::MissingOrderId.into());
        }

        tracing::info!(
            order_id = %resp.order_id,
            symbol = %form.tradingsymbol,
            side = form.transaction_type,
            quantity = %form.quantity,
            "Order placed"
        );
        Ok(resp.order_id)
    }
}
