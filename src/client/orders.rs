//! Customer order submission endpoints.

use super::ReevooClient;
use crate::error::Result;
use reqwest::Response;
use serde::Serialize;
use urlencoding::encode;

impl ReevooClient {
    /// Submits a single customer order for an organisation.
    ///
    /// The order payload is passed through as JSON; its shape is dictated by
    /// the questionnaire flow configured for the organisation.
    pub async fn submit_customer_order<T: Serialize + ?Sized>(
        &self,
        trkref: &str,
        order: &T,
    ) -> Result<Response> {
        let path = format!("/v4/organisations/{}/customer_order", encode(trkref));
        self.post_json(&path, order).await
    }

    /// Submits a batch of customer orders, possibly spanning organisations.
    ///
    /// Each entry names its own TRKREF, so the batch endpoint lives outside
    /// the organisation path.
    pub async fn submit_customer_order_batch<T: Serialize + ?Sized>(
        &self,
        orders: &T,
    ) -> Result<Response> {
        self.post_json("/v4/customer_orders", orders).await
    }
}
