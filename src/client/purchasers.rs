//! Purchaser and purchase endpoints.

use super::ReevooClient;
use crate::error::Result;
use crate::models::PurchaseRef;
use reqwest::Response;
use serde::Serialize;
use urlencoding::encode;

impl ReevooClient {
    /// Fetches the purchaser record for a customer email.
    pub async fn purchaser_detail(&self, trkref: &str, email: &str) -> Result<Response> {
        let path = format!(
            "/v4/organisations/{}/purchasers/{}",
            encode(trkref),
            encode(email)
        );
        self.get(&path).await
    }

    /// Creates a purchaser record.
    pub async fn create_purchaser<T: Serialize + ?Sized>(
        &self,
        trkref: &str,
        purchaser: &T,
    ) -> Result<Response> {
        let path = format!("/v4/organisations/{}/purchasers", encode(trkref));
        self.post_json(&path, purchaser).await
    }

    /// Updates an existing purchaser record.
    pub async fn update_purchaser<T: Serialize + ?Sized>(
        &self,
        trkref: &str,
        email: &str,
        purchaser: &T,
    ) -> Result<Response> {
        let path = format!(
            "/v4/organisations/{}/purchasers/{}",
            encode(trkref),
            encode(email)
        );
        self.post_json(&path, purchaser).await
    }

    /// Lists every purchase recorded for a purchaser.
    pub async fn purchase_list(&self, trkref: &str, email: &str) -> Result<Response> {
        let path = format!(
            "/v4/organisations/{}/purchasers/{}/purchases",
            encode(trkref),
            encode(email)
        );
        self.get(&path).await
    }

    /// Returns the purchaser's purchases matching the given references.
    pub async fn match_purchases(
        &self,
        trkref: &str,
        email: &str,
        purchases: &[PurchaseRef],
    ) -> Result<Response> {
        let path = format!(
            "/v4/organisations/{}/purchasers/{}/purchases/match",
            encode(trkref),
            encode(email)
        );
        self.post_json(&path, purchases).await
    }
}
