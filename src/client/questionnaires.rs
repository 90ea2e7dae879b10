//! Questionnaire endpoints.

use super::ReevooClient;
use crate::error::Result;
use reqwest::Response;
use urlencoding::encode;

impl ReevooClient {
    /// Returns the questionnaire state for a purchase.
    ///
    /// With `redirect` set the API answers with a redirect to the
    /// questionnaire itself instead of its state.
    pub async fn questionnaire_detail(
        &self,
        trkref: &str,
        email: &str,
        sku: &str,
        order_ref: &str,
        first_name: &str,
        redirect: bool,
    ) -> Result<Response> {
        let path = format!(
            "/v4/organisations/{}/questionnaire?email={}&sku={}&order_ref={}&first_name={}&redirect={}",
            encode(trkref),
            encode(email),
            encode(sku),
            encode(order_ref),
            encode(first_name),
            redirect
        );
        self.get(&path).await
    }
}
