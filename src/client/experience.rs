//! Customer experience review endpoints and the paged fetch seam.

use super::ReevooClient;
use crate::error::Result;
use crate::models::ExperienceReviewPage;
use async_trait::async_trait;
use reqwest::Response;
use tracing::debug;
use urlencoding::encode;

/// Paged access to an organisation's customer experience review archive.
///
/// [`ReevooClient`] implements this against the live API; tests substitute
/// stub sources serving canned pages.
#[async_trait]
pub trait ExperienceReviewPages: Send + Sync {
    /// Fetches one decoded page of the archive-wide review listing.
    async fn fetch_page(
        &self,
        trkref: &str,
        branch_code: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ExperienceReviewPage>;
}

impl ReevooClient {
    /// Lists customer experience reviews for an organisation.
    ///
    /// `older_reviews` widens the listing from the recent window the API
    /// serves by default to the full archive.
    pub async fn customer_experience_review_list(
        &self,
        trkref: &str,
        branch_code: &str,
        older_reviews: bool,
        page: u32,
        per_page: u32,
    ) -> Result<Response> {
        let path = format!(
            "/v4/organisations/{}/customer_experience_reviews?branch_code={}&older_reviews={}&page={}&per_page={}",
            encode(trkref),
            encode(branch_code),
            older_reviews,
            page,
            per_page
        );
        self.get(&path).await
    }

    /// Fetches a single customer experience review by ID.
    pub async fn customer_experience_review_detail(
        &self,
        review_id: &str,
        trkref: &str,
        branch_code: &str,
    ) -> Result<Response> {
        let path = format!(
            "/v4/customer_experience_reviews/{}?trkref={}&branch_code={}",
            encode(review_id),
            encode(trkref),
            encode(branch_code)
        );
        self.get(&path).await
    }
}

#[async_trait]
impl ExperienceReviewPages for ReevooClient {
    async fn fetch_page(
        &self,
        trkref: &str,
        branch_code: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ExperienceReviewPage> {
        let response = self
            .customer_experience_review_list(trkref, branch_code, true, page, per_page)
            .await?;
        let body = response.text().await?;
        let decoded = parse_page(&body)?;
        debug!("Fetched page {} with {} reviews", page, decoded.len());
        Ok(decoded)
    }
}

/// Decodes one review page from its raw body.
///
/// The feed occasionally embeds literal CRLF pairs inside string values,
/// which a strict JSON decoder rejects; they are stripped before decoding.
pub(crate) fn parse_page(body: &str) -> Result<ExperienceReviewPage> {
    let cleaned = body.replace("\r\n", "");
    let page = serde_json::from_str(&cleaned)?;
    Ok(page)
}
