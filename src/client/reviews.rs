//! Published review endpoints.

use super::ReevooClient;
use crate::error::Result;
use crate::models::{AutomotiveOptions, ReviewRegion, DEFAULT_PER_PAGE};
use reqwest::Response;
use urlencoding::encode;

/// Optional parameters for [`ReevooClient::review_list`].
///
/// Every field is sent on the wire even when empty; the upstream treats an
/// empty value the same as an omitted one.
#[derive(Debug, Clone)]
pub struct ReviewListQuery {
    /// Branch to narrow to; empty means the whole organisation
    pub branch_code: String,
    /// SKU to narrow to; empty means all reviewables
    pub sku: String,
    /// Region scope for the listing
    pub region: Option<ReviewRegion>,
    /// 1-based page index
    pub page: u32,
    /// Results per page
    pub per_page: u32,
    /// Extra parameters for automotive organisations
    pub automotive_options: Option<AutomotiveOptions>,
}

impl Default for ReviewListQuery {
    fn default() -> Self {
        Self {
            branch_code: String::new(),
            sku: String::new(),
            region: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            automotive_options: None,
        }
    }
}

impl ReevooClient {
    /// Lists published reviews for an organisation.
    pub async fn review_list(
        &self,
        trkref: &str,
        locale: &str,
        query: &ReviewListQuery,
    ) -> Result<Response> {
        let region = query.region.map(|r| r.as_str()).unwrap_or("");
        let mut path = format!(
            "/v4/organisations/{}/reviews?locale={}&branch_code={}&sku={}&region={}&page={}&per_page={}",
            encode(trkref),
            encode(locale),
            encode(&query.branch_code),
            encode(&query.sku),
            region,
            query.page,
            query.per_page
        );

        if let Some(options) = &query.automotive_options {
            for (key, value) in options.query_pairs() {
                path.push('&');
                path.push_str(key);
                path.push('=');
                path.push_str(&encode(&value));
            }
        }

        self.get(&path).await
    }

    /// Fetches a single published review by ID.
    pub async fn review_detail(
        &self,
        review_id: &str,
        trkref: &str,
        branch_code: &str,
        locale: &str,
    ) -> Result<Response> {
        let path = format!(
            "/v4/reviews/{}?trkref={}&branch_code={}&locale={}",
            encode(review_id),
            encode(trkref),
            encode(branch_code),
            encode(locale)
        );
        self.get(&path).await
    }

    /// Increments the helpful count of a review.
    ///
    /// The upstream keeps no record of who voted, so repeat votes from the
    /// same user count again; callers wanting one-vote-per-user semantics
    /// have to enforce them on their side.
    pub async fn upvote_review(&self, review_id: &str, trkref: &str) -> Result<Response> {
        let path = format!(
            "/v4/reviews/{}/increment_helpful?trkref={}",
            encode(review_id),
            encode(trkref)
        );
        self.post(&path).await
    }

    /// Increments the unhelpful count of a review.
    ///
    /// Unpoliced upstream exactly like [`ReevooClient::upvote_review`].
    pub async fn downvote_review(&self, review_id: &str, trkref: &str) -> Result<Response> {
        let path = format!(
            "/v4/reviews/{}/increment_unhelpful?trkref={}",
            encode(review_id),
            encode(trkref)
        );
        self.post(&path).await
    }
}
