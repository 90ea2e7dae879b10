//! Reviewable (product) endpoints.

use super::ReevooClient;
use crate::error::Result;
use reqwest::Response;
use urlencoding::encode;

impl ReevooClient {
    /// Lists the reviewables registered for an organisation.
    ///
    /// The short format is available to any organisation and carries only
    /// the SKU, review count and average score per entry. The full format
    /// can be narrowed with `skus` (the upstream caps the filter at 80).
    pub async fn reviewable_list(
        &self,
        trkref: &str,
        branch_code: &str,
        short_format: bool,
        skus: Option<&[String]>,
    ) -> Result<Response> {
        let path = if short_format {
            format!(
                "/v4/organisations/{}/reviewables?branch_code={}&format=short",
                encode(trkref),
                encode(branch_code)
            )
        } else {
            // SKUs are joined with raw commas; only the values are encoded
            let skus_joined = skus
                .unwrap_or(&[])
                .iter()
                .map(|sku| encode(sku).into_owned())
                .collect::<Vec<_>>()
                .join(",");
            format!(
                "/v4/organisations/{}/reviewables?branch_code={}&skus={}",
                encode(trkref),
                encode(branch_code),
                skus_joined
            )
        };
        self.get(&path).await
    }

    /// Fetches a single reviewable by SKU.
    pub async fn reviewable_detail(
        &self,
        trkref: &str,
        sku: &str,
        branch_code: &str,
        locale: &str,
        short_format: bool,
    ) -> Result<Response> {
        let mut path = format!(
            "/v4/organisations/{}/reviewable?branch_code={}&locale={}&sku={}",
            encode(trkref),
            encode(branch_code),
            encode(locale),
            encode(sku)
        );
        if short_format {
            path.push_str("&format=short");
        }
        self.get(&path).await
    }
}
