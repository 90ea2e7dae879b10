//! Organisation endpoints.

use super::ReevooClient;
use crate::error::Result;
use reqwest::Response;
use urlencoding::encode;

impl ReevooClient {
    /// Lists every organisation associated with the configured API key.
    pub async fn organisation_list(&self) -> Result<Response> {
        self.get("/v4/organisations").await
    }

    /// Fetches a single organisation by its TRKREF code.
    ///
    /// `branch_code` narrows the result to one branch; pass `""` for the
    /// whole organisation.
    pub async fn organisation_detail(&self, trkref: &str, branch_code: &str) -> Result<Response> {
        let path = format!(
            "/v4/organisations/{}?branch_code={}",
            encode(trkref),
            encode(branch_code)
        );
        self.get(&path).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::ReevooClient;
    use crate::config::Config;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_organisation_detail_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v4/organisations/TST"))
            .and(query_param("branch_code", "BR1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"trkref\": \"TST\"}"))
            .mount(&mock_server)
            .await;

        let config = Config::with_keys("ABC", "DEF");
        let client = ReevooClient::with_base_url(&config, Some(mock_server.uri())).unwrap();

        let response = client.organisation_detail("TST", "BR1").await.unwrap();
        assert_eq!(response.status(), 200);
        assert!(response.text().await.unwrap().contains("TST"));
    }

    #[tokio::test]
    async fn test_organisation_detail_empty_branch_still_sends_param() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v4/organisations/TST"))
            .and(query_param("branch_code", ""))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let config = Config::with_keys("ABC", "DEF");
        let client = ReevooClient::with_base_url(&config, Some(mock_server.uri())).unwrap();

        let response = client.organisation_detail("TST", "").await.unwrap();
        assert_eq!(response.status(), 200);
    }
}
