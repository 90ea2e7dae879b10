//! HTTP client for the Reevoo Cloud API.

pub mod conversations;
pub mod experience;
pub mod organisations;
pub mod orders;
pub mod purchasers;
pub mod questionnaires;
pub mod reviewables;
pub mod reviews;

pub use experience::ExperienceReviewPages;
pub use reviews::ReviewListQuery;

use crate::config::Config;
use crate::error::Result;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Client for the Reevoo Cloud API.
///
/// Every request carries the configured key and secret as HTTP basic auth.
/// Endpoint methods hand back the raw [`reqwest::Response`]; an unexpected
/// status is passed through to the caller rather than turned into an error,
/// so `404 Not Found` and friends stay inspectable.
pub struct ReevooClient {
    http: Client,
    api_key: String,
    api_secret: String,
    base_url: String,
}

impl ReevooClient {
    /// Creates a new client from the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, None)
    }

    /// Creates a new client with an optional base URL override (for testing).
    pub fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            base_url: base_url.unwrap_or_else(|| config.base_url.clone()),
        })
    }

    /// Returns the base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Checks whether the configured keys are accepted by the API.
    ///
    /// Lists organisations under the hood, since that call needs nothing
    /// beyond valid credentials. Returns false on any non-200 status.
    pub async fn verify_api_keys(&self) -> Result<bool> {
        let response = self.organisation_list().await?;
        Ok(response.status() == StatusCode::OK)
    }

    /// Performs a GET request against an API path.
    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .send()
            .await?;

        debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// Performs a POST request with an empty body.
    pub(crate) async fn post(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .send()
            .await?;

        debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// Performs a POST request with a JSON body.
    pub(crate) async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {} (json body)", url);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .json(body)
            .send()
            .await?;

        debug!("Response status: {}", response.status());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_test_config() -> Config {
        Config::with_keys("ABC", "DEF")
    }

    #[tokio::test]
    async fn test_basic_auth_header_sent() {
        let mock_server = MockServer::start().await;

        // "ABC:DEF" base64-encoded
        Mock::given(method("GET"))
            .and(path("/v4/organisations"))
            .and(header("authorization", "Basic QUJDOkRFRg=="))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"organisations\": []}"))
            .mount(&mock_server)
            .await;

        let config = make_test_config();
        let client = ReevooClient::with_base_url(&config, Some(mock_server.uri())).unwrap();

        let response = client.organisation_list().await.unwrap();
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_error_statuses_pass_through() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v4/organisations/NOPE"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let config = make_test_config();
        let client = ReevooClient::with_base_url(&config, Some(mock_server.uri())).unwrap();

        // A 404 is a response, not an error
        let response = client.organisation_detail("NOPE", "").await.unwrap();
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_post_sends_auth() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v4/reviews/123/increment_helpful"))
            .and(header("authorization", "Basic QUJDOkRFRg=="))
            .respond_with(ResponseTemplate::new(202))
            .mount(&mock_server)
            .await;

        let config = make_test_config();
        let client = ReevooClient::with_base_url(&config, Some(mock_server.uri())).unwrap();

        let response = client.upvote_review("123", "TST").await.unwrap();
        assert_eq!(response.status(), 202);
    }

    #[tokio::test]
    async fn test_verify_api_keys_accepted() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v4/organisations"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"organisations\": []}"))
            .mount(&mock_server)
            .await;

        let config = make_test_config();
        let client = ReevooClient::with_base_url(&config, Some(mock_server.uri())).unwrap();

        assert!(client.verify_api_keys().await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_api_keys_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v4/organisations"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let config = make_test_config();
        let client = ReevooClient::with_base_url(&config, Some(mock_server.uri())).unwrap();

        assert!(!client.verify_api_keys().await.unwrap());
    }

    #[test]
    fn test_base_url_default() {
        let config = make_test_config();
        let client = ReevooClient::new(&config).unwrap();

        assert_eq!(client.base_url(), "https://api.reevoocloud.com");
    }

    #[test]
    fn test_base_url_custom() {
        let config = make_test_config();
        let client =
            ReevooClient::with_base_url(&config, Some("http://custom.url".to_string())).unwrap();

        assert_eq!(client.base_url(), "http://custom.url");
    }
}
