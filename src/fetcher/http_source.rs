//! Reqwest-backed page source
//!
//! Owns transport details only: URL construction, status checking and JSON
//! decoding of one page.

use super::traits::PageSource;
use crate::config::ApiConfig;
use crate::error::{FetchError, Result};
use crate::types::User;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

/// Fetches pages with `GET <endpoint>?page=<n>&per_page=<size>`
///
/// One client is built up front and reused for every page.
pub struct HttpPageSource {
    client: Client,
    endpoint: Url,
}

impl HttpPageSource {
    /// Build a source from API settings
    ///
    /// # Errors
    /// Returns error if `base_url` is not an http(s) URL or the HTTP client
    /// cannot be created.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// The configured endpoint, without paging parameters
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// URL for one page; existing query parameters on the endpoint are kept
    pub fn page_url(&self, page: u64, per_page: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &per_page.to_string());
        url
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(
        &self,
        page: u64,
        per_page: u32,
    ) -> std::result::Result<Vec<User>, FetchError> {
        let url = self.page_url(page, per_page);
        debug!(%url, "GET users page");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Transport { page, source })?;

        // Anything but 200 is fatal, including other 2xx codes
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                page,
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { page, source })?;

        parse_page(page, &body)
    }
}

fn parse_page(page: u64, body: &[u8]) -> std::result::Result<Vec<User>, FetchError> {
    serde_json::from_slice(body).map_err(|source| FetchError::Decode { page, source })
}
