//! Google Scholar profile fetcher.
//!
//! One GET per call: no retries, no caching. Scholar blocks requests that
//! do not carry a browser `User-Agent`, so one is installed as a default
//! header on the underlying client.

use reqwest::Client;
use url::Url;

use crate::config::{Config, api};
use crate::error::{FetchError, FetchResult};

/// Raw markup of a profile page and the URL it came from.
#[derive(Debug, Clone)]
pub struct ProfilePage {
    /// Request URL.
    pub url: String,

    /// Response body.
    pub html: String,
}

/// Google Scholar HTTP client.
#[derive(Clone)]
pub struct ScholarClient {
    /// HTTP client with the browser identity installed.
    client: Client,

    /// Profile endpoint.
    base_url: String,
}

impl ScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> FetchResult<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(api::USER_AGENT),
        );

        let client = Client::builder().default_headers(headers).gzip(true).build()?;

        Ok(Self { client, base_url: config.base_url.clone() })
    }

    /// Profile URL for an identifier: `<base>?user=<id>&hl=en`.
    ///
    /// # Errors
    ///
    /// Returns error if the configured base URL is not a valid URL.
    pub fn profile_url(&self, user_id: &str) -> FetchResult<Url> {
        let params = [("user", user_id), ("hl", api::LOCALE)];
        Ok(Url::parse_with_params(&self.base_url, &params)?)
    }

    /// Fetch the profile page for an identifier.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-2xx status.
    pub async fn fetch_profile(&self, user_id: &str) -> FetchResult<ProfilePage> {
        let url = self.profile_url(user_id)?;
        tracing::debug!(url = %url, "Fetching profile page");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Profile request rejected");
            return Err(FetchError::status(status.as_u16(), &body));
        }

        let html = response.text().await?;
        tracing::debug!(status = status.as_u16(), bytes = html.len(), "Profile page received");

        Ok(ProfilePage { url: url.into(), html })
    }
}

impl std::fmt::Debug for ScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScholarClient").field("base_url", &self.base_url).finish()
    }
}
