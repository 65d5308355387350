use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, error};
use url::Url;

use crate::errors::{PexelsError, Result};
use crate::models::{SearchRequest, SearchResult};

const DEFAULT_BASE_URL: &str = "https://api.pexels.com/videos";
const API_KEY_ENV: &str = "PEXELS_API_KEY";

/// Builder for constructing a [`Client`] with custom configuration.
///
/// # Example
///
/// ```no_run
/// use pexels_video::ClientBuilder;
///
/// # fn example() -> pexels_video::Result<()> {
/// let client = ClientBuilder::new()
///     .api_key("your-pexels-key")
///     .base_url("https://proxy.example.com/videos")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: String,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: None,
        }
    }

    /// Set the API key sent in the `Authorization` header.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the base URL (defaults to `https://api.pexels.com/videos`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Use a preconfigured reqwest client instead of a default one.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the [`Client`].
    ///
    /// If no API key was set via [`api_key`](Self::api_key), the builder
    /// reads the `PEXELS_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// - [`PexelsError::MissingApiKey`] if no key is available.
    /// - [`PexelsError::InvalidApiKey`] if the key cannot be sent as a header.
    /// - [`PexelsError::InvalidUrl`] if the base URL does not parse or cannot
    ///   take a path.
    pub fn build(self) -> Result<Client> {
        let api_key = resolve_api_key(self.api_key, || std::env::var(API_KEY_ENV).ok())?;

        let mut authorization =
            HeaderValue::from_str(&api_key).map_err(|_| PexelsError::InvalidApiKey)?;
        authorization.set_sensitive(true);

        let endpoint = search_endpoint(&self.base_url)?;

        Ok(Client {
            endpoint,
            authorization,
            http: self.http.unwrap_or_default(),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `{base}/search`, keeping any query string on the base and dropping its fragment.
fn search_endpoint(base: &str) -> Result<Url> {
    let mut endpoint = Url::parse(base)?;
    endpoint
        .path_segments_mut()
        .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .push("search");
    endpoint.set_fragment(None);
    Ok(endpoint)
}

fn resolve_api_key(
    explicit: Option<String>,
    from_env: impl FnOnce() -> Option<String>,
) -> Result<String> {
    explicit
        .or_else(from_env)
        .filter(|key| !key.trim().is_empty())
        .ok_or(PexelsError::MissingApiKey)
}

/// Client for the Pexels video search endpoint.
///
/// Every call is a single, independent GET. Nothing is cached or retried, so
/// the client can be cloned and used from many tasks at once.
///
/// # Example
///
/// ```no_run
/// use pexels_video::Client;
///
/// # async fn example() -> pexels_video::Result<()> {
/// let client = Client::new("your-pexels-key")?;
///
/// let result = client.search("ocean", Some(5), None).await?;
/// for video in &result.videos {
///     println!("{} ({}s) by {}", video.url, video.duration_seconds, video.owner.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    endpoint: Url,
    authorization: HeaderValue,
    http: reqwest::Client,
}

impl Client {
    /// Create a client for the public endpoint with the given API key.
    ///
    /// For customization, use [`ClientBuilder`] instead.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_key(api_key).build()
    }

    /// Search for videos matching `query`.
    ///
    /// `per_page` and `page` default to 1 when `None`.
    ///
    /// # Errors
    ///
    /// - [`PexelsError::InvalidQuery`] if `query` is empty.
    /// - [`PexelsError::Status`] if the upstream answers with a non-success status.
    /// - [`PexelsError::Parse`] if the body is not a valid search result.
    /// - [`PexelsError::Transport`] if the request could not be completed.
    pub async fn search(
        &self,
        query: &str,
        per_page: Option<u32>,
        page: Option<u32>,
    ) -> Result<SearchResult> {
        let mut request = SearchRequest::new(query);
        if let Some(n) = per_page {
            request = request.per_page(n);
        }
        if let Some(p) = page {
            request = request.page(p);
        }
        self.search_request(&request).await
    }

    /// Same as [`search`](Self::search), taking a prepared [`SearchRequest`].
    pub async fn search_request(&self, request: &SearchRequest) -> Result<SearchResult> {
        if request.query.is_empty() {
            error!("rejected search with empty query");
            return Err(PexelsError::InvalidQuery);
        }
        self.fetch(self.search_url(request)).await
    }

    /// Fetch the page after `result`, or `None` if `result` is the last page.
    pub async fn next_page(&self, result: &SearchResult) -> Result<Option<SearchResult>> {
        let Some(next) = result.next_page_url.as_deref() else {
            return Ok(None);
        };
        let url = Url::parse(next).map_err(|e| {
            error!(next_page = next, error = %e, "upstream returned an invalid next_page link");
            PexelsError::InvalidUrl(e)
        })?;
        self.fetch(url).await.map(Some)
    }

    /// The URL [`search_request`](Self::search_request) would send for `request`.
    pub fn search_url(&self, request: &SearchRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", &request.query)
            .append_pair("page", &request.page.to_string())
            .append_pair("per_page", &request.per_page.to_string());
        url
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Issue one GET and decode the body. Non-success responses are not read.
    async fn fetch(&self, url: Url) -> Result<SearchResult> {
        debug!(%url, "requesting videos");

        let response = self
            .http
            .get(url.as_str())
            .header(AUTHORIZATION, self.authorization.clone())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| failed(&url, PexelsError::Transport(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failed(
                &url,
                PexelsError::Status {
                    status_code: status.as_u16(),
                },
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| failed(&url, PexelsError::Transport(e)))?;

        serde_json::from_slice(&body).map_err(|e| failed(&url, PexelsError::Parse(e)))
    }
}

fn failed(url: &Url, err: PexelsError) -> PexelsError {
    error!(%url, error = %err, "error fetching videos from Pexels");
    err
}
