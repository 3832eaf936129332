//! HTTP client for kabutan.jp quote pages.

use std::time::Duration;

use url::Url;

use crate::{
    decode::{decode_body, tld_of},
    extract::parse_quote,
    types::QuoteRecord,
    user_agent::get_user_agent,
    Error,
};

pub const DEFAULT_BASE_URL: &str = "https://kabutan.jp";

/// Fetches one quote page per code and extracts a [`QuoteRecord`] from it.
///
/// Every request carries the mobile user agent and nothing else of note.
/// There is no retry; pacing between requests is the caller's business.
pub struct Client {
    /// Base URL for the site. Defaults to `https://kabutan.jp`.
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client pointing at the production site.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_timeout(base_url, None)
    }

    /// Creates a client with a custom base URL and an optional request timeout.
    /// `None` leaves reqwest's default in place.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().user_agent(get_user_agent());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// `<base>/stock/?code=<code>`. The code is query-encoded but otherwise
    /// used as given.
    pub fn quote_url(&self, code: &str) -> Result<Url, Error> {
        let mut url = Url::parse(&format!("{}/stock/", self.base_url))
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.query_pairs_mut().append_pair("code", code);
        Ok(url)
    }

    /// Fetches and decodes the quote page for `code`.
    pub async fn fetch_page(&self, code: &str) -> Result<String, Error> {
        let url = self.quote_url(code)?;
        let tld = url.domain().and_then(tld_of).map(str::to_string);

        tracing::debug!("GET {}", url);
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!("quote page for {} returned status {}", code, status);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().await?;
        Ok(decode_body(&bytes, tld.as_deref()))
    }

    /// Fetches the quote page for `code` and extracts its fields.
    pub async fn get_quote(&self, code: &str) -> Result<QuoteRecord, Error> {
        let html = self.fetch_page(code).await?;
        parse_quote(code, &html)
    }
}
