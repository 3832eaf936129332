//! Caching and politeness wrapper around the quote page client.

use std::time::Duration;

use kabutan_api::{Client, QuoteRecord};
use serde::{Deserialize, Serialize};

use crate::cache::MemoryCache;
use crate::config::{ResearchConfig, DEFAULT_NEGATIVE_TTL, DEFAULT_REQUEST_DELAY};
use crate::error::ResearchError;

/// Result of one lookup as the cache sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QuoteOutcome {
    Found(QuoteRecord),
    /// The site gave a definitive answer with no usable quote.
    Absent { reason: String },
}

/// Quote client wrapper that adds in-memory caching and a fixed pause
/// before each request.
///
/// Cache hits bypass the network and the pause entirely. Found quotes are
/// kept for the cache TTL; definitive failures (non-success status, an
/// undecodable page) for the shorter negative TTL. Transport failures are
/// never cached, so the next lookup tries again.
pub struct CachedClient {
    inner: Client,
    cache: MemoryCache,
    negative_ttl: Duration,
    request_delay: Duration,
}

impl CachedClient {
    /// Creates a new cached client using the production site.
    pub fn new(cache: MemoryCache) -> Result<Self, ResearchError> {
        Ok(Self::from_parts(Client::new()?, cache))
    }

    /// Creates a new cached client with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str, cache: MemoryCache) -> Result<Self, ResearchError> {
        Ok(Self::from_parts(Client::with_base_url(base_url)?, cache))
    }

    /// Builds the client and its cache from `config`.
    pub fn from_config(config: &ResearchConfig) -> Result<Self, ResearchError> {
        let inner = Client::with_timeout(&config.base_url, config.timeout)?;
        let cache = MemoryCache::new(config.cache_ttl);
        Ok(Self::from_parts(inner, cache)
            .with_request_delay(config.request_delay)
            .with_negative_ttl(config.negative_ttl))
    }

    fn from_parts(inner: Client, cache: MemoryCache) -> Self {
        Self {
            inner,
            cache,
            negative_ttl: DEFAULT_NEGATIVE_TTL,
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    pub fn with_negative_ttl(mut self, ttl: Duration) -> Self {
        self.negative_ttl = ttl;
        self
    }

    async fn throttle(&self) {
        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }
    }

    /// Looks up `code`, returning the cached outcome when still fresh.
    ///
    /// `Err` means the lookup failed in a way that was not cached.
    pub async fn fetch_quote(&self, code: &str) -> Result<QuoteOutcome, ResearchError> {
        let cache_key = format!("quote:{}", code);

        if let Some(cached) = self.cache.get(&cache_key) {
            tracing::debug!("cache hit for {}", code);
            let outcome: QuoteOutcome = serde_json::from_str(&cached)
                .map_err(|e| ResearchError::Cache(format!("entry for {}: {}", code, e)))?;
            return Ok(outcome);
        }

        self.throttle().await;
        match self.inner.get_quote(code).await {
            Ok(record) => {
                let outcome = QuoteOutcome::Found(record);
                if let Ok(json) = serde_json::to_string(&outcome) {
                    self.cache.set(cache_key, json);
                    tracing::debug!("cached {} ({} entries)", code, self.cache.len());
                }
                Ok(outcome)
            }
            Err(err) if err.is_transient() => Err(err.into()),
            Err(err) => {
                let outcome = QuoteOutcome::Absent {
                    reason: err.to_string(),
                };
                if !self.negative_ttl.is_zero() {
                    if let Ok(json) = serde_json::to_string(&outcome) {
                        self.cache.set_with_ttl(cache_key, json, self.negative_ttl);
                    }
                }
                Ok(outcome)
            }
        }
    }

    /// Looks up `code`, collapsing every kind of failure to `None`.
    pub async fn get_quote(&self, code: &str) -> Option<QuoteRecord> {
        match self.fetch_quote(code).await {
            Ok(QuoteOutcome::Found(record)) => Some(record),
            Ok(QuoteOutcome::Absent { reason }) => {
                tracing::debug!("no quote for {}: {}", code, reason);
                None
            }
            Err(err) => {
                tracing::warn!("quote lookup for {} failed: {}", code, err);
                None
            }
        }
    }

    /// Removes all entries from the cache.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
