//! Runtime settings, read from the environment with fixed defaults.

use std::time::Duration;

use kabutan_api::DEFAULT_BASE_URL;

use crate::error::ResearchError;

pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);
pub const DEFAULT_NEGATIVE_TTL: Duration = Duration::from_secs(300);

/// Settings for the cached client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchConfig {
    pub base_url: String,
    /// Pause before every request that misses the cache.
    pub request_delay: Duration,
    /// How long a found quote is served from the cache.
    pub cache_ttl: Duration,
    /// How long a definitive failure (bad status, undecodable page) is
    /// served from the cache. Zero disables caching of failures.
    pub negative_ttl: Duration,
    /// Request timeout. `None` keeps the HTTP library default.
    pub timeout: Option<Duration>,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_delay: DEFAULT_REQUEST_DELAY,
            cache_ttl: DEFAULT_CACHE_TTL,
            negative_ttl: DEFAULT_NEGATIVE_TTL,
            timeout: None,
        }
    }
}

impl ResearchConfig {
    /// Reads `KABU_BASE_URL`, `KABU_REQUEST_DELAY_MS`, `KABU_CACHE_TTL_SECS`,
    /// `KABU_NEGATIVE_TTL_SECS` and `KABU_TIMEOUT_SECS`, falling back to the
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ResearchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ResearchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(base_url) = lookup("KABU_BASE_URL") {
            let trimmed = base_url.trim();
            if trimmed.is_empty() {
                return Err(ResearchError::InvalidInput(
                    "KABU_BASE_URL must not be empty".into(),
                ));
            }
            config.base_url = trimmed.to_string();
        }
        if let Some(ms) = parse_u64(&lookup, "KABU_REQUEST_DELAY_MS")? {
            config.request_delay = Duration::from_millis(ms);
        }
        if let Some(secs) = parse_u64(&lookup, "KABU_CACHE_TTL_SECS")? {
            config.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_u64(&lookup, "KABU_NEGATIVE_TTL_SECS")? {
            config.negative_ttl = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_u64(&lookup, "KABU_TIMEOUT_SECS")? {
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        Ok(config)
    }
}

fn parse_u64<F>(lookup: &F, key: &str) -> Result<Option<u64>, ResearchError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim().parse::<u64>().map(Some).map_err(|_| {
        ResearchError::InvalidInput(format!(
            "{} must be a non-negative integer, got '{}'",
            key, raw
        ))
    })
}
