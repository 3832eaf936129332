//! Errors surfaced by the cached client and configuration loading.

/// Failures from the library layer. Quote lookups only return these when
/// the failure was not recorded in the cache.
#[derive(thiserror::Error, Debug)]
pub enum ResearchError {
    #[error("quote page error: {0}")]
    Api(#[from] kabutan_api::Error),
    /// A stored entry could not be read back.
    #[error("cache error: {0}")]
    Cache(String),
    /// An environment setting is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn api_error_converts_and_keeps_source() {
        let err: ResearchError = kabutan_api::Error::HttpStatus { status: 404 }.into();
        assert!(matches!(err, ResearchError::Api(_)));
        assert_eq!(err.to_string(), "quote page error: unexpected status 404");
        assert!(err.source().is_some());
    }

    #[test]
    fn cache_error_has_no_source() {
        let err = ResearchError::Cache("entry for 7203: expected value".into());
        assert_eq!(err.to_string(), "cache error: entry for 7203: expected value");
        assert!(err.source().is_none());
    }
}
