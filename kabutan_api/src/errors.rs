//! Error types for the quote page client.

/// Errors that can occur while fetching or extracting a quote page.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be sent or the body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The site answered with a non-success status.
    #[error("unexpected status {status}")]
    HttpStatus { status: u16 },
    /// The page could not be parsed into a record.
    #[error("parse error: {0}")]
    Parse(String),
    /// The quote URL could not be built from the base URL and code.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// Whether a repeated request could plausibly succeed.
    ///
    /// Only transport failures qualify. A status or parse failure
    /// comes back the same way until the page itself changes.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
