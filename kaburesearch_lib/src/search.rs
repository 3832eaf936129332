//! One pass over a code list: look each code up in order and keep the
//! quotes that came back.

use kabutan_api::QuoteRecord;

use crate::client::CachedClient;
use crate::input::parse_code_list;

/// What a search pass produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No codes in the input; nothing was fetched.
    EmptyInput,
    /// Every code failed.
    NoResults,
    /// Found quotes, in input order.
    Quotes(Vec<QuoteRecord>),
}

/// Parses `input` as a comma-separated code list and searches it.
///
/// `on_progress` is called with `(done, total)` after each code.
pub async fn search<F>(client: &CachedClient, input: &str, on_progress: F) -> SearchOutcome
where
    F: FnMut(usize, usize),
{
    let codes = parse_code_list(input);
    search_codes(client, &codes, on_progress).await
}

/// Looks up `codes` one after another. Failed codes are left out.
pub async fn search_codes<F>(
    client: &CachedClient,
    codes: &[String],
    mut on_progress: F,
) -> SearchOutcome
where
    F: FnMut(usize, usize),
{
    if codes.is_empty() {
        return SearchOutcome::EmptyInput;
    }

    let total = codes.len();
    let mut results = Vec::with_capacity(total);
    for (i, code) in codes.iter().enumerate() {
        if let Some(record) = client.get_quote(code).await {
            results.push(record);
        }
        on_progress(i + 1, total);
    }

    tracing::info!("{} of {} codes returned a quote", results.len(), total);

    if results.is_empty() {
        SearchOutcome::NoResults
    } else {
        SearchOutcome::Quotes(results)
    }
}
