use anyhow::Result;
use kaburesearch_lib::CachedClient;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::search::{report, search_with_progress};
use crate::output::OutputFormat;

/// Reads code lists from stdin, one search per line, until a blank line or
/// EOF. Quotes fetched earlier in the session are served from the cache.
pub async fn run(client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    eprintln!("Enter ticker codes separated by commas (blank line to quit).");
    loop {
        eprint!("> ");
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            break;
        }

        let outcome = search_with_progress(client, &line).await?;
        if let Err(e) = report(&outcome, format) {
            eprintln!("Error: {:#}", e);
        }
    }

    Ok(())
}
