use anyhow::{bail, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use kaburesearch_lib::input::parse_code_list;
use kaburesearch_lib::{search_codes, CachedClient, SearchOutcome};

use crate::output::{
    print_cards, print_csv, print_json, print_markdown, print_table, OutputFormat,
};

pub const DEFAULT_CODES: &str = "7203, 8591, 9432";

#[derive(Args)]
pub struct SearchArgs {
    /// Comma-separated ticker codes (e.g. "7203, 8591, 9432")
    #[arg(default_value = DEFAULT_CODES)]
    pub codes: String,
}

pub async fn run(args: &SearchArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let outcome = search_with_progress(client, &args.codes).await?;
    report(&outcome, format)
}

/// Runs one search pass with a progress bar on stderr. The bar is cleared
/// once every code has been tried.
pub async fn search_with_progress(client: &CachedClient, input: &str) -> Result<SearchOutcome> {
    let codes = parse_code_list(input);

    let pb = ProgressBar::new(codes.len() as u64);
    pb.set_style(ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>3}/{len:3} {msg}",
    )?);
    pb.set_message("fetching quotes...");

    let outcome = search_codes(client, &codes, |done, _total| pb.set_position(done as u64)).await;
    pb.finish_and_clear();

    Ok(outcome)
}

/// Prints the outcome of a search pass. No results at all is an error.
pub fn report(outcome: &SearchOutcome, format: &OutputFormat) -> Result<()> {
    match outcome {
        SearchOutcome::EmptyInput => {
            eprintln!("Warning: enter at least one ticker code");
        }
        SearchOutcome::NoResults => bail!("no quotes could be retrieved"),
        SearchOutcome::Quotes(records) => match format {
            OutputFormat::Cards => print_cards(records),
            OutputFormat::Table => print_table(records),
            OutputFormat::Json => print_json(records),
            OutputFormat::Csv => print_csv(records)?,
            OutputFormat::Markdown => print_markdown(records),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_not_an_error() {
        assert!(report(&SearchOutcome::EmptyInput, &OutputFormat::Cards).is_ok());
    }

    #[test]
    fn no_results_is_an_error() {
        let err = report(&SearchOutcome::NoResults, &OutputFormat::Cards).unwrap_err();
        assert_eq!(err.to_string(), "no quotes could be retrieved");
    }
}
