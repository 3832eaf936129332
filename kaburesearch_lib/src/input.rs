//! Parsing of the comma-separated code list.

/// Splits `text` on commas, trims each token and drops empty ones.
///
/// Codes are not validated: whatever the user typed is looked up as is.
pub fn parse_code_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}
