//! Field extraction from a quote page.
//!
//! Fields are located by the class and id anchors the site has used for a
//! long time. A missing anchor degrades that one field to
//! [`PLACEHOLDER`](crate::types::PLACEHOLDER); it never discards the record.

use scraper::{ElementRef, Html, Selector};

use crate::types::{BenefitFlag, QuoteRecord, PLACEHOLDER};
use crate::Error;

/// Literal searched for anywhere in the page text to set the benefit flag.
pub const BENEFIT_MARKER: &str = "株主優待";

const NAME_CONTAINER: &str = "div.company_block";
const NAME_HEADING: &str = "h3";
const PRICE: &str = "span.kabuka";
const INFO_BLOCK: &str = "div#stockinfo_i3";
const INFO_CELL: &str = "td";

/// Builds a record for `code` from a decoded quote page.
pub fn parse_quote(code: &str, html: &str) -> Result<QuoteRecord, Error> {
    let doc = Html::parse_document(html);

    let name = extract_name(&doc, code)?;
    let price = extract_price(&doc)?;
    let dividend_yield = extract_dividend_yield(&doc)?;

    Ok(QuoteRecord {
        code: code.to_string(),
        name: name.unwrap_or_else(placeholder),
        price: price.unwrap_or_else(placeholder),
        dividend_yield: dividend_yield.unwrap_or_else(placeholder),
        benefit: benefit_flag(html),
    })
}

/// First heading of the company block, with the code stripped out.
pub fn extract_name(doc: &Html, code: &str) -> Result<Option<String>, Error> {
    let container_sel = selector(NAME_CONTAINER)?;
    let heading_sel = selector(NAME_HEADING)?;

    let Some(container) = doc.select(&container_sel).next() else {
        return Ok(None);
    };
    let Some(heading) = container.select(&heading_sel).next() else {
        return Ok(None);
    };

    let mut text = element_text(heading);
    if !code.is_empty() {
        text = text.replace(code, "");
    }
    Ok(Some(text.trim().to_string()))
}

pub fn extract_price(doc: &Html) -> Result<Option<String>, Error> {
    let price_sel = selector(PRICE)?;
    Ok(doc
        .select(&price_sel)
        .next()
        .map(|el| element_text(el).trim().to_string()))
}

/// First cell of the info block whose text contains `%`.
///
/// Best effort: if the block ever lists another percentage (a daily change,
/// say) ahead of the yield, that cell is what comes back.
pub fn extract_dividend_yield(doc: &Html) -> Result<Option<String>, Error> {
    let block_sel = selector(INFO_BLOCK)?;
    let cell_sel = selector(INFO_CELL)?;

    let Some(block) = doc.select(&block_sel).next() else {
        return Ok(None);
    };
    Ok(block
        .select(&cell_sel)
        .map(element_text)
        .find(|text| text.contains('%'))
        .map(|text| text.trim().to_string()))
}

/// Whole-document substring search; not scoped to any element.
pub fn benefit_flag(html: &str) -> BenefitFlag {
    BenefitFlag::from(html.contains(BENEFIT_MARKER))
}

fn selector(css: &str) -> Result<Selector, Error> {
    Selector::parse(css).map_err(|e| Error::Parse(format!("invalid selector {}: {:?}", css, e)))
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}
