//! Record types produced by the extractor.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shown in place of a field the page did not provide.
pub const PLACEHOLDER: &str = "-";

/// Whether the quote page mentions a shareholder-benefit program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenefitFlag {
    Present,
    Absent,
}

impl BenefitFlag {
    pub fn is_present(self) -> bool {
        self == Self::Present
    }
}

impl From<bool> for BenefitFlag {
    fn from(present: bool) -> Self {
        if present {
            Self::Present
        } else {
            Self::Absent
        }
    }
}

impl fmt::Display for BenefitFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "yes"),
            Self::Absent => write!(f, "no"),
        }
    }
}

/// Fields extracted from one quote page.
///
/// `code` is the caller's input, kept verbatim. Text fields hold
/// [`PLACEHOLDER`] when the page lacked the corresponding element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub code: String,
    pub name: String,
    pub price: String,
    pub dividend_yield: String,
    pub benefit: BenefitFlag,
}

impl QuoteRecord {
    /// Heading used by the card views: `name (code)`.
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}
