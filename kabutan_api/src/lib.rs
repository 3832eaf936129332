//! Client for kabutan.jp stock quote pages.
//!
//! Fetches one page per ticker code, sniffs its character set, and extracts
//! name, price, dividend yield and a shareholder-benefit flag.

mod client;
pub mod decode;
mod errors;
pub mod extract;
pub mod types;
mod user_agent;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::types::{BenefitFlag, QuoteRecord, PLACEHOLDER};
pub use self::user_agent::MOBILE_USER_AGENT;
