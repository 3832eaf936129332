//! Library layer for Kabu Research: cached quote client, code-list parsing,
//! and the search pass behind the CLI.
//!
//! Wraps the `kabutan_api` crate with an in-memory TTL cache and a fixed
//! politeness delay.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod search;

pub use kabutan_api;
pub use kabutan_api::{BenefitFlag, QuoteRecord, PLACEHOLDER};

pub use cache::{Clock, ManualClock, MemoryCache, SystemClock};
pub use client::{CachedClient, QuoteOutcome};
pub use config::ResearchConfig;
pub use error::ResearchError;
pub use search::{search, search_codes, SearchOutcome};
