//! Provider adapters implementing [`QuoteSource`](crate::QuoteSource).

pub mod alphavantage;

pub use alphavantage::AlphaVantageQuoteFetcher;
