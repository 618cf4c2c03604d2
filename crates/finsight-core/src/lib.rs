//! # FinSight Core
//!
//! Market-data plumbing behind the FinSight trading dashboard.
//!
//! ## Overview
//!
//! - **Symbol classification**: freeform tickers become typed
//!   [`AssetDescriptor`]s (stock / forex / crypto / unknown) by lexical shape
//!   alone
//! - **Quote fetching**: one upstream round trip per call, three provider
//!   response shapes normalized into a single [`Quote`]
//! - **Alerts** and a **performance ledger** persisted as JSON files
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Alpha Vantage) |
//! | [`alerts`] | Alert records, alert book, trigger notifications |
//! | [`config`] | Environment-driven provider configuration |
//! | [`domain`] | Classifier, asset descriptor, quote |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP transport seam |
//! | [`performance`] | Prediction history and win-rate stats |
//! | [`quote_source`] | Quote source trait and fetch error taxonomy |
//! | [`store`] | JSON file persistence |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use finsight_core::{AlphaVantageQuoteFetcher, FetchError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let fetcher = AlphaVantageQuoteFetcher::from_env();
//!
//!     match fetcher.fetch("EUR/USD").await {
//!         Ok(fetched) => println!("{} {}", fetched.quote.symbol, fetched.quote.price),
//!         Err(FetchError::Configuration) => eprintln!("set ALPHAVANTAGE_API_KEY or enter the price manually"),
//!         Err(error) => eprintln!("{} ({})", error, error.code()),
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! raw symbol ──▶ classify ──▶ AssetDescriptor
//!                                  │
//!                                  ▼
//!                    AlphaVantageQuoteFetcher ──▶ HttpClient (reqwest / test double)
//!                                  │
//!                                  ▼
//!                     Result<QuoteFetch, FetchError>
//! ```
//!
//! ## Security
//!
//! - The API key is read from the environment at call time and masked in logs

pub mod adapters;
pub mod alerts;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod performance;
pub mod quote_source;
pub mod store;

#[cfg(test)]
mod test_logs;

pub use adapters::AlphaVantageQuoteFetcher;

pub use alerts::{
    create_alert, AlertBook, AlertConfig, AlertNotification, ConditionType, NewAlert,
    NotificationMethod,
};

pub use config::{Credentials, ProviderConfig};

pub use domain::{
    classify, display_symbol, stream_symbol, AssetDescriptor, AssetKind, Quote, CRYPTO_MARKETS,
};

pub use error::{CoreError, StoreError, ValidationError};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use performance::{HistoricalPrediction, ManualFlag, PerformanceLedger, PerformanceStats};

pub use quote_source::{FetchError, FetchResult, QuoteFetch, QuoteSource};

pub use store::JsonStore;
