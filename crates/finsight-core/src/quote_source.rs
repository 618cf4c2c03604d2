//! Quote source contract and its error taxonomy.
//!
//! | Error | Network attempted | Retryable |
//! |-------|-------------------|-----------|
//! | [`FetchError::Configuration`] | no | no |
//! | [`FetchError::Classification`] | no | no |
//! | [`FetchError::Transport`] | yes | yes |
//! | [`FetchError::Data`] | yes | no |
//!
//! Errors are values: callers render them inline instead of unwinding.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{AssetKind, Quote};

/// Typed failure of a single quote fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Provider key is absent. Callers should offer manual entry, not retry.
    #[error("Quote service API key is not configured.")]
    Configuration,

    #[error("Symbol format \"{symbol}\" not recognized. Try formats like AAPL, EUR/USD, or BTC/USD.")]
    Classification { symbol: String },

    #[error("{message}")]
    Transport { kind: AssetKind, message: String },

    #[error("{message}")]
    Data { kind: AssetKind, message: String },
}

impl FetchError {
    pub fn classification(symbol: impl Into<String>) -> Self {
        Self::Classification {
            symbol: symbol.into(),
        }
    }

    pub fn transport(kind: AssetKind, message: impl Into<String>) -> Self {
        Self::Transport {
            kind,
            message: message.into(),
        }
    }

    pub fn data(kind: AssetKind, message: impl Into<String>) -> Self {
        Self::Data {
            kind,
            message: message.into(),
        }
    }

    /// Asset kind the fetch was attempting, where known.
    pub const fn kind(&self) -> Option<AssetKind> {
        match self {
            Self::Configuration => None,
            Self::Classification { .. } => Some(AssetKind::Unknown),
            Self::Transport { kind, .. } | Self::Data { kind, .. } => Some(*kind),
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Configuration => "quote.configuration",
            Self::Classification { .. } => "quote.classification",
            Self::Transport { .. } => "quote.transport",
            Self::Data { .. } => "quote.data",
        }
    }

    pub const fn retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// Successful fetch: the normalized quote and the resolved asset kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteFetch {
    pub quote: Quote,
    pub kind: AssetKind,
}

pub type FetchResult = Result<QuoteFetch, FetchError>;

/// A provider able to turn a raw symbol into a normalized quote.
///
/// Each call is independent: classify, then at most one upstream round trip.
/// Implementations hold no per-call state, so concurrent calls need no
/// coordination.
pub trait QuoteSource: Send + Sync {
    fn fetch_quote<'a>(
        &'a self,
        symbol: &'a str,
    ) -> Pin<Box<dyn Future<Output = FetchResult> + Send + 'a>>;
}
