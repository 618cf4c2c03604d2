//! # Domain Models
//!
//! Symbol classification and the normalized quote record.
//!
//! | Type / fn | Description |
//! |-----------|-------------|
//! | [`classify`] | Lexical symbol classifier |
//! | [`AssetDescriptor`] | Classified symbol plus upstream request fields |
//! | [`AssetKind`] | Stock / Forex / Crypto / Unknown |
//! | [`Quote`] | Normalized OHLC + volume snapshot |
//! | [`stream_symbol`] | Trade-stream subscription name for a symbol |
//!
//! Classification never touches the network:
//!
//! ```rust
//! use finsight_core::{classify, AssetKind};
//!
//! let descriptor = classify("btcusd");
//! assert_eq!(descriptor.kind, AssetKind::Crypto);
//! assert_eq!(descriptor.canonical_symbol, "BTC/USD");
//! ```

mod asset;
mod classify;
mod quote;
mod stream_symbol;

pub use asset::{AssetDescriptor, AssetKind};
pub use classify::{classify, is_crypto_market, is_fiat_currency, CRYPTO_MARKETS, FIAT_CURRENCIES};
pub use quote::{today_utc, Quote, FLAT_CHANGE_PERCENT};
pub use stream_symbol::{display_symbol, stream_symbol};
