use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Asset category inferred from the lexical shape of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Stock,
    Forex,
    Crypto,
    Unknown,
}

impl AssetKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Forex => "forex",
            Self::Crypto => "crypto",
            Self::Unknown => "unknown",
        }
    }

    /// Label used in user-facing provider messages ("Stock API request failed").
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stock => "Stock",
            Self::Forex => "Forex",
            Self::Crypto => "Crypto",
            Self::Unknown => "Unknown",
        }
    }
}

impl Display for AssetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified symbol plus the fields needed to address the upstream provider.
///
/// Derived solely from the input string; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDescriptor {
    pub kind: AssetKind,
    pub api_symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    pub canonical_symbol: String,
}

impl AssetDescriptor {
    pub fn stock(ticker: impl Into<String>) -> Self {
        let ticker = ticker.into();
        Self {
            kind: AssetKind::Stock,
            api_symbol: ticker.clone(),
            from_currency: None,
            to_currency: None,
            market: None,
            canonical_symbol: ticker,
        }
    }

    pub fn forex(from: &str, to: &str) -> Self {
        Self {
            kind: AssetKind::Forex,
            api_symbol: format!("{from}{to}"),
            from_currency: Some(from.to_owned()),
            to_currency: Some(to.to_owned()),
            market: None,
            canonical_symbol: format!("{from}/{to}"),
        }
    }

    pub fn crypto(base: &str, market: &str) -> Self {
        Self {
            kind: AssetKind::Crypto,
            api_symbol: base.to_owned(),
            from_currency: None,
            to_currency: None,
            market: Some(market.to_owned()),
            canonical_symbol: format!("{base}/{market}"),
        }
    }

    /// `normalized` is the trimmed, uppercased input; `original` is kept verbatim.
    pub fn unknown(normalized: impl Into<String>, original: impl Into<String>) -> Self {
        Self {
            kind: AssetKind::Unknown,
            api_symbol: normalized.into(),
            from_currency: None,
            to_currency: None,
            market: None,
            canonical_symbol: original.into(),
        }
    }

    pub fn is_known(&self) -> bool {
        self.kind != AssetKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forex_descriptor_carries_both_legs() {
        let descriptor = AssetDescriptor::forex("EUR", "USD");
        assert_eq!(descriptor.from_currency.as_deref(), Some("EUR"));
        assert_eq!(descriptor.to_currency.as_deref(), Some("USD"));
        assert_eq!(descriptor.canonical_symbol, "EUR/USD");
    }

    #[test]
    fn serializes_in_camel_case_without_empty_legs() {
        let json = serde_json::to_value(AssetDescriptor::stock("AAPL")).expect("serialize");
        assert_eq!(json["kind"], "stock");
        assert_eq!(json["apiSymbol"], "AAPL");
        assert_eq!(json["canonicalSymbol"], "AAPL");
        assert!(json.get("market").is_none());
    }
}
