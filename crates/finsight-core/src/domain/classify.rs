//! Lexical symbol classification.
//!
//! Maps a freeform ticker string to an [`AssetDescriptor`] without any
//! network access. Rules are evaluated in a fixed order and the first match
//! wins. Forex rules step aside when a non-fiat base is quoted in a crypto
//! market, so `BTC/USD` reaches the crypto rules:
//!
//! | Order | Shape | Result |
//! |-------|-------|--------|
//! | 1 | `EUR/USD`, `ETH/BTC` (3/3 letters) | Forex |
//! | 2 | `EURUSD`, `ETHBTC` (6 letters) | Forex |
//! | 3 | `BTC/USDT` (2-5 alnum / market code) | Crypto |
//! | 4 | `BTCUSD` (alnum prefix + market suffix) | Crypto |
//! | 5 | `AAPL`, `BRK.B` (<= 5 chars) | Stock |
//! | 6 | anything else | Unknown |

use super::asset::AssetDescriptor;

/// Quote markets accepted for crypto pairs, in matching order.
///
/// Suffix matching walks this list front to back, so `ETHBUSD` resolves to
/// `ETHB/USD` before `BUSD` is ever tried.
pub static CRYPTO_MARKETS: &[&str] = &[
    "USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CNY", "INR", "USDT", "USDC", "BUSD",
];

/// ISO 4217 fiat codes. A pair whose base is listed here stays forex even
/// when its quote is also a crypto market.
pub static FIAT_CURRENCIES: &[&str] = &[
    "AED", "ARS", "AUD", "BGN", "BHD", "BRL", "CAD", "CHF", "CLP", "CNH", "CNY", "COP", "CZK",
    "DKK", "EGP", "EUR", "GBP", "HKD", "HUF", "IDR", "ILS", "INR", "ISK", "JOD", "JPY", "KES",
    "KRW", "KWD", "MAD", "MXN", "MYR", "NGN", "NOK", "NZD", "OMR", "PEN", "PHP", "PKR", "PLN",
    "QAR", "RON", "RSD", "RUB", "SAR", "SEK", "SGD", "THB", "TRY", "TWD", "UAH", "USD", "VND",
    "XAG", "XAU", "ZAR",
];

const FOREX_LEG_LEN: usize = 3;
const MAX_STOCK_LEN: usize = 5;
const CRYPTO_BASE_LEN: std::ops::RangeInclusive<usize> = 2..=5;
const CRYPTO_SUFFIXED_LEN: std::ops::RangeInclusive<usize> = 4..=8;

/// Classify a raw symbol. Total, deterministic and case-insensitive.
pub fn classify(symbol: &str) -> AssetDescriptor {
    let normalized = symbol.trim().to_uppercase();

    classify_forex(&normalized)
        .or_else(|| classify_crypto(&normalized))
        .or_else(|| classify_stock(&normalized))
        .unwrap_or_else(|| AssetDescriptor::unknown(normalized, symbol))
}

pub fn is_crypto_market(code: &str) -> bool {
    CRYPTO_MARKETS.contains(&code)
}

pub fn is_fiat_currency(code: &str) -> bool {
    FIAT_CURRENCIES.binary_search(&code).is_ok()
}

fn classify_forex(normalized: &str) -> Option<AssetDescriptor> {
    let (from, to) = match normalized.split_once('/') {
        Some((from, to)) if normalized.len() == 2 * FOREX_LEG_LEN + 1 => (from, to),
        Some(_) => return None,
        None if normalized.len() == 2 * FOREX_LEG_LEN && is_upper_alpha(normalized) => {
            normalized.split_at(FOREX_LEG_LEN)
        }
        None => return None,
    };

    let is_leg = |leg: &str| leg.len() == FOREX_LEG_LEN && is_upper_alpha(leg);
    if !is_leg(from) || !is_leg(to) {
        return None;
    }

    // A non-fiat base quoted in a crypto market (BTC/USD, BTCUSD) is a crypto pair.
    if is_crypto_market(to) && !is_fiat_currency(from) {
        return None;
    }

    Some(AssetDescriptor::forex(from, to))
}

fn classify_crypto(normalized: &str) -> Option<AssetDescriptor> {
    if let Some((base, market)) = normalized.split_once('/') {
        let base_ok = CRYPTO_BASE_LEN.contains(&base.len()) && is_upper_alnum(base);
        let market_ok = (3..=4).contains(&market.len()) && is_upper_alpha(market);
        if base_ok && market_ok && is_crypto_market(market) {
            return Some(AssetDescriptor::crypto(base, market));
        }
        return None;
    }

    if !CRYPTO_SUFFIXED_LEN.contains(&normalized.chars().count()) {
        return None;
    }

    CRYPTO_MARKETS.iter().find_map(|market| {
        let base = normalized.strip_suffix(market)?;
        if CRYPTO_BASE_LEN.contains(&base.len()) && is_upper_alnum(base) {
            Some(AssetDescriptor::crypto(base, market))
        } else {
            None
        }
    })
}

fn classify_stock(normalized: &str) -> Option<AssetDescriptor> {
    let shaped = !normalized.is_empty()
        && normalized.len() <= MAX_STOCK_LEN
        && normalized
            .chars()
            .all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '.');

    if shaped && !is_crypto_market(normalized) {
        Some(AssetDescriptor::stock(normalized))
    } else {
        None
    }
}

fn is_upper_alpha(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_uppercase())
}

fn is_upper_alnum(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit())
}
