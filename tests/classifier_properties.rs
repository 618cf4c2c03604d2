//! Behavior tests for symbol classification.
//!
//! Classification is purely lexical: these tests pin the shapes the
//! dashboard accepts and the descriptor each one produces.

use finsight_core::{classify, AssetDescriptor, AssetKind, CRYPTO_MARKETS};

fn forex(from: &str, to: &str) -> AssetDescriptor {
    AssetDescriptor::forex(from, to)
}

fn crypto(base: &str, market: &str) -> AssetDescriptor {
    AssetDescriptor::crypto(base, market)
}

// =============================================================================
// Classifier: Supported Shapes
// =============================================================================

#[test]
fn when_a_slashed_fiat_pair_is_classified_it_becomes_forex() {
    // Given / When
    let descriptor = classify("EUR/USD");

    // Then
    assert_eq!(descriptor, forex("EUR", "USD"));
    assert_eq!(descriptor.from_currency.as_deref(), Some("EUR"));
    assert_eq!(descriptor.to_currency.as_deref(), Some("USD"));
}

#[test]
fn when_a_fiat_pair_has_no_separator_it_resolves_to_the_same_forex_pair() {
    assert_eq!(classify("EURUSD"), classify("EUR/USD"));
    assert_eq!(classify("gbpjpy").canonical_symbol, "GBP/JPY");
}

#[test]
fn when_a_three_letter_pair_is_not_quoted_in_a_crypto_market_it_stays_forex() {
    // Given: pairs whose quote leg is not a crypto market
    let inputs = ["ETH/BTC", "XRP/ETH", "BTCETH", "ABC/DEF", "BTC/XYZ"];

    for input in inputs {
        // When
        let descriptor = classify(input);

        // Then: the exchange-rate endpoint serves them as forex
        assert_eq!(descriptor.kind, AssetKind::Forex, "{input}");
    }
    assert_eq!(classify("ETH/BTC"), forex("ETH", "BTC"));
    assert_eq!(classify("btceth").canonical_symbol, "BTC/ETH");
}

#[test]
fn when_a_fiat_base_is_quoted_in_a_crypto_market_it_stays_forex() {
    assert_eq!(classify("GBP/USD"), forex("GBP", "USD"));
    assert_eq!(classify("USDEUR"), forex("USD", "EUR"));
}

#[test]
fn when_a_crypto_pair_is_classified_the_base_and_market_are_split() {
    // Given: the same pair in slashed and suffixed form
    let slashed = classify("BTC/USD");
    let suffixed = classify("BTCUSD");

    // Then: both are crypto with the base as api symbol
    assert_eq!(slashed, crypto("BTC", "USD"));
    assert_eq!(suffixed, crypto("BTC", "USD"));
    assert_eq!(slashed.api_symbol, "BTC");
    assert_eq!(slashed.market.as_deref(), Some("USD"));
}

#[test]
fn when_a_stablecoin_market_is_used_the_whole_code_is_the_market() {
    assert_eq!(classify("BTC/USDT"), crypto("BTC", "USDT"));
    assert_eq!(classify("ethusdt"), crypto("ETH", "USDT"));
    assert_eq!(classify("SOLUSDC"), crypto("SOL", "USDC"));
}

#[test]
fn when_several_market_suffixes_match_the_first_listed_market_wins() {
    // Given: USD precedes BUSD in the market list
    let usd = CRYPTO_MARKETS.iter().position(|m| *m == "USD");
    let busd = CRYPTO_MARKETS.iter().position(|m| *m == "BUSD");
    assert!(usd < busd);

    // When / Then
    assert_eq!(classify("BNBBUSD"), crypto("BNBB", "USD"));
}

#[test]
fn when_a_short_ticker_is_classified_it_becomes_a_stock() {
    let descriptor = classify("AAPL");
    assert_eq!(descriptor.kind, AssetKind::Stock);
    assert_eq!(descriptor.api_symbol, "AAPL");
    assert_eq!(descriptor.canonical_symbol, "AAPL");

    assert_eq!(classify("brk.b").api_symbol, "BRK.B");
    assert_eq!(classify("  msft ").kind, AssetKind::Stock);
}

// =============================================================================
// Classifier: Rejections
// =============================================================================

#[test]
fn when_the_input_is_empty_it_is_unknown() {
    assert_eq!(classify("").kind, AssetKind::Unknown);
    assert_eq!(classify("   ").kind, AssetKind::Unknown);
}

#[test]
fn when_a_market_code_stands_alone_it_is_not_a_stock() {
    for code in CRYPTO_MARKETS {
        assert_eq!(classify(code).kind, AssetKind::Unknown, "{code}");
    }
}

#[test]
fn when_the_shape_is_unsupported_the_original_input_is_kept() {
    // Given
    let raw = "  Berkshire Hathaway ";

    // When
    let descriptor = classify(raw);

    // Then
    assert_eq!(descriptor.kind, AssetKind::Unknown);
    assert_eq!(descriptor.api_symbol, "BERKSHIRE HATHAWAY");
    assert_eq!(descriptor.canonical_symbol, raw);
    assert!(!descriptor.is_known());
}

#[test]
fn when_a_slashed_pair_has_an_unsupported_market_it_is_unknown() {
    assert_eq!(classify("BTC/XYZW").kind, AssetKind::Unknown);
    assert_eq!(classify("B/USD").kind, AssetKind::Unknown);
    assert_eq!(classify("EUR/USD/JPY").kind, AssetKind::Unknown);
}

// =============================================================================
// Classifier: Properties
// =============================================================================

#[test]
fn classification_is_deterministic_and_case_insensitive() {
    let inputs = [
        "aapl", "AAPL", "eur/usd", "EURUSD", "btc/usd", "BtcUsdt", "", "???", "brk.b", "ETHBUSD",
        "toolongticker", "12345", "usd",
    ];

    for input in inputs {
        // When: classified twice, and again in upper case
        let first = classify(input);
        let second = classify(input);
        let upper = classify(&input.to_uppercase());

        // Then: structurally equal, and only Unknown keeps the caller's casing
        assert_eq!(first, second, "{input}");
        assert_eq!(first.kind, upper.kind, "{input}");
        assert_eq!(first.api_symbol, upper.api_symbol, "{input}");
        if first.is_known() {
            assert_eq!(first, upper, "{input}");
        }
    }
}
