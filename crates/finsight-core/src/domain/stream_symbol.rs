//! Conversion between dashboard symbols and trade-stream subscription names.
//!
//! The live trade feed expects venue-qualified names: forex pairs are routed
//! to OANDA (`OANDA:EUR_USD`) and dollar-quoted crypto to Binance
//! (`BINANCE:BTCUSDT`). Stocks pass through untouched.

const OANDA_PREFIX: &str = "OANDA:";
const BINANCE_PREFIX: &str = "BINANCE:";

/// Subscription name for a dashboard symbol.
pub fn stream_symbol(symbol: &str) -> String {
    if symbol.contains('/') {
        return format!("{OANDA_PREFIX}{}", symbol.replacen('/', "_", 1));
    }

    if symbol.ends_with("USDT") {
        return format!("{BINANCE_PREFIX}{symbol}");
    }

    if let Some(base) = symbol.strip_suffix("USD") {
        return format!("{BINANCE_PREFIX}{base}USDT");
    }

    symbol.to_owned()
}

/// Dashboard symbol for a subscription name produced by [`stream_symbol`].
pub fn display_symbol(stream: &str) -> String {
    if let Some(pair) = stream.strip_prefix(OANDA_PREFIX) {
        return pair.replacen('_', "/", 1);
    }

    stream
        .strip_prefix(BINANCE_PREFIX)
        .unwrap_or(stream)
        .to_owned()
}
