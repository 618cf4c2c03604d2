use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Change percent reported when the provider does not supply one.
pub const FLAT_CHANGE_PERCENT: &str = "0%";

/// Normalized OHLC + volume snapshot for one symbol.
///
/// Produced fresh per request. Serialized in camelCase to match the shape the
/// dashboard forms consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub price: f64,
    pub volume: f64,
    /// Calendar date (`YYYY-MM-DD`) of the snapshot as reported upstream.
    pub latest_trading_day: String,
    pub previous_close: f64,
    pub change: f64,
    pub change_percent: String,
}

impl Quote {
    /// Quote for an instrument that only reports a single rate, such as an
    /// exchange rate: every price field carries the rate.
    pub fn from_rate(
        symbol: impl Into<String>,
        rate: f64,
        latest_trading_day: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            open: rate,
            high: rate,
            low: rate,
            price: rate,
            volume: 0.0,
            latest_trading_day: latest_trading_day.into(),
            previous_close: 0.0,
            change: 0.0,
            change_percent: String::from(FLAT_CHANGE_PERCENT),
        }
    }
}

/// Today's UTC calendar date as `YYYY-MM-DD`.
pub fn today_utc() -> String {
    OffsetDateTime::now_utc().date().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_quote_is_flat() {
        let quote = Quote::from_rate("EUR/USD", 1.0845, "2024-05-10");
        assert_eq!(quote.open, quote.price);
        assert_eq!(quote.high, quote.price);
        assert_eq!(quote.low, quote.price);
        assert_eq!(quote.volume, 0.0);
        assert_eq!(quote.change_percent, "0%");
    }

    #[test]
    fn today_is_iso_calendar_date() {
        let today = today_utc();
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }

    #[test]
    fn serializes_camel_case_fields() {
        let json = serde_json::to_value(Quote::from_rate("EUR/USD", 1.1, "2024-05-10"))
            .expect("serialize");
        assert_eq!(json["latestTradingDay"], "2024-05-10");
        assert_eq!(json["previousClose"], 0.0);
        assert_eq!(json["changePercent"], "0%");
    }
}
