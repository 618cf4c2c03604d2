//! Alpha Vantage quote fetcher.
//!
//! One classified symbol maps to exactly one of three endpoints:
//!
//! | Kind | Function | Payload key |
//! |------|----------|-------------|
//! | Stock | `GLOBAL_QUOTE` | `Global Quote` |
//! | Forex | `CURRENCY_EXCHANGE_RATE` | `Realtime Currency Exchange Rate` |
//! | Crypto | `DIGITAL_CURRENCY_DAILY` | `Time Series (Digital Currency Daily)` |
//!
//! Provider advisories (`Note`, `Information`) are logged and never fail a
//! call. There is no retry and no internal timeout.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{Credentials, ProviderConfig, DEFAULT_BASE_URL};
use crate::domain::{classify, today_utc, AssetDescriptor, AssetKind, Quote, FLAT_CHANGE_PERCENT};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::quote_source::{FetchError, FetchResult, QuoteFetch, QuoteSource};

/// Stands in for the API key in logged URLs.
const REDACTED_KEY: &str = "***";

/// Alpha Vantage backed [`QuoteSource`].
#[derive(Clone)]
pub struct AlphaVantageQuoteFetcher {
    http_client: Arc<dyn HttpClient>,
    config: ProviderConfig,
}

impl Default for AlphaVantageQuoteFetcher {
    fn default() -> Self {
        Self::from_env()
    }
}

impl AlphaVantageQuoteFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>, config: ProviderConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// reqwest transport, key and base URL taken from the environment.
    pub fn from_env() -> Self {
        Self::new(Arc::new(ReqwestHttpClient::default()), ProviderConfig::from_env())
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, credentials: Credentials) -> Self {
        Self::new(http_client, ProviderConfig::new(DEFAULT_BASE_URL, credentials))
    }

    /// Classify `symbol` and fetch its quote from the matching endpoint.
    pub async fn fetch(&self, symbol: &str) -> FetchResult {
        let Some(api_key) = self.config.credentials.resolve() else {
            warn!("alphavantage API key is not configured; live quote fetching is disabled");
            return Err(FetchError::Configuration);
        };

        let descriptor = classify(symbol);
        let quote = match descriptor.kind {
            AssetKind::Unknown => return Err(FetchError::classification(symbol)),
            AssetKind::Stock => self.fetch_stock(&descriptor, &api_key).await,
            AssetKind::Forex => self.fetch_forex(&descriptor, &api_key).await,
            AssetKind::Crypto => self.fetch_crypto(&descriptor, &api_key).await,
        };

        quote.map(|quote| QuoteFetch {
            quote,
            kind: descriptor.kind,
        })
    }

    async fn fetch_stock(
        &self,
        descriptor: &AssetDescriptor,
        api_key: &str,
    ) -> Result<Quote, FetchError> {
        let kind = AssetKind::Stock;
        let response: GlobalQuoteResponse = self
            .query(
                kind,
                &[("function", "GLOBAL_QUOTE"), ("symbol", descriptor.api_symbol.as_str())],
                api_key,
            )
            .await?;

        if let Some(message) = response.advisories.error_message {
            return Err(FetchError::data(
                kind,
                format!("Quote service (Stock): {message}"),
            ));
        }
        response.advisories.log(kind);

        let fields = response
            .quote
            .filter(|fields| !fields.is_empty())
            .ok_or_else(|| {
                FetchError::data(
                    kind,
                    format!(
                        "No stock data for \"{}\". It may be unsupported or not a stock.",
                        descriptor.api_symbol
                    ),
                )
            })?;

        let symbol = fields
            .symbol
            .clone()
            .filter(|symbol| !symbol.is_empty())
            .unwrap_or_else(|| descriptor.canonical_symbol.clone());

        Ok(Quote {
            open: parse_number(kind, &symbol, "open", fields.open.as_deref())?,
            high: parse_number(kind, &symbol, "high", fields.high.as_deref())?,
            low: parse_number(kind, &symbol, "low", fields.low.as_deref())?,
            price: parse_number(kind, &symbol, "price", fields.price.as_deref())?,
            volume: parse_number(kind, &symbol, "volume", fields.volume.as_deref())?,
            latest_trading_day: fields.latest_trading_day.unwrap_or_else(today_utc),
            previous_close: parse_number(
                kind,
                &symbol,
                "previous close",
                fields.previous_close.as_deref(),
            )?,
            change: parse_number(kind, &symbol, "change", fields.change.as_deref())?,
            change_percent: fields
                .change_percent
                .unwrap_or_else(|| String::from(FLAT_CHANGE_PERCENT)),
            symbol,
        })
    }

    async fn fetch_forex(
        &self,
        descriptor: &AssetDescriptor,
        api_key: &str,
    ) -> Result<Quote, FetchError> {
        let kind = AssetKind::Forex;
        let from = descriptor.from_currency.as_deref().unwrap_or_default();
        let to = descriptor.to_currency.as_deref().unwrap_or_default();

        let response: ExchangeRateResponse = self
            .query(
                kind,
                &[
                    ("function", "CURRENCY_EXCHANGE_RATE"),
                    ("from_currency", from),
                    ("to_currency", to),
                ],
                api_key,
            )
            .await?;

        if let Some(message) = response.advisories.error_message {
            return Err(FetchError::data(kind, message));
        }
        response.advisories.log(kind);

        let rate = response
            .rate
            .ok_or_else(|| FetchError::data(kind, format!("No Forex data for {from}/{to}.")))?;

        let price = parse_number(
            kind,
            &descriptor.canonical_symbol,
            "exchange rate",
            rate.exchange_rate.as_deref(),
        )?;
        let latest_trading_day = rate
            .last_refreshed
            .as_deref()
            .and_then(|value| value.split(' ').next())
            .filter(|day| !day.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(today_utc);

        Ok(Quote::from_rate(
            descriptor.canonical_symbol.clone(),
            price,
            latest_trading_day,
        ))
    }

    async fn fetch_crypto(
        &self,
        descriptor: &AssetDescriptor,
        api_key: &str,
    ) -> Result<Quote, FetchError> {
        let kind = AssetKind::Crypto;
        let market = descriptor.market.as_deref().unwrap_or_default();

        let response: DigitalCurrencyDailyResponse = self
            .query(
                kind,
                &[
                    ("function", "DIGITAL_CURRENCY_DAILY"),
                    ("symbol", descriptor.api_symbol.as_str()),
                    ("market", market),
                ],
                api_key,
            )
            .await?;

        if let Some(message) = response.advisories.error_message {
            return Err(FetchError::data(kind, message));
        }
        response.advisories.log(kind);

        let time_series = response.time_series.ok_or_else(|| {
            FetchError::data(
                kind,
                format!(
                    "No Crypto time series data for {}/{market}.",
                    descriptor.api_symbol
                ),
            )
        })?;

        // ISO dates sort chronologically, so the last key is the latest day.
        let (latest_date, day) = time_series
            .last_key_value()
            .ok_or_else(|| FetchError::data(kind, "No latest date in crypto time series."))?;

        let symbol = descriptor.canonical_symbol.as_str();
        let ohlc = |field: &'static str, qualified: String, plain: &str| {
            let raw = crypto_field(day, &qualified).or_else(|| crypto_field(day, plain));
            parse_number(kind, symbol, field, raw.as_deref())
        };

        let volume = match crypto_field(day, "5. volume") {
            Some(raw) => parse_number(kind, symbol, "volume", Some(&raw))?,
            None => 0.0,
        };

        Ok(Quote {
            symbol: symbol.to_owned(),
            open: ohlc("open", format!("1a. open ({market})"), "1. open")?,
            high: ohlc("high", format!("2a. high ({market})"), "2. high")?,
            low: ohlc("low", format!("3a. low ({market})"), "3. low")?,
            price: ohlc("close", format!("4a. close ({market})"), "4. close")?,
            volume,
            latest_trading_day: latest_date.clone(),
            previous_close: 0.0,
            change: 0.0,
            change_percent: String::from(FLAT_CHANGE_PERCENT),
        })
    }

    /// Issue one GET against the query endpoint and decode the JSON body.
    async fn query<T: DeserializeOwned>(
        &self,
        kind: AssetKind,
        params: &[(&str, &str)],
        api_key: &str,
    ) -> Result<T, FetchError> {
        debug!(
            kind = %kind,
            url = %self.redacted_url(params),
            "alphavantage request"
        );

        let response = self
            .http_client
            .execute(HttpRequest::get(self.build_url(params, api_key)))
            .await
            .map_err(|error| {
                warn!(
                    kind = %kind,
                    error = %error,
                    retryable = error.retryable(),
                    "alphavantage transport error"
                );
                FetchError::transport(kind, error.message())
            })?;

        if !response.is_success() {
            let status_text = if response.status_text.is_empty() {
                response.status.to_string()
            } else {
                response.status_text
            };
            return Err(FetchError::transport(
                kind,
                format!("{} API request failed: {status_text}", kind.label()),
            ));
        }

        serde_json::from_str(&response.body).map_err(|error| {
            FetchError::data(
                kind,
                format!("{} API returned an unreadable response: {error}", kind.label()),
            )
        })
    }

    fn build_url(&self, params: &[(&str, &str)], api_key: &str) -> String {
        format!(
            "{}&apikey={}",
            self.endpoint(params),
            urlencoding::encode(api_key)
        )
    }

    /// Request URL with the key replaced by [`REDACTED_KEY`].
    fn redacted_url(&self, params: &[(&str, &str)]) -> String {
        format!("{}&apikey={REDACTED_KEY}", self.endpoint(params))
    }

    fn endpoint(&self, params: &[(&str, &str)]) -> String {
        let query = params
            .iter()
            .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        if self.config.base_url.contains('?') {
            format!("{}&{query}", self.config.base_url)
        } else {
            format!("{}?{query}", self.config.base_url)
        }
    }
}

impl QuoteSource for AlphaVantageQuoteFetcher {
    fn fetch_quote<'a>(
        &'a self,
        symbol: &'a str,
    ) -> Pin<Box<dyn Future<Output = FetchResult> + Send + 'a>> {
        Box::pin(self.fetch(symbol))
    }
}

/// Error and advisory fields any Alpha Vantage payload may carry.
#[derive(Debug, Default, Deserialize)]
struct Advisories {
    #[serde(rename = "Error Message", default)]
    error_message: Option<String>,
    #[serde(rename = "Note", default)]
    note: Option<String>,
    #[serde(rename = "Information", default)]
    information: Option<String>,
}

impl Advisories {
    fn log(&self, kind: AssetKind) {
        if let Some(note) = &self.note {
            warn!(kind = %kind, "alphavantage note: {note}");
        }
        if let Some(information) = &self.information {
            warn!(kind = %kind, "alphavantage information: {information}");
        }
    }
}

#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote", default)]
    quote: Option<GlobalQuoteFields>,
    #[serde(flatten)]
    advisories: Advisories,
}

#[derive(Debug, Default, Deserialize)]
struct GlobalQuoteFields {
    #[serde(rename = "01. symbol", default)]
    symbol: Option<String>,
    #[serde(rename = "02. open", default)]
    open: Option<String>,
    #[serde(rename = "03. high", default)]
    high: Option<String>,
    #[serde(rename = "04. low", default)]
    low: Option<String>,
    #[serde(rename = "05. price", default)]
    price: Option<String>,
    #[serde(rename = "06. volume", default)]
    volume: Option<String>,
    #[serde(rename = "07. latest trading day", default)]
    latest_trading_day: Option<String>,
    #[serde(rename = "08. previous close", default)]
    previous_close: Option<String>,
    #[serde(rename = "09. change", default)]
    change: Option<String>,
    #[serde(rename = "10. change percent", default)]
    change_percent: Option<String>,
}

impl GlobalQuoteFields {
    fn is_empty(&self) -> bool {
        self.symbol.is_none()
            && self.open.is_none()
            && self.high.is_none()
            && self.low.is_none()
            && self.price.is_none()
            && self.volume.is_none()
            && self.latest_trading_day.is_none()
            && self.previous_close.is_none()
            && self.change.is_none()
            && self.change_percent.is_none()
    }
}

#[derive(Debug, Deserialize)]
struct ExchangeRateResponse {
    #[serde(rename = "Realtime Currency Exchange Rate", default)]
    rate: Option<ExchangeRateFields>,
    #[serde(flatten)]
    advisories: Advisories,
}

#[derive(Debug, Deserialize)]
struct ExchangeRateFields {
    #[serde(rename = "5. Exchange Rate", default)]
    exchange_rate: Option<String>,
    #[serde(rename = "6. Last Refreshed", default)]
    last_refreshed: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DigitalCurrencyDailyResponse {
    #[serde(rename = "Time Series (Digital Currency Daily)", default)]
    time_series: Option<BTreeMap<String, BTreeMap<String, Value>>>,
    #[serde(flatten)]
    advisories: Advisories,
}

/// Non-empty field value as text; numbers are accepted as well as strings.
fn crypto_field(day: &BTreeMap<String, Value>, key: &str) -> Option<String> {
    match day.get(key)? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn parse_number(
    kind: AssetKind,
    symbol: &str,
    field: &str,
    raw: Option<&str>,
) -> Result<f64, FetchError> {
    raw.map(str::trim)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            FetchError::data(
                kind,
                format!("Quote service returned no valid {field} for {symbol}."),
            )
        })
}
