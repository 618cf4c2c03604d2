use serde::Serialize;

use finsight_core::config::API_KEY_ENV;
use finsight_core::{FetchError, QuoteFetch, QuoteSource};

use crate::cli::QuoteArgs;
use crate::error::CliError;

use super::{CommandError, CommandResult};

#[derive(Debug, Serialize)]
struct QuoteResponseData {
    quotes: Vec<QuoteFetch>,
}

pub async fn run(args: &QuoteArgs, source: &dyn QuoteSource) -> Result<CommandResult, CliError> {
    let mut quotes = Vec::with_capacity(args.symbols.len());
    let mut errors = Vec::new();
    let mut unconfigured = false;

    for symbol in &args.symbols {
        match source.fetch_quote(symbol).await {
            Ok(fetched) => quotes.push(fetched),
            Err(error) => {
                unconfigured |= error == FetchError::Configuration;
                errors.push(CommandError::from_fetch(symbol, &error));
            }
        }
    }

    let data = serde_json::to_value(QuoteResponseData { quotes })?;
    let mut result = CommandResult::ok("quote", data).with_errors(errors);
    if unconfigured {
        result = result.with_warning(format!(
            "set {API_KEY_ENV} to enable live quotes, or enter prices manually"
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::pin::Pin;

    use finsight_core::{AssetKind, FetchResult};

    use super::*;

    struct FailingSource(FetchError);

    impl QuoteSource for FailingSource {
        fn fetch_quote<'a>(
            &'a self,
            _symbol: &'a str,
        ) -> Pin<Box<dyn Future<Output = FetchResult> + Send + 'a>> {
            let error = self.0.clone();
            Box::pin(async move { Err(error) })
        }
    }

    #[tokio::test]
    async fn missing_key_is_reported_inline_with_a_hint() {
        let args = QuoteArgs {
            symbols: vec![String::from("AAPL")],
        };

        let result = run(&args, &FailingSource(FetchError::Configuration))
            .await
            .expect("command succeeds");

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, "quote.configuration");
        assert_eq!(result.errors[0].symbol.as_deref(), Some("AAPL"));
        assert!(result.warnings[0].contains("ALPHAVANTAGE_API_KEY"));
        assert_eq!(result.data["quotes"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn transport_errors_are_marked_retryable() {
        let args = QuoteArgs {
            symbols: vec![String::from("EUR/USD")],
        };
        let source = FailingSource(FetchError::transport(
            AssetKind::Forex,
            "Forex API request failed: Service Unavailable",
        ));

        let result = run(&args, &source).await.expect("command succeeds");

        assert!(result.errors[0].retryable);
        assert!(result.warnings.is_empty());
    }
}
