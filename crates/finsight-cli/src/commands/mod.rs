mod alerts;
mod classify;
mod performance;
mod quote;
mod stream_symbol;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use finsight_core::config::data_dir_from_env;
use finsight_core::{
    AlphaVantageQuoteFetcher, FetchError, ProviderConfig, ReqwestHttpClient,
};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Payload, warnings and inline errors of one command.
#[derive(Debug, Serialize)]
pub struct CommandResult {
    pub command: &'static str,
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<CommandError>,
}

impl CommandResult {
    pub fn ok(command: &'static str, data: Value) -> Self {
        Self {
            command,
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_errors(mut self, errors: Vec<CommandError>) -> Self {
        self.errors.extend(errors);
        self
    }
}

/// Recoverable failure reported in the output instead of aborting the command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandError {
    pub code: String,
    pub message: String,
    pub retryable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl CommandError {
    pub fn from_fetch(symbol: &str, error: &FetchError) -> Self {
        Self {
            code: error.code().to_owned(),
            message: error.to_string(),
            retryable: error.retryable(),
            symbol: Some(symbol.to_owned()),
        }
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    match &cli.command {
        Command::Classify(args) => classify::run(args),
        Command::Quote(args) => quote::run(args, &quote_source(cli)).await,
        Command::StreamSymbol(args) => stream_symbol::run(args),
        Command::Alerts(args) => alerts::run(args, &data_dir(cli), &quote_source(cli)).await,
        Command::Performance(args) => performance::run(args, &data_dir(cli)),
    }
}

fn data_dir(cli: &Cli) -> PathBuf {
    cli.data_dir.clone().unwrap_or_else(data_dir_from_env)
}

fn quote_source(cli: &Cli) -> AlphaVantageQuoteFetcher {
    match cli.timeout_ms {
        Some(timeout_ms) => AlphaVantageQuoteFetcher::new(
            Arc::new(ReqwestHttpClient::with_timeout(Duration::from_millis(
                timeout_ms,
            ))),
            ProviderConfig::from_env(),
        ),
        None => AlphaVantageQuoteFetcher::from_env(),
    }
}
