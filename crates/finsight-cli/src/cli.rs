//! CLI argument definitions for FinSight.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `classify` | Classify symbols as stock, forex, crypto or unknown |
//! | `quote` | Fetch the latest quote for symbols |
//! | `stream-symbol` | Map symbols to trade-stream subscription names |
//! | `alerts` | Manage price and signal alerts |
//! | `performance` | Manage the prediction ledger and its stats |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--data-dir` | `$FINSIGHT_DATA_DIR` or `.finsight` | Alert and ledger store directory |
//! | `--timeout-ms` | none | Per-request HTTP timeout |
//!
//! # Examples
//!
//! ```bash
//! finsight classify AAPL EUR/USD btcusdt
//! finsight quote EUR/USD --pretty
//! finsight alerts add "BTC breakout" BTC/USD --value 70000
//! finsight performance stats --format table
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// FinSight - market-data toolkit for the trading dashboard
#[derive(Debug, Parser)]
#[command(
    name = "finsight",
    author,
    version,
    about = "Symbol classification, live quotes, alerts and prediction stats",
    long_about = "FinSight classifies freeform market symbols, fetches normalized quotes from \
Alpha Vantage, and keeps the dashboard's alerts and prediction history in local JSON stores.\n\
\n\
Live quotes need ALPHAVANTAGE_API_KEY in the environment or a .env file.\n\
\n\
Use 'finsight <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Directory holding alerts.json and performance.json.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Per-request HTTP timeout in milliseconds. No timeout when omitted.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Key/value layout for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify one or more symbols without touching the network.
    ///
    ///   finsight classify AAPL EUR/USD BTCUSDT
    Classify(ClassifyArgs),

    /// Fetch the latest quote for one or more symbols.
    ///
    ///   finsight quote MSFT
    ///   finsight quote EUR/USD BTC/USD --pretty
    Quote(QuoteArgs),

    /// Map dashboard symbols to trade-stream subscription names.
    ///
    ///   finsight stream-symbol EUR/USD BTCUSD
    ///   finsight stream-symbol --reverse OANDA:EUR_USD
    StreamSymbol(StreamSymbolArgs),

    /// Manage price and signal alerts.
    Alerts(AlertsArgs),

    /// Manage the prediction ledger.
    Performance(PerformanceArgs),
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Symbols in any supported format (AAPL, EUR/USD, EURUSD, BTC/USD, BTCUSDT).
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,
}

#[derive(Debug, Args)]
pub struct StreamSymbolArgs {
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,

    /// Treat inputs as subscription names and map them back.
    #[arg(long, default_value_t = false)]
    pub reverse: bool,
}

#[derive(Debug, Args)]
pub struct AlertsArgs {
    #[command(subcommand)]
    pub command: AlertsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AlertsCommand {
    /// List stored alerts, newest first.
    List(AlertListArgs),
    /// Create an alert. Price targets record the current price as reference.
    Add(AlertAddArgs),
    /// Pause or resume an alert.
    Toggle(AlertIdArgs),
    /// Delete an alert.
    Remove(AlertIdArgs),
    /// Render the notification an alert would send.
    Trigger(AlertIdArgs),
}

#[derive(Debug, Args)]
pub struct AlertListArgs {
    /// Only show active alerts.
    #[arg(long, default_value_t = false)]
    pub active: bool,
}

#[derive(Debug, Args)]
pub struct AlertAddArgs {
    /// Alert name (at least 3 characters).
    pub name: String,

    /// Asset symbol, e.g. BTC/USD.
    pub asset: String,

    /// price_target, confidence_change or pattern_detected.
    #[arg(long, default_value = "price_target")]
    pub condition: String,

    /// Target value for the condition, e.g. 70000 or 85%.
    #[arg(long)]
    pub value: String,

    /// email, sms or in-app.
    #[arg(long, default_value = "in-app")]
    pub notify: String,

    /// Store the alert paused.
    #[arg(long, default_value_t = false)]
    pub inactive: bool,
}

#[derive(Debug, Args)]
pub struct AlertIdArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct PerformanceArgs {
    #[command(subcommand)]
    pub command: PerformanceCommand,
}

#[derive(Debug, Subcommand)]
pub enum PerformanceCommand {
    /// List recorded predictions, newest first.
    List,
    /// Merge predictions from a JSON array file. Known ids are skipped.
    Import(PerformanceImportArgs),
    /// Mark a prediction as successful or unsuccessful.
    Flag(PerformanceFlagArgs),
    /// Delete a prediction.
    Remove(PredictionIdArgs),
    /// Win rate, streak and best asset over flagged predictions.
    Stats,
}

#[derive(Debug, Args)]
pub struct PerformanceImportArgs {
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct PerformanceFlagArgs {
    pub id: String,

    /// successful or unsuccessful.
    pub flag: String,
}

#[derive(Debug, Args)]
pub struct PredictionIdArgs {
    pub id: String,
}
