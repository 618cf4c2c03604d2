use serde::Serialize;

use finsight_core::{display_symbol, stream_symbol};

use crate::cli::StreamSymbolArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct SymbolMapping {
    symbol: String,
    stream: String,
}

#[derive(Debug, Serialize)]
struct StreamSymbolResponseData {
    mappings: Vec<SymbolMapping>,
}

pub fn run(args: &StreamSymbolArgs) -> Result<CommandResult, CliError> {
    let mappings = args
        .symbols
        .iter()
        .map(|raw| {
            let raw = raw.trim();
            if args.reverse {
                SymbolMapping {
                    symbol: display_symbol(raw),
                    stream: raw.to_owned(),
                }
            } else {
                let symbol = raw.to_uppercase();
                SymbolMapping {
                    stream: stream_symbol(&symbol),
                    symbol,
                }
            }
        })
        .collect();

    let data = serde_json::to_value(StreamSymbolResponseData { mappings })?;
    Ok(CommandResult::ok("stream-symbol", data))
}
