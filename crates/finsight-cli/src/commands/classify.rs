use serde::Serialize;

use finsight_core::{classify, AssetDescriptor};

use crate::cli::ClassifyArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ClassifyResponseData {
    descriptors: Vec<AssetDescriptor>,
}

pub fn run(args: &ClassifyArgs) -> Result<CommandResult, CliError> {
    let descriptors = args
        .symbols
        .iter()
        .map(|raw| classify(raw))
        .collect::<Vec<_>>();

    let warnings = descriptors
        .iter()
        .filter(|descriptor| !descriptor.is_known())
        .map(|descriptor| {
            format!(
                "symbol '{}' not recognized; try AAPL, EUR/USD or BTC/USD",
                descriptor.canonical_symbol
            )
        })
        .collect();

    let data = serde_json::to_value(ClassifyResponseData { descriptors })?;
    Ok(CommandResult::ok("classify", data).with_warnings(warnings))
}
