use std::path::Path;

use serde_json::json;
use time::OffsetDateTime;
use tracing::info;

use finsight_core::store::PERFORMANCE_FILE;
use finsight_core::{HistoricalPrediction, JsonStore, ManualFlag, PerformanceLedger};

use crate::cli::{PerformanceArgs, PerformanceCommand};
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &PerformanceArgs, data_dir: &Path) -> Result<CommandResult, CliError> {
    let store = JsonStore::<HistoricalPrediction>::in_dir(data_dir, PERFORMANCE_FILE);
    let mut ledger = PerformanceLedger::load(&store)?;

    match &args.command {
        PerformanceCommand::List => Ok(CommandResult::ok(
            "performance.list",
            json!({ "predictions": ledger.list() }),
        )),
        PerformanceCommand::Import(import) => {
            let contents =
                std::fs::read_to_string(&import.file).map_err(|source| CliError::Io {
                    path: import.file.display().to_string(),
                    source,
                })?;
            let incoming = serde_json::from_str::<Vec<HistoricalPrediction>>(&contents)?;
            for prediction in &incoming {
                prediction.day()?;
            }

            let received = incoming.len();
            let imported = ledger.merge_new(incoming);
            ledger.save(&store)?;
            info!(received, imported, "predictions imported");

            Ok(CommandResult::ok(
                "performance.import",
                json!({
                    "received": received,
                    "imported": imported,
                    "total": ledger.list().len(),
                }),
            ))
        }
        PerformanceCommand::Flag(flag) => {
            let manual_flag = flag.flag.parse::<ManualFlag>()?;
            let prediction = ledger.flag(&flag.id, manual_flag)?.clone();
            ledger.save(&store)?;
            Ok(CommandResult::ok(
                "performance.flag",
                json!({ "prediction": prediction }),
            ))
        }
        PerformanceCommand::Remove(target) => {
            let removed = ledger.remove(&target.id)?;
            ledger.save(&store)?;
            Ok(CommandResult::ok(
                "performance.remove",
                json!({ "prediction": removed }),
            ))
        }
        PerformanceCommand::Stats => {
            let stats = ledger.stats(OffsetDateTime::now_utc().date());
            Ok(CommandResult::ok(
                "performance.stats",
                serde_json::to_value(stats)?,
            ))
        }
    }
}
