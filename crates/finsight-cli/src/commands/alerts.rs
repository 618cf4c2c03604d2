use std::path::Path;

use serde::Serialize;
use serde_json::json;
use tracing::info;

use finsight_core::store::ALERTS_FILE;
use finsight_core::{
    create_alert, AlertBook, AlertConfig, AlertNotification, ConditionType, JsonStore, NewAlert,
    NotificationMethod, QuoteSource,
};

use crate::cli::{AlertAddArgs, AlertsArgs, AlertsCommand};
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct AlertListData<'a> {
    alerts: Vec<&'a AlertConfig>,
}

pub async fn run(
    args: &AlertsArgs,
    data_dir: &Path,
    source: &dyn QuoteSource,
) -> Result<CommandResult, CliError> {
    let store = JsonStore::<AlertConfig>::in_dir(data_dir, ALERTS_FILE);
    let mut book = AlertBook::load(&store)?;

    match &args.command {
        AlertsCommand::List(list) => {
            let alerts: Vec<&AlertConfig> = if list.active {
                book.active().collect()
            } else {
                book.list().iter().collect()
            };
            let data = serde_json::to_value(AlertListData { alerts })?;
            Ok(CommandResult::ok("alerts.list", data))
        }
        AlertsCommand::Add(add) => {
            let alert = create_alert(source, new_alert(add)?).await?;
            let mut result = CommandResult::ok("alerts.add", json!({ "alert": &alert }));
            if alert.condition_type == ConditionType::PriceTarget && alert.original_price.is_none()
            {
                result = result.with_warning(format!(
                    "current price of {} unavailable; alert stored without a reference price",
                    alert.asset
                ));
            }

            book.add(alert);
            book.save(&store)?;
            Ok(result)
        }
        AlertsCommand::Toggle(target) => {
            let alert = book.toggle(&target.id)?.clone();
            book.save(&store)?;
            info!(id = %alert.id, active = alert.is_active, "alert toggled");
            Ok(CommandResult::ok("alerts.toggle", json!({ "alert": alert })))
        }
        AlertsCommand::Remove(target) => {
            let removed = book.remove(&target.id)?;
            book.save(&store)?;
            info!(id = %removed.id, "alert removed");
            Ok(CommandResult::ok("alerts.remove", json!({ "alert": removed })))
        }
        AlertsCommand::Trigger(target) => {
            let alert = book.get(&target.id)?;
            let notification = AlertNotification::for_alert(alert);
            info!(id = %alert.id, method = %notification.method, "alert triggered");

            let mut result =
                CommandResult::ok("alerts.trigger", json!({ "notification": notification }));
            if !alert.is_active {
                result = result.with_warning(format!("alert '{}' is paused", alert.name));
            }
            Ok(result)
        }
    }
}

fn new_alert(args: &AlertAddArgs) -> Result<NewAlert, CliError> {
    let condition = args.condition.parse::<ConditionType>()?;
    let method = args.notify.parse::<NotificationMethod>()?;

    let mut alert = NewAlert::new(&args.name, &args.asset, condition, &args.value)
        .with_notification_method(method);
    alert.is_active = !args.inactive;
    Ok(alert)
}
