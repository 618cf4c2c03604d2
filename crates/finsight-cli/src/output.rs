use serde_json::Value;

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

pub fn render(result: &CommandResult, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => {
            for line in table_lines(result)? {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn table_lines(result: &CommandResult) -> Result<Vec<String>, CliError> {
    let mut lines = vec![format!("command : {}", result.command)];

    if !result.warnings.is_empty() {
        lines.push(String::from("warnings:"));
        lines.extend(result.warnings.iter().map(|warning| format!("  - {warning}")));
    }

    lines.push(String::from("data:"));
    match &result.data {
        Value::Object(fields) if fields.values().all(is_scalar) => {
            let width = fields.keys().map(String::len).max().unwrap_or(0);
            for (key, value) in fields {
                lines.push(format!("  {key:<width$} : {}", scalar(value)));
            }
        }
        other => {
            let pretty = serde_json::to_string_pretty(other)?;
            lines.extend(pretty.lines().map(|line| format!("  {line}")));
        }
    }

    if !result.errors.is_empty() {
        lines.push(String::from("errors:"));
        for error in &result.errors {
            match &error.symbol {
                Some(symbol) => lines.push(format!("  - {symbol}: {}: {}", error.code, error.message)),
                None => lines.push(format!("  - {}: {}", error.code, error.message)),
            }
        }
    }

    Ok(lines)
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
