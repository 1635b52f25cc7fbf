//! Rendering assignments for stdout.

use anyhow::Result;
use devsel_common::EnvironmentAssignment;

use crate::config::OutputFormat;

/// Render `assignments` in `format`. Text formats end each line with `\n`;
/// an empty list renders as an empty string (or `[]` for JSON).
pub fn render(assignments: &[EnvironmentAssignment], format: OutputFormat) -> Result<String> {
    let rendered: String = match format {
        OutputFormat::Shell => assignments
            .iter()
            .map(|env| format!("export {}={}\n", env.name(), shell_quote(env.value())))
            .collect(),
        OutputFormat::Plain => assignments.iter().map(|env| format!("{env}\n")).collect(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(assignments)?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

/// Single-quote `value` for POSIX shells.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
