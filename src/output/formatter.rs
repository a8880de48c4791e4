use std::io::IsTerminal;
use owo_colors::OwoColorize;
use serde_json::json;

use crate::gwa::{format_gwa_with, ComputationResult, ComputeError, Gwa};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format the result line: "GWA: 1.81"
pub fn format_result(gwa: &Gwa, decimal_places: usize, use_colors: bool) -> String {
    let value = format_gwa_with(gwa.value(), decimal_places);
    if use_colors {
        format!("{} {}", "GWA:".bold(), value.green().bold())
    } else {
        format!("GWA: {}", value)
    }
}

/// Per-row contribution lines followed by the totals (for verbose mode)
pub fn format_breakdown(gwa: &Gwa, decimal_places: usize, use_colors: bool) -> String {
    let mut lines: Vec<String> = gwa
        .entries
        .iter()
        .map(|entry| {
            let row = format!("Row {:>3}", entry.row + 1);
            let detail = format!(
                "{:>4} units x {:>8} = {}",
                entry.units,
                format_gwa_with(entry.grade, decimal_places),
                format_gwa_with(entry.weighted(), decimal_places)
            );
            if use_colors {
                format!("  {}  {}", row.dimmed(), detail)
            } else {
                format!("  {}  {}", row, detail)
            }
        })
        .collect();

    lines.push(format!(
        "  Total: {} units, weighted sum {}",
        gwa.total_units,
        format_gwa_with(gwa.total_weighted, decimal_places)
    ));
    lines.join("\n")
}

/// Format a failure for stderr
pub fn format_error(err: &ComputeError, use_colors: bool) -> String {
    if use_colors {
        format!("{} {}", "Error:".red().bold(), err)
    } else {
        format!("Error: {}", err)
    }
}

/// Machine-readable result
pub fn format_json(result: &ComputationResult, decimal_places: usize) -> String {
    let value = match result {
        Ok(gwa) => json!({
            "gwa": gwa.value(),
            "formatted": format_gwa_with(gwa.value(), decimal_places),
            "total_units": gwa.total_units,
            "entries": gwa.entries.len(),
        }),
        Err(e) => {
            let mut value = json!({
                "error": e.kind(),
                "message": e.to_string(),
            });
            match e {
                ComputeError::InvalidNumber { row, field } => {
                    value["row"] = json!(row + 1);
                    value["field"] = json!(field);
                }
                ComputeError::NonPositiveUnits { row, units } => {
                    value["row"] = json!(row + 1);
                    value["units"] = json!(units);
                }
                ComputeError::ZeroTotalUnits { .. } => {}
            }
            value
        }
    };
    value.to_string()
}
