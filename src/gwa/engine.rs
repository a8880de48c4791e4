use super::types::{Column, ComputationResult, ComputeError, Gwa, ParsedEntry, RowInput, UnitsPolicy};

/// Default number of decimals shown for a GWA
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

/// Compute the weighted average of `rows` with the permissive units policy.
///
/// Blank rows are skipped. The first row that fails to parse stops the pass.
pub fn compute(rows: &[RowInput]) -> ComputationResult {
    compute_with(rows, UnitsPolicy::Permissive)
}

pub fn compute_with(rows: &[RowInput], policy: UnitsPolicy) -> ComputationResult {
    let mut total_weighted = 0.0_f64;
    let mut total_units: i64 = 0;
    let mut entries = Vec::new();

    for (row, input) in rows.iter().enumerate() {
        let entry = match parse_entry(row, input)? {
            Some(entry) => entry,
            None => continue,
        };

        if policy == UnitsPolicy::Strict && entry.units <= 0 {
            return Err(ComputeError::NonPositiveUnits {
                row,
                units: entry.units,
            });
        }

        total_weighted += entry.weighted();
        // A huge grade can overflow the sum; blame the row that pushed it over
        if !total_weighted.is_finite() {
            return Err(ComputeError::InvalidNumber {
                row,
                field: Column::Grade,
            });
        }
        total_units += i64::from(entry.units);
        entries.push(entry);
    }

    if total_units == 0 {
        return Err(ComputeError::ZeroTotalUnits {
            entries: entries.len(),
        });
    }

    Ok(Gwa {
        value: total_weighted / total_units as f64,
        total_units,
        total_weighted,
        entries,
    })
}

/// Parse one row. `Ok(None)` for a blank row.
pub fn parse_entry(row: usize, input: &RowInput) -> Result<Option<ParsedEntry>, ComputeError> {
    let units_text = input.units.trim();
    let grade_text = input.grade.trim();

    if units_text.is_empty() && grade_text.is_empty() {
        return Ok(None);
    }

    let units = parse_units(units_text).ok_or(ComputeError::InvalidNumber {
        row,
        field: Column::Units,
    })?;
    let grade = parse_grade(grade_text).ok_or(ComputeError::InvalidNumber {
        row,
        field: Column::Grade,
    })?;

    Ok(Some(ParsedEntry { row, units, grade }))
}

fn parse_units(text: &str) -> Option<i32> {
    text.parse().ok()
}

// NaN and infinities parse as f64 but are not grades
fn parse_grade(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|g| g.is_finite())
}

/// Format a GWA for display with two decimal places
pub fn format_gwa(value: f64) -> String {
    format_gwa_with(value, DEFAULT_DECIMAL_PLACES)
}

pub fn format_gwa_with(value: f64, decimal_places: usize) -> String {
    format!("{:.*}", decimal_places, value)
}
