use anyhow::{Context, Result};
use std::io::BufRead;

use crate::gwa::RowInput;

/// Parse a command-line pair such as `3:1.5` or `3,1.5`.
///
/// Text is kept raw; a pair without a separator becomes a row with an empty
/// grade, which the engine reports as an invalid number.
pub fn parse_pair_arg(arg: &str) -> RowInput {
    match arg.split_once([':', ',']) {
        Some((units, grade)) => RowInput::new(units, grade),
        None => RowInput::new(arg, ""),
    }
}

/// Split one line of row text into units and grade.
///
/// Fields are separated by `,`, `;`, a tab, or whitespace. Everything after the
/// first separator is the grade text.
pub fn parse_line(line: &str) -> RowInput {
    let line = line.trim();
    if let Some((units, grade)) = line.split_once([',', ';', '\t']) {
        return RowInput::new(units, grade);
    }
    match line.split_once(char::is_whitespace) {
        Some((units, grade)) => RowInput::new(units, grade),
        None => RowInput::new(line, ""),
    }
}

/// Read rows from a reader, one per line.
///
/// Lines starting with `#` become blank rows, so row numbers in errors match
/// line numbers.
pub fn read_rows<R: BufRead>(reader: R) -> Result<Vec<RowInput>> {
    let mut rows = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read input line {}", i + 1))?;
        if line.trim_start().starts_with('#') {
            rows.push(RowInput::default());
        } else {
            rows.push(parse_line(&line));
        }
    }
    Ok(rows)
}
