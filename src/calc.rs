//! The one-shot `calc` command: rows from arguments or a reader, one result out.

use std::io::BufRead;

use crate::config::{validate_config, Config};
use crate::gwa::{compute_with, UnitsPolicy};
use crate::input::{parse_pair_arg, read_rows};
use crate::output::{format_breakdown, format_error, format_json, format_result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INPUT: i32 = 1;
pub const EXIT_RUNTIME: i32 = 2;
pub const EXIT_CONFIG: i32 = 4;

/// Options given to `calc` on the command line
#[derive(Debug, Clone, Default)]
pub struct CalcRequest {
    /// `UNITS:GRADE` pairs. When empty, rows are read from the input reader.
    pub pairs: Vec<String>,
    pub json: bool,
    pub decimal_places: Option<usize>,
    pub strict: bool,
}

/// Exit code plus the lines to print, in order, on each stream
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CalcOutput {
    pub code: i32,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

impl CalcOutput {
    fn fail(code: i32, stderr: Vec<String>) -> Self {
        Self {
            code,
            stdout: Vec::new(),
            stderr,
        }
    }
}

/// Run `calc` against `config`. `input` is only read when no pairs are given.
pub fn run_calc<R: BufRead>(
    config: &Config,
    request: &CalcRequest,
    input: R,
    verbose: bool,
    use_colors: bool,
) -> CalcOutput {
    let mut config = config.clone();
    if let Some(places) = request.decimal_places {
        config.decimal_places = places;
    }
    if request.strict {
        config.units_policy = UnitsPolicy::Strict;
    }
    if let Err(errors) = validate_config(&config) {
        let lines = errors
            .into_iter()
            .map(|e| format!("Invalid option: {}", e))
            .collect();
        return CalcOutput::fail(EXIT_CONFIG, lines);
    }

    let mut stderr = Vec::new();
    let rows = if request.pairs.is_empty() {
        if verbose {
            stderr.push("Reading rows from input".to_string());
        }
        match read_rows(input) {
            Ok(rows) => rows,
            Err(e) => {
                stderr.push(format!("Input error: {:#}", e));
                return CalcOutput::fail(EXIT_INPUT, stderr);
            }
        }
    } else {
        request.pairs.iter().map(|p| parse_pair_arg(p)).collect()
    };

    if verbose {
        stderr.push(format!(
            "Computing over {} rows ({} units)",
            rows.len(),
            config.units_policy
        ));
    }

    let result = compute_with(&rows, config.units_policy);
    let code = if result.is_ok() { EXIT_SUCCESS } else { EXIT_INPUT };

    if request.json {
        return CalcOutput {
            code,
            stdout: vec![format_json(&result, config.decimal_places)],
            stderr,
        };
    }

    let mut stdout = Vec::new();
    match result {
        Ok(gwa) => {
            if verbose {
                stdout.push(format_breakdown(&gwa, config.decimal_places, use_colors));
            }
            stdout.push(format_result(&gwa, config.decimal_places, use_colors));
        }
        Err(e) => stderr.push(format_error(&e, use_colors)),
    }

    CalcOutput {
        code,
        stdout,
        stderr,
    }
}
