use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::{get_config_path, save_config, validate_config, Config, ThemeMode};
use crate::gwa::UnitsPolicy;

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

fn parse_count(input: &str, max: usize) -> Result<usize, String> {
    match input.parse::<usize>() {
        Ok(v) if v <= max => Ok(v),
        Ok(_) => Err(format!("must be at most {}", max)),
        Err(_) => Err("must be a whole number".to_string()),
    }
}

fn parse_theme(input: &str) -> Result<ThemeMode, String> {
    match input.to_lowercase().as_str() {
        "auto" => Ok(ThemeMode::Auto),
        "dark" => Ok(ThemeMode::Dark),
        "light" => Ok(ThemeMode::Light),
        other => Err(format!("unknown theme '{}' (auto, dark or light)", other)),
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the suggested config file path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("GWA Calculator Configuration");
    println!("============================");
    println!();

    let defaults = Config::default();

    println!("How many blank rows should the table start with (and return to on reset)?");
    let initial_rows = loop {
        let input = prompt_with_default("Initial rows", &defaults.initial_rows.to_string())?;
        match parse_count(&input, super::MAX_INITIAL_ROWS) {
            Ok(0) => println!("  Invalid: must be at least 1. Try again."),
            Ok(v) => break v,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    println!();
    let decimal_places = loop {
        let input = prompt_with_default(
            "Decimal places shown for the GWA",
            &defaults.decimal_places.to_string(),
        )?;
        match parse_count(&input, super::MAX_DECIMAL_PLACES) {
            Ok(v) => break v,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    println!();
    let theme = loop {
        let input = prompt_with_default("Theme (auto, dark, light)", "auto")?;
        match parse_theme(&input) {
            Ok(t) => break t,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    println!();
    println!("Zero or negative units are accepted by default and simply count toward the totals.");
    let strict = prompt_yes_no("Reject rows with zero or negative units?", false)?;
    let units_policy = if strict {
        UnitsPolicy::Strict
    } else {
        UnitsPolicy::Permissive
    };

    let config = Config {
        initial_rows,
        decimal_places,
        theme,
        units_policy,
    };
    if let Err(errors) = validate_config(&config) {
        anyhow::bail!("Generated config is invalid: {}", errors.join("; "));
    }

    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    save_config(&config_path, &config)?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `gwa-calc` to get started.");

    Ok(())
}
