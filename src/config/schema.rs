use crate::gwa::{UnitsPolicy, DEFAULT_DECIMAL_PLACES};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INITIAL_ROWS: usize = 3;

/// Application configuration.
///
/// Example YAML:
/// ```yaml
/// initial_rows: 3
/// decimal_places: 2
/// theme: auto
/// units_policy: permissive
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Blank rows shown at start-up and after a reset
    #[serde(default = "default_initial_rows")]
    pub initial_rows: usize,

    /// Decimals shown for the computed GWA
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,

    #[serde(default)]
    pub theme: ThemeMode,

    /// Whether zero or negative units are rejected
    #[serde(default)]
    pub units_policy: UnitsPolicy,
}

fn default_initial_rows() -> usize {
    DEFAULT_INITIAL_ROWS
}

fn default_decimal_places() -> usize {
    DEFAULT_DECIMAL_PLACES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_rows: DEFAULT_INITIAL_ROWS,
            decimal_places: DEFAULT_DECIMAL_PLACES,
            theme: ThemeMode::default(),
            units_policy: UnitsPolicy::default(),
        }
    }
}

/// Terminal color scheme selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Detect from the terminal background
    #[default]
    Auto,
    Dark,
    Light,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.initial_rows, 3);
        assert_eq!(config.decimal_places, 2);
        assert_eq!(config.theme, ThemeMode::Auto);
        assert_eq!(config.units_policy, UnitsPolicy::Permissive);
    }

    #[test]
    fn test_empty_config_parse_uses_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
initial_rows: 8
decimal_places: 3
theme: light
units_policy: strict
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.initial_rows, 8);
        assert_eq!(config.decimal_places, 3);
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.units_policy, UnitsPolicy::Strict);
    }

    #[test]
    fn test_partial_config_parse() {
        let config: Config = serde_saphyr::from_str("theme: dark\n").unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.initial_rows, DEFAULT_INITIAL_ROWS);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("rows: 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("units_policy: lenient\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            initial_rows: 5,
            decimal_places: 4,
            theme: ThemeMode::Dark,
            units_policy: UnitsPolicy::Strict,
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
