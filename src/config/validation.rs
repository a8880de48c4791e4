use super::schema::Config;

pub const MAX_INITIAL_ROWS: usize = 100;
pub const MAX_DECIMAL_PLACES: usize = 10;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.initial_rows == 0 {
        errors.push("initial_rows: must be at least 1".to_string());
    } else if config.initial_rows > MAX_INITIAL_ROWS {
        errors.push(format!(
            "initial_rows: must be at most {} (got {})",
            MAX_INITIAL_ROWS, config.initial_rows
        ));
    }

    if config.decimal_places > MAX_DECIMAL_PLACES {
        errors.push(format!(
            "decimal_places: must be at most {} (got {})",
            MAX_DECIMAL_PLACES, config.decimal_places
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_initial_rows() {
        let config = Config {
            initial_rows: 0,
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("initial_rows"));
    }

    #[test]
    fn test_too_many_initial_rows() {
        let config = Config {
            initial_rows: MAX_INITIAL_ROWS + 1,
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("at most 100"));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let config = Config {
            initial_rows: MAX_INITIAL_ROWS,
            decimal_places: MAX_DECIMAL_PLACES,
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = Config {
            initial_rows: 0,     // Error 1
            decimal_places: 42,  // Error 2
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[1].starts_with("decimal_places"));
    }
}
