use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Cycle size is at least 1
/// - Spin duration is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.game.cycle_size == 0 {
        return Err(ConfigError::ValidationError(
            "game.cycle_size must be at least 1".to_string(),
        ));
    }

    if config.game.spin_duration_ms == 0 {
        return Err(ConfigError::ValidationError(
            "game.spin_duration_ms cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let mut config = Config::default();
        config.server.port = 0;
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_empty_cycle_fails() {
        let mut config = Config::default();
        config.game.cycle_size = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_spin_fails() {
        let mut config = Config::default();
        config.game.spin_duration_ms = 0;
        assert!(validate_config(&config).is_err());
    }
}
