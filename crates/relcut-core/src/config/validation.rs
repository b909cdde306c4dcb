//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate a loaded configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.changelog.fragment_file.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.fragment_file".to_string(),
            message: "must not be empty".to_string(),
        }
        .into());
    }

    if config.changelog.template_file.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.template_file".to_string(),
            message: "must not be empty".to_string(),
        }
        .into());
    }

    // The reset step copies template over fragment; they must be distinct files.
    if config.changelog.fragment_file == config.changelog.template_file {
        return Err(ConfigError::InvalidValue {
            field: "changelog.template_file".to_string(),
            message: "must differ from changelog.fragment_file".to_string(),
        }
        .into());
    }

    if config.notes.base_url.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "notes.base_url".to_string(),
            message: "must not be empty".to_string(),
        }
        .into());
    }

    debug!("configuration validated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_same_fragment_and_template() {
        let mut config = Config::default();
        config.changelog.template_file = config.changelog.fragment_file.clone();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_empty_base_url() {
        let mut config = Config::default();
        config.notes.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }
}
