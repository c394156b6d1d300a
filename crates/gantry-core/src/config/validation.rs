//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_android(config)?;
    validate_signing(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_android(config: &Config) -> Result<()> {
    let android = &config.android;

    if android.application_id.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "android.application_id".to_string(),
            message: "application id cannot be empty".to_string(),
        }
        .into());
    }

    if !android.application_id.contains('.') {
        return Err(ConfigError::InvalidValue {
            field: "android.application_id".to_string(),
            message: "must contain at least one '.' separator".to_string(),
        }
        .into());
    }

    if android.min_sdk > android.target_sdk {
        return Err(ConfigError::InvalidValue {
            field: "android.min_sdk".to_string(),
            message: format!(
                "min_sdk ({}) cannot exceed target_sdk ({})",
                android.min_sdk, android.target_sdk
            ),
        }
        .into());
    }

    if android.version_code == 0 {
        return Err(ConfigError::InvalidValue {
            field: "android.version_code".to_string(),
            message: "version code must be at least 1".to_string(),
        }
        .into());
    }

    if android.version_name.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "android.version_name".to_string(),
            message: "version name cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_signing(config: &Config) -> Result<()> {
    if config.signing.key_properties.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "signing.key_properties".to_string(),
            message: "properties path cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}
