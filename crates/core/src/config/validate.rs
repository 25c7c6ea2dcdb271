use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Watcher intervals are non-zero
/// - Notification output directory is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.watcher.enrich_interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "watcher.enrich_interval_secs cannot be 0".to_string(),
        ));
    }

    if config.watcher.digest_interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "watcher.digest_interval_secs cannot be 0".to_string(),
        ));
    }

    if config.notifications.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "notifications.output_dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}
