use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("TRIAGE_").split("_"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[database]
path = "/var/lib/triage/tickets.db"

[watcher]
enrich_interval_secs = 5
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.database.path, PathBuf::from("/var/lib/triage/tickets.db"));
        assert_eq!(config.watcher.enrich_interval_secs, 5);
        // Untouched sections keep their defaults.
        assert_eq!(config.watcher.digest_interval_secs, 30);
        assert_eq!(config.notifications.output_dir, PathBuf::from("digests"));
    }

    #[test]
    fn test_load_config_from_str_empty_uses_defaults() {
        let config = load_config_from_str("").unwrap();
        assert!(config.watcher.enabled);
        assert_eq!(config.seed.tickets, 500);
    }

    #[test]
    fn test_load_config_from_str_bad_type_fails() {
        let toml = r#"
[watcher]
enrich_interval_secs = "soon"
"#;
        let result = load_config_from_str(toml);
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[watcher]
enabled = false
digest_interval_secs = 120

[notifications]
output_dir = "/tmp/digests"

[seed]
enabled = true
tickets = 50
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert!(!config.watcher.enabled);
        assert_eq!(config.watcher.digest_interval_secs, 120);
        assert_eq!(config.notifications.output_dir, PathBuf::from("/tmp/digests"));
        assert!(config.seed.enabled);
        assert_eq!(config.seed.tickets, 50);
    }
}
