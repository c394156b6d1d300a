//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = if format == "TOML" {
        toml::from_str(&content).map_err(ConfigError::TomlError)?
    } else {
        serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?
    };

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// The first matching name wins at each level; parents are walked until the
/// filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.exists() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration from directory (searching parent directories)
pub fn load_config_from_dir(dir: &Path) -> Result<(Config, PathBuf)> {
    let config_path = find_config(dir).ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))?;

    let config = load_config(&config_path)?;
    Ok((config, config_path))
}

/// Load configuration or use defaults
pub fn load_config_or_default(dir: &Path) -> (Config, Option<PathBuf>) {
    match load_config_from_dir(dir) {
        Ok((config, path)) => (config, Some(path)),
        Err(_) => {
            warn!(dir = %dir.display(), "no config found, using defaults");
            (Config::default(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("gantry.yaml");
        std::fs::write(&config_path, "android:\n  min_sdk: 23\n").unwrap();

        let found = find_config(temp.path());
        assert!(found.is_some());
        assert_eq!(found.unwrap(), config_path);
    }

    #[test]
    fn test_find_config_prefers_yaml_over_toml() {
        let temp = TempDir::new().unwrap();
        let yaml_path = temp.path().join("gantry.yaml");
        let toml_path = temp.path().join("gantry.toml");
        std::fs::write(&yaml_path, "android:\n  min_sdk: 23\n").unwrap();
        std::fs::write(&toml_path, "[android]\nmin_sdk = 24\n").unwrap();

        let found = find_config(temp.path()).unwrap();
        assert_eq!(found, yaml_path);
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("android").join("app");
        std::fs::create_dir_all(&nested).unwrap();
        let config_path = temp.path().join("gantry.toml");
        std::fs::write(&config_path, "[android]\nmin_sdk = 23\n").unwrap();

        let found = find_config(&nested);
        assert!(found.is_some());
        assert_eq!(found.unwrap(), config_path);
    }

    #[test]
    fn test_key_properties_found_from_nested_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("android").join("app");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp.path().join("gantry.toml"), "[android]\nmin_sdk = 23\n").unwrap();
        std::fs::write(temp.path().join("key.properties"), "keyAlias=upload\n").unwrap();

        let (config, config_path) = load_config_from_dir(&nested).unwrap();
        let project_root = config_path.parent().unwrap();

        let properties_path = config.signing.key_properties_path(project_root);
        assert_eq!(properties_path, temp.path().join("key.properties"));
        assert!(properties_path.exists());
    }

    #[test]
    fn test_load_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("gantry.toml");
        std::fs::write(
            &config_path,
            "[android]\napplication_id = \"com.acme.tracker\"\nversion_name = \"2.1.0\"\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.android.application_id, "com.acme.tracker");
        assert_eq!(config.android.version_name, "2.1.0");
    }

    #[test]
    fn test_load_config_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("gantry.yaml");
        std::fs::write(
            &config_path,
            "android:\n  application_id: com.acme.tracker\nsigning:\n  key_properties: secrets/key.properties\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.android.application_id, "com.acme.tracker");
        assert_eq!(
            config.signing.key_properties,
            PathBuf::from("secrets/key.properties")
        );
    }

    #[test]
    fn test_load_config_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("empty");
        std::fs::create_dir_all(&nested).unwrap();

        // The upward search can only match if a config exists above the temp dir.
        let (config, path) = load_config_or_default(&nested);
        if path.is_none() {
            assert_eq!(config.android.min_sdk, 21);
        }
    }
}
