//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for Gantry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version of the config schema
    #[serde(rename = "$schema")]
    pub schema: Option<String>,

    /// Project name
    pub name: Option<String>,

    /// Android application configuration
    pub android: AndroidConfig,

    /// Signing input file locations
    pub signing: SigningFilesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: None,
            name: None,
            android: AndroidConfig::default(),
            signing: SigningFilesConfig::default(),
        }
    }
}

/// Android application configuration, carried into the resolved build plan
/// alongside the signing assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidConfig {
    /// Application identifier (e.g. "com.example.app")
    pub application_id: String,

    /// Minimum SDK version
    pub min_sdk: u32,

    /// Target SDK version
    pub target_sdk: u32,

    /// Compile SDK version (defaults to target_sdk when unset)
    pub compile_sdk: Option<u32>,

    /// Monotonic version code
    pub version_code: u32,

    /// Human-readable version name
    pub version_name: String,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            application_id: "com.example.app".to_string(),
            min_sdk: 21,
            target_sdk: 34,
            compile_sdk: None,
            version_code: 1,
            version_name: "1.0.0".to_string(),
        }
    }
}

impl AndroidConfig {
    /// Effective compile SDK version
    pub fn compile_sdk(&self) -> u32 {
        self.compile_sdk.unwrap_or(self.target_sdk)
    }
}

/// Locations of signing input files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SigningFilesConfig {
    /// Path to the local keystore properties file, relative to the project root
    pub key_properties: PathBuf,
}

impl Default for SigningFilesConfig {
    fn default() -> Self {
        Self {
            key_properties: PathBuf::from("key.properties"),
        }
    }
}

impl SigningFilesConfig {
    /// Location of the properties file for a given project root.
    ///
    /// The config file is discovered by upward search, so a relative
    /// `key_properties` is anchored at the directory holding the config
    /// file, not at the invocation directory. Absolute paths pass through.
    pub fn key_properties_path(&self, project_root: &Path) -> PathBuf {
        if self.key_properties.is_absolute() {
            self.key_properties.clone()
        } else {
            project_root.join(&self.key_properties)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.android.min_sdk, 21);
        assert_eq!(config.android.compile_sdk(), config.android.target_sdk);
        assert_eq!(
            config.signing.key_properties,
            PathBuf::from("key.properties")
        );
    }

    #[test]
    fn test_compile_sdk_override() {
        let android = AndroidConfig {
            compile_sdk: Some(35),
            ..AndroidConfig::default()
        };
        assert_eq!(android.compile_sdk(), 35);
    }

    #[test]
    fn test_key_properties_anchored_at_project_root() {
        let signing = SigningFilesConfig::default();
        assert_eq!(
            signing.key_properties_path(Path::new("/project")),
            PathBuf::from("/project/key.properties")
        );
    }

    #[test]
    fn test_absolute_key_properties_passes_through() {
        let signing = SigningFilesConfig {
            key_properties: PathBuf::from("/secrets/key.properties"),
        };
        assert_eq!(
            signing.key_properties_path(Path::new("/project")),
            PathBuf::from("/secrets/key.properties")
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            "[android]\napplication_id = \"com.acme.tracker\"\nversion_code = 7\n",
        )
        .unwrap();
        assert_eq!(config.android.application_id, "com.acme.tracker");
        assert_eq!(config.android.version_code, 7);
        assert_eq!(config.android.target_sdk, 34);
    }
}
