//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "gantry.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "gantry.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".gantry.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".gantry.toml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Gantry Configuration
# See https://github.com/example/gantry for documentation

android:
  application_id: com.example.app
  min_sdk: 21
  target_sdk: 34
  version_code: 1
  version_name: "1.0.0"

signing:
  key_properties: key.properties
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::Config;

    #[test]
    fn test_template_parses() {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.android.application_id, "com.example.app");
        assert_eq!(config.android.version_code, 1);
    }
}
