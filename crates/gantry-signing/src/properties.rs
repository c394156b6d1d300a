//! Keystore properties file parsing
//!
//! `key.properties` is a flat Java-style properties file. Recognized keys are
//! `keyAlias`, `keyPassword`, `storeFile` and `storePassword`; all four must
//! be present for the file to yield a credential set.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::credentials::CredentialSet;
use crate::error::{Result, SigningError};

/// Required key: keystore key alias
pub const KEY_ALIAS: &str = "keyAlias";

/// Required key: keystore key password
pub const KEY_PASSWORD: &str = "keyPassword";

/// Required key: keystore file location
pub const STORE_FILE: &str = "storeFile";

/// Required key: keystore store password
pub const STORE_PASSWORD: &str = "storePassword";

/// Parsed contents of a keystore properties file
#[derive(Debug, Clone)]
pub struct KeystoreProperties {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl KeystoreProperties {
    /// Read and parse a properties file. The file is opened, read fully and
    /// closed within this call.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| SigningError::PropertiesRead {
                path: path.to_path_buf(),
                source,
            })?;

        let parsed = Self::parse(&content, path)?;
        debug!(path = %path.display(), keys = parsed.entries.len(), "loaded keystore properties");
        Ok(parsed)
    }

    /// Parse properties file content.
    ///
    /// Supports `#` and `!` comment lines and `=` or `:` key/value
    /// separators, whichever appears first. Keys and values are trimmed.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut entries = HashMap::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let separator = line
                .char_indices()
                .find(|(_, c)| *c == '=' || *c == ':')
                .map(|(i, _)| i);

            match separator {
                Some(pos) => {
                    let key = line[..pos].trim();
                    let value = line[pos + 1..].trim();
                    if key.is_empty() {
                        return Err(SigningError::MalformedProperty {
                            path: path.to_path_buf(),
                            line: index + 1,
                            content: raw_line.to_string(),
                        });
                    }
                    entries.insert(key.to_string(), value.to_string());
                }
                None => {
                    return Err(SigningError::MalformedProperty {
                        path: path.to_path_buf(),
                        line: index + 1,
                        content: raw_line.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Path this file was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a key, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a key, failing if it is absent
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| SigningError::MissingPropertyKey {
            key: key.to_string(),
            path: self.path.clone(),
        })
    }

    /// Extract the full credential set. Fails on the first missing key.
    pub fn credentials(&self) -> Result<CredentialSet> {
        Ok(CredentialSet {
            store_file: self.require(STORE_FILE)?.to_string(),
            store_password: self.require(STORE_PASSWORD)?.to_string(),
            key_alias: self.require(KEY_ALIAS)?.to_string(),
            key_password: self.require(KEY_PASSWORD)?.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const COMPLETE: &str = "\
keyAlias=upload
keyPassword=key-secret
storeFile=/home/builder/upload.jks
storePassword=store-secret
";

    #[test]
    fn test_parse_complete_file() {
        let props = KeystoreProperties::parse(COMPLETE, Path::new("key.properties")).unwrap();
        assert_eq!(props.get(KEY_ALIAS), Some("upload"));
        assert_eq!(props.get(STORE_FILE), Some("/home/builder/upload.jks"));

        let creds = props.credentials().unwrap();
        assert_eq!(creds.key_alias, "upload");
        assert_eq!(creds.store_password, "store-secret");
    }

    #[test]
    fn test_parse_comments_and_blank_lines() {
        let content = "# release signing\n\n! legacy comment\nkeyAlias = upload\n";
        let props = KeystoreProperties::parse(content, Path::new("key.properties")).unwrap();
        assert_eq!(props.get(KEY_ALIAS), Some("upload"));
    }

    #[test]
    fn test_parse_colon_separator() {
        let content = "keyAlias: upload\nstoreFile: keys/app.jks\n";
        let props = KeystoreProperties::parse(content, Path::new("key.properties")).unwrap();
        assert_eq!(props.get(KEY_ALIAS), Some("upload"));
        assert_eq!(props.get(STORE_FILE), Some("keys/app.jks"));
    }

    #[test]
    fn test_parse_rejects_line_without_separator() {
        let content = "keyAlias=upload\njust-a-word\n";
        let err = KeystoreProperties::parse(content, Path::new("key.properties")).unwrap_err();
        match err {
            SigningError::MalformedProperty { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_require_missing_key() {
        let content = "keyAlias=upload\nkeyPassword=secret\nstoreFile=app.jks\n";
        let props = KeystoreProperties::parse(content, Path::new("key.properties")).unwrap();

        let err = props.credentials().unwrap_err();
        match err {
            SigningError::MissingPropertyKey { key, .. } => assert_eq!(key, STORE_PASSWORD),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("key.properties");
        std::fs::write(&path, COMPLETE).unwrap();

        let props = KeystoreProperties::load(&path).unwrap();
        assert!(props.credentials().is_ok());
        assert_eq!(props.path(), path);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = KeystoreProperties::load(&temp.path().join("absent.properties")).unwrap_err();
        assert!(matches!(err, SigningError::PropertiesRead { .. }));
    }
}
