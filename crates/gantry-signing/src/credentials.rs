//! Credential set types

use serde::{Deserialize, Serialize};

/// A complete set of release-signing credentials.
///
/// `store_file` is a filesystem path for locally provided keystores or a URL
/// when the CI environment injects one. Passwords are masked in `Debug`
/// output so they never reach logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSet {
    /// Keystore location (path or URL)
    pub store_file: String,

    /// Keystore store password
    pub store_password: String,

    /// Key alias within the keystore
    pub key_alias: String,

    /// Password for the key itself
    pub key_password: String,
}

impl CredentialSet {
    /// True if any of the four fields is empty
    pub fn is_partial(&self) -> bool {
        self.store_file.is_empty()
            || self.store_password.is_empty()
            || self.key_alias.is_empty()
            || self.key_password.is_empty()
    }
}

impl std::fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSet")
            .field("store_file", &self.store_file)
            .field("store_password", &mask(&self.store_password))
            .field("key_alias", &self.key_alias)
            .field("key_password", &mask(&self.key_password))
            .finish()
    }
}

fn mask(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CredentialSet {
        CredentialSet {
            store_file: "upload.jks".to_string(),
            store_password: "store-secret".to_string(),
            key_alias: "upload".to_string(),
            key_password: "key-secret".to_string(),
        }
    }

    #[test]
    fn test_debug_masks_passwords() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("store-secret"));
        assert!(!rendered.contains("key-secret"));
        assert!(rendered.contains("upload.jks"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_is_partial() {
        let mut creds = sample();
        assert!(!creds.is_partial());

        creds.key_password = String::new();
        assert!(creds.is_partial());
    }
}
