//! CI keystore environment snapshot
//!
//! Bitrise injects release-signing credentials through four environment
//! variables. They are captured once at startup into an explicit struct
//! rather than read ad hoc, which keeps the process-environment surface out
//! of the resolver and makes it testable.

use std::env;

use tracing::{debug, warn};

use crate::credentials::CredentialSet;

/// Env var: keystore location (URL or path)
pub const ENV_KEYSTORE_URL: &str = "BITRISEIO_ANDROID_KEYSTORE_URL";

/// Env var: keystore store password
pub const ENV_KEYSTORE_PASSWORD: &str = "BITRISEIO_ANDROID_KEYSTORE_PASSWORD";

/// Env var: key alias
pub const ENV_KEYSTORE_ALIAS: &str = "BITRISEIO_ANDROID_KEYSTORE_ALIAS";

/// Env var: key password
pub const ENV_KEY_PASSWORD: &str = "BITRISEIO_ANDROID_KEYSTORE_PRIVATE_KEY_PASSWORD";

/// Snapshot of the CI-provided keystore variables
#[derive(Debug, Clone, Default)]
pub struct CiKeystoreEnv {
    /// Keystore location, if the CI path applies
    pub keystore_url: Option<String>,

    /// Store password, if set
    pub keystore_password: Option<String>,

    /// Key alias, if set
    pub key_alias: Option<String>,

    /// Key password, if set
    pub key_password: Option<String>,
}

impl CiKeystoreEnv {
    /// Capture the four variables from the process environment
    pub fn capture() -> Self {
        let snapshot = Self {
            keystore_url: non_empty(env::var(ENV_KEYSTORE_URL).ok()),
            keystore_password: non_empty(env::var(ENV_KEYSTORE_PASSWORD).ok()),
            key_alias: non_empty(env::var(ENV_KEYSTORE_ALIAS).ok()),
            key_password: non_empty(env::var(ENV_KEY_PASSWORD).ok()),
        };
        debug!(
            ci_keystore_present = snapshot.keystore_url.is_some(),
            "captured CI keystore environment"
        );
        snapshot
    }

    /// Snapshot with no variables set
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if the CI keystore path applies. Only the keystore location
    /// variable is consulted; the companion variables are not required.
    pub fn is_present(&self) -> bool {
        self.keystore_url.is_some()
    }

    /// Build the CI credential set, if the keystore location is set.
    ///
    /// Companion variables that are missing become empty strings. A partial
    /// set still selects the CI source; it is reported, not rejected.
    pub fn credentials(&self) -> Option<CredentialSet> {
        let keystore_url = self.keystore_url.as_ref()?;

        let creds = CredentialSet {
            store_file: keystore_url.clone(),
            store_password: self.keystore_password.clone().unwrap_or_default(),
            key_alias: self.key_alias.clone().unwrap_or_default(),
            key_password: self.key_password.clone().unwrap_or_default(),
        };

        if creds.is_partial() {
            warn!(
                store_password_set = self.keystore_password.is_some(),
                key_alias_set = self.key_alias.is_some(),
                key_password_set = self.key_password.is_some(),
                "CI keystore location is set but companion variables are incomplete"
            );
        }

        Some(creds)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> CiKeystoreEnv {
        CiKeystoreEnv {
            keystore_url: Some("https://ci.example.com/keystore.jks".to_string()),
            keystore_password: Some("store-secret".to_string()),
            key_alias: Some("upload".to_string()),
            key_password: Some("key-secret".to_string()),
        }
    }

    #[test]
    fn test_full_environment_yields_credentials() {
        let env = full();
        assert!(env.is_present());

        let creds = env.credentials().unwrap();
        assert_eq!(creds.store_file, "https://ci.example.com/keystore.jks");
        assert_eq!(creds.key_alias, "upload");
        assert!(!creds.is_partial());
    }

    #[test]
    fn test_empty_environment_yields_none() {
        let env = CiKeystoreEnv::empty();
        assert!(!env.is_present());
        assert!(env.credentials().is_none());
    }

    #[test]
    fn test_partial_environment_still_selects_ci() {
        let env = CiKeystoreEnv {
            keystore_url: Some("https://ci.example.com/keystore.jks".to_string()),
            ..CiKeystoreEnv::empty()
        };

        let creds = env.credentials().unwrap();
        assert!(creds.is_partial());
        assert_eq!(creds.store_password, "");
    }

    #[test]
    fn test_companion_vars_without_url_do_not_apply() {
        let env = CiKeystoreEnv {
            keystore_password: Some("store-secret".to_string()),
            key_alias: Some("upload".to_string()),
            key_password: Some("key-secret".to_string()),
            ..CiKeystoreEnv::empty()
        };

        assert!(!env.is_present());
        assert!(env.credentials().is_none());
    }
}
