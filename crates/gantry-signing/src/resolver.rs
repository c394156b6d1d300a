//! Signing source resolution
//!
//! Priority order, first match wins:
//! 1. CI keystore environment variables
//! 2. local keystore properties file
//! 3. none (release falls back to debug signing)
//!
//! CI and file values are never merged.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::ci::CiKeystoreEnv;
use crate::credentials::CredentialSet;
use crate::error::Result;
use crate::properties::KeystoreProperties;

/// The resolved credential source for this build invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Credentials injected by the CI environment
    Ci(CredentialSet),

    /// Credentials read from the local properties file
    File(CredentialSet),

    /// No credentials available
    None,
}

impl CredentialSource {
    /// The credential set, if one was selected
    pub fn credentials(&self) -> Option<&CredentialSet> {
        match self {
            Self::Ci(creds) | Self::File(creds) => Some(creds),
            Self::None => None,
        }
    }

    /// True if a credential set was selected
    pub fn is_available(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Stable source label for output and logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ci(_) => "ci",
            Self::File(_) => "properties",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Name of the signing configuration a build type is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningConfigName {
    /// The dedicated release signing configuration
    Release,
    /// The debug signing configuration
    Debug,
}

impl std::fmt::Display for SigningConfigName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Release => f.write_str("release"),
            Self::Debug => f.write_str("debug"),
        }
    }
}

/// Binding of the release build type to a signing configuration.
///
/// Computed once per invocation and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SigningAssignment {
    /// Signing configuration attached to the release build type
    pub release: SigningConfigName,
}

impl SigningAssignment {
    /// Bind the release build type: the "release" config when credentials
    /// were resolved, otherwise the same config debug builds use.
    pub fn for_release(source: &CredentialSource) -> Self {
        let release = if source.is_available() {
            SigningConfigName::Release
        } else {
            SigningConfigName::Debug
        };
        Self { release }
    }

    /// True if release builds reuse the debug signing identity
    pub fn is_debug_fallback(&self) -> bool {
        self.release == SigningConfigName::Debug
    }
}

/// Resolve the credential source for this invocation.
///
/// A missing properties file is not an error; a present but incomplete or
/// malformed one is fatal.
#[instrument(skip(env), fields(properties = %properties_path.display()))]
pub fn resolve(env: &CiKeystoreEnv, properties_path: &Path) -> Result<CredentialSource> {
    if let Some(creds) = env.credentials() {
        info!(source = "ci", "resolved signing credentials");
        return Ok(CredentialSource::Ci(creds));
    }

    if properties_path.exists() {
        let properties = KeystoreProperties::load(properties_path)?;
        let creds = properties.credentials()?;
        info!(source = "properties", "resolved signing credentials");
        return Ok(CredentialSource::File(creds));
    }

    debug!("no CI variables and no properties file");
    info!(source = "none", "release builds will fall back to debug signing");
    Ok(CredentialSource::None)
}
