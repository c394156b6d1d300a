//! Resolved build plan
//!
//! The build plan is what the external build toolchain consumes: application
//! identity, SDK and version fields from the project configuration, plus the
//! signing assignment produced by the resolver.

use serde::Serialize;

use gantry_core::config::AndroidConfig;

use crate::credentials::CredentialSet;
use crate::resolver::{CredentialSource, SigningAssignment};

/// Fully resolved build configuration for one invocation
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    /// Application identifier
    pub application_id: String,

    /// Minimum SDK version
    pub min_sdk: u32,

    /// Target SDK version
    pub target_sdk: u32,

    /// Compile SDK version
    pub compile_sdk: u32,

    /// Version code
    pub version_code: u32,

    /// Version name
    pub version_name: String,

    /// Where the credentials came from ("ci", "properties" or "none")
    pub credential_source: &'static str,

    /// Signing configuration bound to the release build type
    pub signing: SigningAssignment,

    /// The selected credentials, when a source was available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<CredentialSet>,
}

impl BuildPlan {
    /// Combine the project configuration with a resolved credential source
    pub fn new(android: &AndroidConfig, source: CredentialSource) -> Self {
        let signing = SigningAssignment::for_release(&source);
        let label = source.label();
        let credentials = match source {
            CredentialSource::Ci(creds) | CredentialSource::File(creds) => Some(creds),
            CredentialSource::None => None,
        };

        Self {
            application_id: android.application_id.clone(),
            min_sdk: android.min_sdk,
            target_sdk: android.target_sdk,
            compile_sdk: android.compile_sdk(),
            version_code: android.version_code,
            version_name: android.version_name.clone(),
            credential_source: label,
            signing,
            credentials,
        }
    }
}
