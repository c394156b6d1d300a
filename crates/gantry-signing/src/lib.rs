//! Gantry Signing - release-signing configuration resolution
//!
//! This crate decides which signing identity an Android release build should
//! use. Credential sources in priority order:
//! - CI keystore environment variables (Bitrise)
//! - a local `key.properties` file
//! - none, in which case the release build type falls back to debug signing
//!
//! The selection is made exactly once per invocation and rendered as a
//! [`BuildPlan`] for the external build toolchain.

pub mod ci;
pub mod credentials;
pub mod error;
pub mod plan;
pub mod properties;
pub mod resolver;

pub use ci::CiKeystoreEnv;
pub use credentials::CredentialSet;
pub use error::{Result, SigningError};
pub use plan::BuildPlan;
pub use properties::KeystoreProperties;
pub use resolver::{resolve, CredentialSource, SigningAssignment, SigningConfigName};
