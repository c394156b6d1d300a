//! Gantry Core - Core library for the Gantry build-configuration resolver
//!
//! This crate provides the foundational types, error handling, and project
//! configuration for Gantry, a tool that resolves Android release-signing
//! configuration from CI environment variables or a local properties file.

pub mod config;
pub mod error;

pub use config::{AndroidConfig, Config, SigningFilesConfig};
pub use error::{ConfigError, GantryError, Result};
