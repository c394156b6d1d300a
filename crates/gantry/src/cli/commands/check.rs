//! Check command

use std::path::Path;

use clap::Args;
use console::style;
use tracing::info;

use gantry_core::config::{load_config_from_dir, validation::validate_config};
use gantry_signing::{CiKeystoreEnv, KeystoreProperties};

use crate::cli::{Cli, OutputFormat};
use crate::exit_codes;

/// Validate configuration and signing inputs
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Only validate the configuration file
    #[arg(long)]
    pub config_only: bool,

    /// Strict mode - treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            config_only = self.config_only,
            strict = self.strict,
            "executing check command"
        );
        let cwd = std::env::current_dir()?;

        let mut errors: Vec<String> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        // Validate configuration
        let config_result = load_config_from_dir(&cwd);
        let (config, config_path) = match config_result {
            Ok((c, p)) => (Some(c), Some(p)),
            Err(e) => {
                errors.push(format!("Configuration: {}", e));
                (None, None)
            }
        };

        if let Some(ref cfg) = config {
            if let Err(e) = validate_config(cfg) {
                errors.push(format!("Configuration validation: {}", e));
            }
        }

        if !self.config_only {
            let env = CiKeystoreEnv::capture();

            if env.is_present() {
                match env.credentials() {
                    Some(creds) if creds.is_partial() => {
                        warnings.push(
                            "CI keystore location is set but companion variables are missing"
                                .to_string(),
                        );
                    }
                    _ => {}
                }
            }

            // Relative properties paths are anchored at the config file's
            // directory, matching the resolve command.
            let project_root = config_path
                .as_deref()
                .and_then(Path::parent)
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.clone());

            let properties_path = config
                .as_ref()
                .map(|c| c.signing.key_properties_path(&project_root))
                .unwrap_or_else(|| project_root.join("key.properties"));

            if properties_path.exists() {
                match KeystoreProperties::load(&properties_path) {
                    Ok(props) => {
                        if let Err(e) = props.credentials() {
                            errors.push(format!("Keystore properties: {}", e));
                        }
                    }
                    Err(e) => {
                        errors.push(format!("Keystore properties: {}", e));
                    }
                }
            } else if !env.is_present() {
                warnings.push(format!(
                    "No CI variables and no properties file at {}; release builds will fall back to debug signing",
                    properties_path.display()
                ));
            }
        }

        // If strict, promote warnings to errors
        if self.strict {
            errors.append(&mut warnings);
        }

        // Output
        let passed = errors.is_empty();

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "valid": passed,
                    "config_path": config_path.map(|p| p.to_string_lossy().to_string()),
                    "errors": errors,
                    "warnings": warnings
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{}", style("Check Results").bold());
                    println!();

                    if let Some(path) = config_path {
                        println!("Config: {}", style(path.display()).cyan());
                        println!();
                    }

                    if !errors.is_empty() {
                        println!("{}", style("Errors:").red().bold());
                        for error in &errors {
                            println!("  {} {}", style("✗").red(), error);
                        }
                        println!();
                    }

                    if !warnings.is_empty() {
                        println!("{}", style("Warnings:").yellow().bold());
                        for warning in &warnings {
                            println!("  {} {}", style("!").yellow(), warning);
                        }
                        println!();
                    }

                    if passed {
                        if warnings.is_empty() {
                            println!("{}", style("✓ All checks passed").green().bold());
                        } else {
                            println!(
                                "{} with {} warning(s)",
                                style("✓ Check passed").green().bold(),
                                warnings.len()
                            );
                        }
                    } else {
                        println!(
                            "{} with {} error(s)",
                            style("✗ Check failed").red().bold(),
                            errors.len()
                        );
                    }
                }
            }
        }

        if !passed {
            std::process::exit(exit_codes::VALIDATION_ERROR);
        }

        Ok(())
    }
}
