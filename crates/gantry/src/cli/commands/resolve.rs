//! Resolve command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::info;

use gantry_core::config::load_config_or_default;
use gantry_signing::{resolve, BuildPlan, CiKeystoreEnv, CredentialSource};

use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Resolve the release signing configuration and print the build plan
#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Path to the keystore properties file (overrides configuration)
    #[arg(short, long)]
    pub properties: Option<PathBuf>,

    /// Omit credential values from the output
    #[arg(long)]
    pub redact: bool,
}

impl ResolveCommand {
    /// Execute the resolve command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(properties = ?self.properties, "executing resolve command");
        let cwd = std::env::current_dir()?;

        let (config, config_path) = load_config_or_default(&cwd);

        // The config file marks the project root; a relative properties path
        // is anchored there, not at the invocation directory.
        let project_root = config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.clone());

        let properties_path = self
            .properties
            .clone()
            .unwrap_or_else(|| config.signing.key_properties_path(&project_root));

        let env = CiKeystoreEnv::capture();
        let source = resolve(&env, &properties_path)?;

        let partial_ci = matches!(&source, CredentialSource::Ci(creds) if creds.is_partial());

        let mut plan = BuildPlan::new(&config.android, source);
        if self.redact {
            plan.credentials = None;
        }

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{}", style("Build Plan").bold());
                    println!();
                    if let Some(path) = &config_path {
                        println!(
                            "{}",
                            output::key_value(
                                "config",
                                &output::path_style().apply_to(path.display()).to_string()
                            )
                        );
                    }
                    println!("{}", output::key_value("application", &plan.application_id));
                    println!(
                        "{}",
                        output::key_value(
                            "version",
                            &format!("{} ({})", plan.version_name, plan.version_code)
                        )
                    );
                    println!(
                        "{}",
                        output::key_value(
                            "sdk",
                            &format!(
                                "min {} / target {} / compile {}",
                                plan.min_sdk, plan.target_sdk, plan.compile_sdk
                            )
                        )
                    );
                    println!(
                        "{}",
                        output::key_value("credential source", plan.credential_source)
                    );
                    println!(
                        "{}",
                        output::key_value(
                            "release signing config",
                            &plan.signing.release.to_string()
                        )
                    );
                    println!();

                    if plan.signing.is_debug_fallback() {
                        output::warning(
                            "no signing credentials found; release builds will use the debug signing config",
                        );
                    } else if partial_ci {
                        output::warning(
                            "CI keystore variables are incomplete; the selected credentials have empty fields",
                        );
                    } else {
                        output::success("release signing configuration resolved");
                    }
                }
            }
        }

        Ok(())
    }
}
