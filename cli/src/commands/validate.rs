//! # DocForge Validate Command
//!
//! File: cli/src/commands/validate.rs
//! Repository: https://github.com/docforge-dev/docforge
//!
//! ## Overview
//!
//! This module implements `docforge validate`, which resolves a project
//! configuration and reports what a generation run would do, without
//! rendering anything. Useful for checking a configuration after editing it.
//!
//! Exit status mirrors `generate`: any resolver failure (missing file,
//! malformed YAML, failed validation) aborts with a nonzero exit and a message
//! naming the offending file or field.
//!
use crate::core::config::ProjectConfig;
use crate::core::error::Result;
use crate::core::selector;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments for `docforge validate`.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the project configuration file.
    #[arg(long, short = 'c', default_value = "project-config.yaml")]
    config: PathBuf,
}

/// Handler for the `docforge validate` command.
pub fn handle_validate(args: ValidateArgs) -> Result<()> {
    info!("Handling validate command...");
    let config = ProjectConfig::load(&args.config)?;

    println!("Configuration OK: {}", args.config.display());
    println!(
        "  Project: {} v{} ({})",
        config.project_name(),
        config.project_version(),
        config.project_author()
    );
    println!("  Tier: {}", config.tier());

    let plan = selector::templates_for_tier(config.tier(), &config);
    println!("  Planned documents ({}):", plan.len());
    for id in &plan {
        println!("    - {id}");
    }
    Ok(())
}
