//! # DocForge Templates Command
//!
//! File: cli/src/commands/templates.rs
//! Repository: https://github.com/docforge-dev/docforge
//!
//! ## Overview
//!
//! This module implements `docforge templates`, which lists the template set
//! planned for the configured tier and where each identifier resolves on
//! disk. Identifiers with no matching resource are flagged so authors can see
//! up front which documents a `generate` run would skip.
//!
//! Resources present in the templates directory but not selected by the
//! current tier are listed separately.
//!
use crate::core::config::ProjectConfig;
use crate::core::error::Result;
use crate::core::selector;
use crate::core::templating::Renderer;
use clap::Parser;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Command-line arguments for `docforge templates`.
#[derive(Parser, Debug)]
pub struct TemplatesArgs {
    /// Path to the project configuration file.
    #[arg(long, short = 'c', default_value = "project-config.yaml")]
    config: PathBuf,

    /// Directory holding the template resources.
    #[arg(long, env = "DOCFORGE_TEMPLATES_DIR", default_value = "templates/source")]
    templates_dir: PathBuf,
}

/// Handler for the `docforge templates` command.
pub fn handle_templates(args: TemplatesArgs) -> Result<()> {
    info!("Handling templates command...");
    let config = ProjectConfig::load(&args.config)?;
    let renderer = Renderer::new(&args.templates_dir);

    let plan = selector::templates_for_tier(config.tier(), &config);
    println!("Templates for tier '{}':", config.tier());
    for id in &plan {
        match renderer.locate(id) {
            Some(path) => println!("  {id:<20} {}", path.display()),
            None => println!("  {id:<20} (missing)"),
        }
    }

    let unplanned = unplanned_resources(&args.templates_dir, &plan);
    if !unplanned.is_empty() {
        println!(
            "Resources in '{}' not selected by this tier:",
            args.templates_dir.display()
        );
        for stem in &unplanned {
            println!("  - {stem}");
        }
    }
    Ok(())
}

/// Scans the templates directory for `.md`/`.csv` resources whose identifier
/// is not in the planned set. Returns the identifiers sorted by file name.
fn unplanned_resources(templates_dir: &Path, plan: &[String]) -> Vec<String> {
    let planned: HashSet<&str> = plan.iter().map(String::as_str).collect();
    let mut found: Vec<String> = Vec::new();

    if !templates_dir.is_dir() {
        warn!(
            "Templates directory '{}' does not exist",
            templates_dir.display()
        );
        return found;
    }

    for entry_result in WalkDir::new(templates_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                warn!(
                    "Failed to access entry in '{}': {}",
                    templates_dir.display(),
                    err
                );
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_template = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("md") | Some("csv")
        );
        if !is_template {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            if !planned.contains(stem) && !found.iter().any(|seen| seen == stem) {
                found.push(stem.to_string());
            }
        }
    }
    found
}
