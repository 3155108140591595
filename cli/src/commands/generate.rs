//! # DocForge Generate Command
//!
//! File: cli/src/commands/generate.rs
//! Repository: https://github.com/docforge-dev/docforge
//!
//! ## Overview
//!
//! This module implements the `docforge generate` command, which renders the
//! documentation set for a project. It handles:
//! - Loading and validating the project configuration
//! - Applying the output-directory override
//! - Selecting the template set for the configured tier
//! - Rendering each template and writing the results
//! - Reporting a per-template summary
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Resolve the configuration (any failure here aborts the run).
//! 2. Compute the ordered template set for the tier.
//! 3. Render each template independently. A missing resource or a rendering
//!    failure skips that one document; the batch always runs to completion.
//! 4. Write each rendered document to `<output_dir>/<identifier>.md`.
//! 5. Print a completion summary listing what was written and what was
//!    skipped, with the reason per skip.
//!
//! The batch is modeled as a sequence of independent attempts aggregated into
//! a [`GenerationReport`], not a short-circuiting pipeline. The process exit
//! code reflects only configuration acceptance; per-template failures are
//! reported but do not fail the run.
//!
//! ## Examples
//!
//! Basic usage:
//!
//! ```bash
//! # Render documents for the tier configured in project-config.yaml
//! docforge generate
//!
//! # Explicit configuration file and output directory
//! docforge generate --config my-config.yaml --output build/docs
//!
//! # Point at a different template set
//! docforge generate --templates-dir ./templates/source
//! ```
//!
use crate::common::fs::io;
use crate::core::config::ProjectConfig;
use crate::core::error::{DocforgeError, Result};
use crate::core::selector;
use crate::core::templating::Renderer;
use clap::Parser;
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::{debug, error, info, warn};

/// Command-line arguments for `docforge generate`.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the project configuration file.
    #[arg(long, short = 'c', default_value = "project-config.yaml")]
    config: PathBuf,

    /// Directory to write rendered documents into. Overrides the configured
    /// `output.directory` (which itself defaults to `docs`).
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Directory holding the template resources.
    #[arg(long, env = "DOCFORGE_TEMPLATES_DIR", default_value = "templates/source")]
    templates_dir: PathBuf,
}

/// One template that produced no document, with the reason.
#[derive(Debug)]
pub struct SkippedTemplate {
    pub id: String,
    pub reason: String,
}

/// Aggregated outcome of a generation batch.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Identifiers written as documents, in render order.
    pub rendered: Vec<String>,
    /// Identifiers skipped, each with its reason.
    pub skipped: Vec<SkippedTemplate>,
}

/// Handler for the `docforge generate` command.
pub fn handle_generate(args: GenerateArgs) -> Result<()> {
    info!("Handling generate command...");

    // 1. Resolve the configuration. Failures here are fatal for the run.
    let mut config = ProjectConfig::load(&args.config)?;
    if let Some(dir) = &args.output {
        debug!("Output directory overridden from CLI: {}", dir.display());
        config.set_output_directory(dir);
    }
    let output_dir = config.output_directory();
    io::ensure_dir_exists(&output_dir)?;

    // 2. Compute the template set for the tier.
    println!("Processing templates for tier: {}", config.tier());
    let plan = selector::templates_for_tier(config.tier(), &config);
    debug!("Planned templates: {:?}", plan);

    // 3-4. Render and write, one independent attempt per template.
    let renderer = Renderer::new(&args.templates_dir);
    let report = render_documents(&renderer, &config, &plan, &output_dir)?;

    // 5. Summarize.
    print_completion_message(&report, &output_dir);
    Ok(())
}

/// Renders every planned template and writes the non-empty results.
///
/// Template failures never abort the batch: a missing resource is logged as a
/// warning, a rendering failure as an error, and in both cases the remaining
/// templates continue. Filesystem failures while writing an already-rendered
/// document are genuine I/O problems and do propagate.
pub fn render_documents(
    renderer: &Renderer,
    config: &ProjectConfig,
    plan: &[String],
    output_dir: &Path,
) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();
    for id in plan {
        match renderer.render(id, config) {
            Ok(content) => {
                let target = output_dir.join(format!("{id}.md"));
                io::write_string_to_file(&target, &content)?;
                println!("Generated: {}", target.display());
                report.rendered.push(id.clone());
            }
            Err(err @ DocforgeError::TemplateNotFound { .. }) => {
                warn!("Skipping '{}': {}", id, err);
                println!("Warning: {err}");
                report.skipped.push(SkippedTemplate {
                    id: id.clone(),
                    reason: err.to_string(),
                });
            }
            Err(err) => {
                error!("Skipping '{}': {}", id, err);
                println!("{err}");
                report.skipped.push(SkippedTemplate {
                    id: id.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }
    Ok(report)
}

/// Prints the end-of-run summary. The output directory is shown relative to
/// the current directory when possible.
fn print_completion_message(report: &GenerationReport, output_dir: &Path) {
    let display_dir = env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(output_dir, cwd))
        .unwrap_or_else(|| output_dir.to_path_buf());

    println!("Document generation complete!");
    println!(
        "  {} document(s) written to '{}'",
        report.rendered.len(),
        display_dir.display()
    );
    if !report.skipped.is_empty() {
        println!("  {} template(s) skipped:", report.skipped.len());
        for skipped in &report.skipped {
            println!("    - {}: {}", skipped.id, skipped.reason);
        }
    }
}
