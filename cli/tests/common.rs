//! # DocForge CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Repository: https://github.com/docforge-dev/docforge
//!
//! ## Overview
//!
//! Shared utility functions used across the integration test files
//! (`generate.rs`, `validate.rs`, `templates.rs`). Each test runs the compiled
//! `docforge` binary inside a temporary directory holding a configuration
//! file and a template set built by these helpers.
//!

// Allow potentially unused code in this common module, as different test files
// use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Every template identifier DocForge knows about, in render order.
pub const ALL_TEMPLATE_IDS: [&str; 8] = [
    "prd",
    "technical-design",
    "features-csv",
    "development-guide",
    "sprint-planning",
    "sprint-template",
    "master-index",
    "adr",
];

/// Creates an `assert_cmd::Command` for the compiled `docforge` binary.
pub fn docforge_cmd() -> Command {
    Command::cargo_bin("docforge").expect("Failed to find docforge binary for testing")
}

/// A complete, valid configuration document for the given tier.
pub fn config_yaml(tier: &str) -> String {
    r#"project:
  name: Example App
  description: An example project
  author: Jane Doe
  version: 1.0.0
  created: 2024-12-09
tier: @TIER@
features:
  cascade: false
sections:
  prd:
    competitive_analysis: false
templates:
  core:
    prd: true
    technical_design: true
    features_csv: true
    development_guide: false
    sprint_planning: false
    sprint_template: false
    master_index: false
    adr: false
"#
    .replace("@TIER@", tier)
}

/// Writes `project-config.yaml` for the given tier into `dir`.
pub fn write_config(dir: &Path, tier: &str) -> PathBuf {
    write_config_content(dir, &config_yaml(tier))
}

/// Writes `project-config.yaml` with explicit content into `dir`.
pub fn write_config_content(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("project-config.yaml");
    fs::write(&path, content).expect("Failed to write test configuration");
    path
}

/// Writes a full template set (one resource per identifier) under
/// `dir/templates` and returns that directory. `features-csv` gets the
/// tabular variant; everything else the document variant.
pub fn write_template_set(dir: &Path) -> PathBuf {
    let templates = dir.join("templates");
    fs::create_dir_all(&templates).expect("Failed to create templates dir");
    for id in ALL_TEMPLATE_IDS {
        if id == "features-csv" {
            fs::write(
                templates.join("features-csv.csv"),
                "Feature,Version\nDocumentation,{{ project.version }}\n",
            )
            .expect("Failed to write template");
        } else {
            fs::write(
                templates.join(format!("{id}.md")),
                format!("# {} - {id}\nAuthor: {}\n", "{{ project.name }}", "{{ project.author }}"),
            )
            .expect("Failed to write template");
        }
    }
    templates
}
