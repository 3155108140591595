//! # DocForge CLI Templates Integration Tests
//!
//! File: cli/tests/templates.rs
//! Repository: https://github.com/docforge-dev/docforge
//!
//! ## Overview
//!
//! Integration tests for `docforge templates`, which lists the template set
//! planned for the configured tier and flags identifiers with no resource on
//! disk.
//!

// Declare and use the common module
mod common;
use common::*;
// Import necessary items directly
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Planned identifiers are listed with their resolved resource paths.
#[test]
fn test_templates_lists_planned_resources() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_config(dir.path(), "minimal");
    let templates = write_template_set(dir.path());

    docforge_cmd()
        .current_dir(dir.path())
        .arg("templates")
        .arg("--templates-dir")
        .arg(&templates)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Templates for tier 'minimal'")
                .and(predicate::str::contains("prd.md"))
                .and(predicate::str::contains("features-csv.csv")),
        );
}

/// Identifiers with no resource are flagged as missing.
#[test]
fn test_templates_flags_missing_resources() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_config(dir.path(), "advanced");
    let templates = write_template_set(dir.path());
    fs::remove_file(templates.join("adr.md")).expect("Failed to remove template resource");

    docforge_cmd()
        .current_dir(dir.path())
        .arg("templates")
        .arg("--templates-dir")
        .arg(&templates)
        .assert()
        .success()
        .stdout(predicate::str::contains("(missing)"));
}

/// Resources not selected by the current tier are listed separately.
#[test]
fn test_templates_lists_unselected_resources() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_config(dir.path(), "minimal");
    let templates = write_template_set(dir.path());
    fs::write(templates.join("release-notes.md"), "# Notes")
        .expect("Failed to write extra template");

    docforge_cmd()
        .current_dir(dir.path())
        .arg("templates")
        .arg("--templates-dir")
        .arg(&templates)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("not selected by this tier")
                .and(predicate::str::contains("release-notes")),
        );
}
