//! # DocForge Configuration System
//!
//! File: cli/src/core/config.rs
//! Repository: https://github.com/docforge-dev/docforge
//!
//! ## Overview
//!
//! This module implements the configuration resolver for DocForge. It loads the
//! project configuration file (YAML), validates the fields the tool itself
//! depends on, and exposes the rest of the document untouched so that template
//! authors can reference arbitrary nested content.
//!
//! ## Architecture
//!
//! The configuration is deliberately modeled as a generic ordered key-value
//! tree (`serde_yaml::Value`) rather than a fixed schema:
//! - Only the fields DocForge consults get typed accessors (`tier`,
//!   `project.*`, `templates.core.*`, `output.directory`).
//! - Everything else is carried verbatim into the template rendering context,
//!   so per-document content blocks (`prd`, `technical_design`, ...) are free-form.
//! - Validation is strict about the enumerated required fields and nothing else.
//!
//! The resolver never exits the process. Every failure is returned as a typed
//! `DocforgeError` so the CLI layer decides exit behavior.
//!
//! ## Examples
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = ProjectConfig::load(Path::new("project-config.yaml"))?;
//!
//! // Access the validated fields
//! let tier = cfg.tier();
//! let name = cfg.project_name();
//!
//! // Resolve the output directory (default `docs`, tilde-expanded)
//! let out = cfg.output_directory();
//! ```
//!
//! The configuration is loaded once per run, optionally mutated once (output
//! directory override from the CLI), and read-only afterwards.
//!
use crate::core::error::{DocforgeError, Result};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// The four recognized documentation tiers, in ascending order of coverage.
pub const VALID_TIERS: [&str; 4] = ["minimal", "core", "advanced", "custom"];

/// Top-level fields that must be present in every configuration.
const REQUIRED_FIELDS: [&str; 5] = ["project", "tier", "features", "sections", "templates"];

/// Subfields of `project` that must be present.
const REQUIRED_PROJECT_FIELDS: [&str; 3] = ["name", "author", "version"];

/// A validated project configuration.
///
/// Wraps the parsed YAML tree. The wrapper guarantees (post-construction) that
/// the required fields of the data model are present and that `tier` is one of
/// the recognized values; it makes no promises about anything else in the tree.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    root: Value,
}

/// Settings under the optional `output` block.
///
/// The block is an open bag like the rest of the configuration; only the
/// `directory` key is consumed by the tool, so only it is modeled here.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory rendered documents are written into (can use ~). Expanded on access.
    pub directory: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "docs".to_string()
}

impl ProjectConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an `Err` wrapping:
    /// - `DocforgeError::ConfigNotFound` if `path` does not exist.
    /// - `DocforgeError::ConfigParse` if the content is not well-formed YAML.
    /// - `DocforgeError::ConfigValidation` if a required field is absent or
    ///   `tier` is not a recognized value.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(anyhow!(DocforgeError::ConfigNotFound {
                path: path.display().to_string(),
            }));
        }
        info!("Loading project configuration from: {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parses and validates configuration content. `origin` names the source
    /// in error messages (usually the file path).
    pub fn parse(content: &str, origin: &str) -> Result<Self> {
        let root: Value = serde_yaml::from_str(content).map_err(|source| {
            anyhow!(DocforgeError::ConfigParse {
                path: origin.to_string(),
                source,
            })
        })?;
        if !root.is_mapping() {
            return Err(invalid(
                "Configuration root must be a mapping of settings".to_string(),
            ));
        }
        let config = Self { root };
        config.validate()?;
        debug!("Configuration accepted for tier '{}'", config.tier());
        Ok(config)
    }

    /// Checks the invariants of the data model: required top-level fields,
    /// required `project` subfields, and the `tier` enumeration. Nothing else
    /// in the tree is inspected.
    fn validate(&self) -> Result<()> {
        for field in REQUIRED_FIELDS {
            if self.get(&[field]).is_none() {
                return Err(invalid(format!(
                    "Missing required field '{field}' in configuration"
                )));
            }
        }

        match self.get(&["project"]) {
            Some(value) if value.is_mapping() => {}
            _ => {
                return Err(invalid(
                    "Field 'project' must be a mapping of project metadata".to_string(),
                ))
            }
        }
        for field in REQUIRED_PROJECT_FIELDS {
            if self.get(&["project", field]).is_none() {
                return Err(invalid(format!("Missing required project field '{field}'")));
            }
        }

        match self.str_at(&["tier"]) {
            Some(tier) if VALID_TIERS.contains(&tier) => Ok(()),
            Some(tier) => Err(invalid(format!(
                "Invalid tier '{}'. Must be one of: {}",
                tier,
                VALID_TIERS.join(", ")
            ))),
            None => Err(invalid(format!(
                "Field 'tier' must be a string naming one of: {}",
                VALID_TIERS.join(", ")
            ))),
        }
    }

    /// The documentation tier. Guaranteed by validation to be one of
    /// [`VALID_TIERS`].
    pub fn tier(&self) -> &str {
        self.str_at(&["tier"]).unwrap_or_default()
    }

    /// `project.name`, guaranteed present by validation.
    pub fn project_name(&self) -> &str {
        self.str_at(&["project", "name"]).unwrap_or_default()
    }

    /// `project.author`, guaranteed present by validation.
    pub fn project_author(&self) -> &str {
        self.str_at(&["project", "author"]).unwrap_or_default()
    }

    /// `project.version`, guaranteed present by validation.
    pub fn project_version(&self) -> &str {
        self.str_at(&["project", "version"]).unwrap_or_default()
    }

    /// Whether the boolean toggle `templates.core.<key>` is set. Absent or
    /// non-boolean values count as disabled.
    pub fn core_template_enabled(&self, key: &str) -> bool {
        self.get(&["templates", "core", key])
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// The `output` block with defaults applied. A malformed block (not a
    /// mapping) falls back to defaults; `output` is not a validated field.
    pub fn output_settings(&self) -> OutputSettings {
        self.get(&["output"])
            .and_then(|value| serde_yaml::from_value(value.clone()).ok())
            .unwrap_or_default()
    }

    /// The resolved output directory: `output.directory` if configured,
    /// otherwise `docs`, with `~` expanded.
    pub fn output_directory(&self) -> PathBuf {
        let dir = self.output_settings().directory;
        PathBuf::from(shellexpand::tilde(&dir).into_owned())
    }

    /// Overrides `output.directory` in the tree. This is the single permitted
    /// mutation after load; the new value is visible to templates as well.
    pub fn set_output_directory(&mut self, dir: &Path) {
        let dir_value = Value::String(dir.to_string_lossy().into_owned());
        let key = Value::String("output".to_string());
        if let Some(root) = self.root.as_mapping_mut() {
            // Replace a missing or non-mapping `output` with an empty block
            // first, then write the directory key into it.
            if !matches!(root.get(&key), Some(Value::Mapping(_))) {
                root.insert(key.clone(), Value::Mapping(Mapping::new()));
            }
            if let Some(Value::Mapping(output)) = root.get_mut(&key) {
                output.insert(Value::String("directory".into()), dir_value);
            }
        }
    }

    /// The whole configuration tree, for building the template substitution
    /// context. Every top-level key becomes a template variable.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Navigates a path of nested mapping keys.
    fn get(&self, path: &[&str]) -> Option<&Value> {
        let mut current = &self.root;
        for key in path {
            current = current.get(*key)?;
        }
        Some(current)
    }

    fn str_at(&self, path: &[&str]) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }
}

fn invalid(message: String) -> anyhow::Error {
    anyhow!(DocforgeError::ConfigValidation(message))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const VALID_YAML: &str = r#"
project:
  name: Test Project
  description: A test project
  author: Test Author
  version: 1.0.0
  created: 2024-12-09
tier: minimal
features:
  cascade: false
sections:
  prd:
    competitive_analysis: false
templates:
  core:
    prd: true
    technical_design: true
    features_csv: false
output:
  directory: docs
  format: markdown
"#;

    #[test]
    fn test_parse_valid_config() {
        let config = ProjectConfig::parse(VALID_YAML, "test.yaml").expect("valid config rejected");
        assert_eq!(config.tier(), "minimal");
        assert_eq!(config.project_name(), "Test Project");
        assert_eq!(config.project_author(), "Test Author");
        assert_eq!(config.project_version(), "1.0.0");
        assert!(config.core_template_enabled("prd"));
        assert!(config.core_template_enabled("technical_design"));
        assert!(!config.core_template_enabled("features_csv"));
        assert!(!config.core_template_enabled("adr")); // absent counts as disabled
    }

    #[test]
    fn test_missing_top_level_fields_rejected() {
        for field in ["project", "tier", "features", "sections", "templates"] {
            let mut tree: serde_yaml::Mapping = serde_yaml::from_str(VALID_YAML).unwrap();
            tree.remove(&Value::String(field.to_string()));
            let yaml = serde_yaml::to_string(&tree).unwrap();
            let err = ProjectConfig::parse(&yaml, "test.yaml").unwrap_err();
            assert!(
                err.to_string()
                    .contains(&format!("Missing required field '{field}'")),
                "unexpected error for '{field}': {err}"
            );
        }
    }

    #[test]
    fn test_missing_project_subfields_rejected() {
        for field in ["name", "author", "version"] {
            let mut tree: serde_yaml::Value = serde_yaml::from_str(VALID_YAML).unwrap();
            tree.get_mut("project")
                .and_then(Value::as_mapping_mut)
                .unwrap()
                .remove(&Value::String(field.to_string()));
            let yaml = serde_yaml::to_string(&tree).unwrap();
            let err = ProjectConfig::parse(&yaml, "test.yaml").unwrap_err();
            assert!(
                err.to_string()
                    .contains(&format!("Missing required project field '{field}'")),
                "unexpected error for '{field}': {err}"
            );
        }
    }

    #[test]
    fn test_unrecognized_tier_rejected() {
        let yaml = VALID_YAML.replace("tier: minimal", "tier: gold");
        let err = ProjectConfig::parse(&yaml, "test.yaml").unwrap_err();
        assert!(err.to_string().contains("Invalid tier 'gold'"));
    }

    #[test]
    fn test_non_string_tier_rejected() {
        let yaml = VALID_YAML.replace("tier: minimal", "tier: 3");
        let err = ProjectConfig::parse(&yaml, "test.yaml").unwrap_err();
        assert!(err.to_string().contains("Field 'tier' must be a string"));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let err = ProjectConfig::parse("tier: [unclosed", "broken.yaml").unwrap_err();
        assert!(err.to_string().contains("Invalid YAML"));
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ProjectConfig::load(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err
            .to_string()
            .contains("Configuration file not found: /definitely/not/here.yaml"));
    }

    #[test]
    fn test_output_directory_default_and_override() {
        let yaml = VALID_YAML.replace("  directory: docs\n", "");
        let mut config = ProjectConfig::parse(&yaml, "test.yaml").unwrap();
        assert_eq!(config.output_directory(), PathBuf::from("docs"));

        config.set_output_directory(Path::new("build/docs"));
        assert_eq!(config.output_directory(), PathBuf::from("build/docs"));
        // Sibling keys under `output` survive the override.
        assert_eq!(
            config.get(&["output", "format"]).and_then(Value::as_str),
            Some("markdown")
        );
    }

    #[test]
    fn test_output_directory_when_output_block_absent() {
        let yaml = VALID_YAML
            .replace("output:\n", "")
            .replace("  directory: docs\n", "")
            .replace("  format: markdown\n", "");
        let mut config = ProjectConfig::parse(&yaml, "test.yaml").unwrap();
        assert_eq!(config.output_directory(), PathBuf::from("docs"));

        config.set_output_directory(Path::new("site"));
        assert_eq!(config.output_directory(), PathBuf::from("site"));
    }
}
