//! # DocForge Template Rendering
//!
//! File: cli/src/core/templating.rs
//! Repository: https://github.com/docforge-dev/docforge
//!
//! ## Overview
//!
//! This module renders a single documentation template against the project
//! configuration. It resolves a template identifier to a resource on disk,
//! builds the substitution context from the whole configuration tree, and
//! returns the rendered text.
//!
//! ## Architecture
//!
//! Rendering uses the Tera templating engine and follows these steps:
//! 1. Locate the resource for the identifier: the document variant
//!    (`<id>.md`) is tried first, the tabular variant (`<id>.csv`) second.
//! 2. Build a Tera context by serializing the entire configuration, so every
//!    top-level configuration key is a substitution variable.
//! 3. Render with a fresh engine per template; a failure in one template
//!    cannot leak state into the next.
//!
//! Every failure is a typed [`DocforgeError`] so the caller can distinguish a
//! missing resource (warn and skip) from a rendering failure (error and skip).
//!
//! ## The `strftime` filter
//!
//! Templates may pipe a value through `strftime(format=...)`. The literal
//! sentinel `"now"` is replaced with the current timestamp formatted with the
//! given chrono pattern; any other input passes through unchanged. Inputs are
//! not validated to be dates; documents are text, and authors may substitute
//! a fixed string where a date would go.
//!
//! ```text
//! Created: {{ project.created | strftime(format="%Y-%m-%d") }}
//! ```
//!
//! The clock is injectable (see [`Renderer::with_clock`]) so tests can assert
//! on formatted output without racing the wall clock.
//!
use crate::core::config::ProjectConfig;
use crate::core::error::DocforgeError;
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera, Value};
use tracing::debug;

/// Resource extensions tried per identifier, in preference order.
const TEMPLATE_EXTENSIONS: [&str; 2] = ["md", "csv"];

/// Source of "now" for the `strftime` filter.
pub type Clock = fn() -> DateTime<Local>;

/// Renders templates from a source directory.
pub struct Renderer {
    source_dir: PathBuf,
    clock: Clock,
}

impl Renderer {
    /// A renderer reading templates from `source_dir`, using the system clock.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self::with_clock(source_dir, Local::now)
    }

    /// A renderer with an explicit clock. Tests pass a fixed clock here.
    pub fn with_clock(source_dir: impl Into<PathBuf>, clock: Clock) -> Self {
        Self {
            source_dir: source_dir.into(),
            clock,
        }
    }

    /// Resolves a template identifier to a resource path, trying the document
    /// variant first and the tabular variant second.
    pub fn locate(&self, id: &str) -> Option<PathBuf> {
        for ext in TEMPLATE_EXTENSIONS {
            let candidate = self.source_dir.join(format!("{id}.{ext}"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        None
    }

    /// Renders the template for `id` against the full configuration.
    ///
    /// # Errors
    ///
    /// - [`DocforgeError::TemplateNotFound`] if neither resource variant exists.
    /// - [`DocforgeError::TemplateRender`] on any template syntax or
    ///   substitution failure (including placeholders referencing missing
    ///   nested fields).
    /// - [`DocforgeError::FileSystem`] if the resource cannot be read.
    pub fn render(&self, id: &str, config: &ProjectConfig) -> Result<String, DocforgeError> {
        let path = self
            .locate(id)
            .ok_or_else(|| DocforgeError::TemplateNotFound { id: id.to_string() })?;
        debug!("Rendering template '{}' from {}", id, path.display());

        let raw = fs::read_to_string(&path).map_err(|err| {
            DocforgeError::FileSystem(format!(
                "Failed to read template file '{}': {err}",
                path.display()
            ))
        })?;

        let mut tera = Tera::default();
        tera.register_filter("strftime", strftime_filter(self.clock));
        tera.add_raw_template(id, &raw)
            .map_err(|source| DocforgeError::TemplateRender {
                id: id.to_string(),
                source,
            })?;

        let context = Context::from_serialize(config.as_value()).map_err(|source| {
            DocforgeError::TemplateRender {
                id: id.to_string(),
                source,
            }
        })?;

        tera.render(id, &context)
            .map_err(|source| DocforgeError::TemplateRender {
                id: id.to_string(),
                source,
            })
    }

    /// The directory this renderer reads templates from.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }
}

/// Builds the `strftime` filter around the given clock.
///
/// `{{ "now" | strftime(format="%Y-%m-%d") }}` formats the current time;
/// any other input value passes through unchanged.
fn strftime_filter(
    clock: Clock,
) -> impl Fn(&Value, &HashMap<String, Value>) -> tera::Result<Value> + Send + Sync {
    move |value: &Value, args: &HashMap<String, Value>| {
        let format = args
            .get("format")
            .and_then(Value::as_str)
            .ok_or_else(|| tera::Error::msg("the strftime filter requires a `format` argument"))?;
        match value.as_str() {
            Some("now") => Ok(Value::String(clock().format(format).to_string())),
            _ => Ok(value.clone()),
        }
    }
}
