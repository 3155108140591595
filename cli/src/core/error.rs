//! # DocForge Error Types
//!
//! File: cli/src/core/error.rs
//! Repository: https://github.com/docforge-dev/docforge
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used throughout
//! the DocForge application. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `DocforgeError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The variants fall into two families with different lifecycles:
//! - Configuration errors (`ConfigNotFound`, `ConfigParse`, `ConfigValidation`)
//!   are fatal: the run aborts and the process exits nonzero.
//! - Template errors (`TemplateNotFound`, `TemplateRender`) are recoverable:
//!   the affected document is skipped and the batch continues.
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if !path.exists() {
//!     return Err(DocforgeError::ConfigNotFound { path: path.display().to_string() })?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
//! Fatal errors surface a single human-readable message naming the offending
//! file or field; recoverable errors name the offending template identifier.
//!
use thiserror::Error;

/// Custom error type for the DocForge application.
#[derive(Error, Debug)]
pub enum DocforgeError {
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Invalid YAML in configuration file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Configuration validation failed: {0}")]
    ConfigValidation(String),

    #[error("Template not found: {id}.md or {id}.csv")]
    TemplateNotFound { id: String },

    #[error("Error processing template '{id}': {source}")]
    TemplateRender {
        id: String,
        #[source]
        source: tera::Error,
    },

    #[error("Filesystem error: {0}")]
    FileSystem(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
