//! # DocForge Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Repository: https://github.com/docforge-dev/docforge
//!
//! ## Overview
//!
//! Fundamental filesystem I/O helpers shared by the command modules. The
//! generator uses these to create the output directory and to write rendered
//! documents, with consistent error context on failure.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if absent, and
//!   validates that an existing path actually is a directory.
//! - **`write_string_to_file`**: Writes string content to a path, ensuring the
//!   parent directory exists first. Overwrites an existing file.
//!
use crate::core::error::{DocforgeError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, it is created along with any missing parents
/// (like `mkdir -p`). If the path exists but is not a directory, an error is
/// returned.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(DocforgeError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Writes string content to a file path, overwriting if it exists.
///
/// The parent directory of `path` is created first if necessary.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be created or the write
/// fails.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote content to file: {:?}", path);
    Ok(())
}
