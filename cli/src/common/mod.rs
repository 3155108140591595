//! # DocForge Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Repository: https://github.com/docforge-dev/docforge
//!
//! ## Overview
//!
//! Root module for shared utilities used across the DocForge CLI. Keeping
//! cross-cutting helpers under the `common::` namespace separates them from
//! command-specific logic (`commands::`) and core behavior (`core::`).
//!
//! ## Architecture
//!
//! - **`fs`**: Foundational filesystem operations (directory creation, file
//!   writing) used when emitting rendered documents.
//!

/// Filesystem helpers. Includes the `io` submodule.
pub mod fs;
