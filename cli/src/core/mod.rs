//! # DocForge Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Repository: https://github.com/docforge-dev/docforge
//!
//! ## Overview
//!
//! This module aggregates the core components that implement DocForge's
//! actual behavior: resolving the project configuration, selecting the
//! template set for a tier, and rendering individual templates.
//!
//! ## Architecture
//!
//! The core consists of four components:
//! - `config`: Configuration loading and validation (the resolver)
//! - `error`: Error types and error handling utilities
//! - `selector`: Tier-to-template selection
//! - `templating`: Per-template rendering against the configuration
//!
//! The command modules drive these in sequence: resolve, select, render.
//!
//! ## Usage
//!
//! Core infrastructure is imported by command handlers:
//!
//! ```rust
//! use crate::core::config::ProjectConfig;
//! use crate::core::error::{DocforgeError, Result};
//! use crate::core::selector;
//! use crate::core::templating::Renderer;
//! ```
//!
pub mod config;
pub mod error;
pub mod selector;
pub mod templating;
