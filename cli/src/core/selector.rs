//! # DocForge Template Selector
//!
//! File: cli/src/core/selector.rs
//! Repository: https://github.com/docforge-dev/docforge
//!
//! ## Overview
//!
//! This module computes which templates to render for a given documentation
//! tier. The result is an ordered list of template identifiers; the renderer
//! resolves each identifier to a resource on disk.
//!
//! ## Architecture
//!
//! The tiers nest: `core` extends `minimal`, `advanced` extends `core`. The
//! `custom` tier ignores the presets entirely and walks a table of
//! `templates.core.*` boolean toggles instead, including an identifier iff its
//! toggle is true. The toggle table enumerates every optional document, so a
//! configured document is never silently dropped.
//!
//! A tier string outside the four recognized values yields an empty list.
//! The configuration resolver rejects such values up front, so that branch is
//! unreachable in the normal control flow.
//!
use crate::core::config::ProjectConfig;
use tracing::debug;

/// Documents every tier starts from.
const MINIMAL_SET: [&str; 3] = ["prd", "technical-design", "features-csv"];

/// Documents the `core` tier adds on top of `minimal`.
const CORE_EXTRAS: [&str; 3] = ["development-guide", "sprint-planning", "sprint-template"];

/// Documents the `advanced` tier adds on top of `core`.
const ADVANCED_EXTRAS: [&str; 2] = ["master-index", "adr"];

/// For the `custom` tier: each `templates.core` config key paired with the
/// template identifier it enables, in render order.
const CUSTOM_TOGGLES: [(&str, &str); 8] = [
    ("prd", "prd"),
    ("technical_design", "technical-design"),
    ("features_csv", "features-csv"),
    ("development_guide", "development-guide"),
    ("sprint_planning", "sprint-planning"),
    ("sprint_template", "sprint-template"),
    ("master_index", "master-index"),
    ("adr", "adr"),
];

/// Returns the ordered template identifiers to render for `tier`.
///
/// The configuration is consulted only for the `custom` tier, where the
/// `templates.core.*` toggles decide inclusion.
pub fn templates_for_tier(tier: &str, config: &ProjectConfig) -> Vec<String> {
    let mut selected: Vec<&str> = Vec::new();
    match tier {
        "minimal" => selected.extend(MINIMAL_SET),
        "core" => {
            selected.extend(MINIMAL_SET);
            selected.extend(CORE_EXTRAS);
        }
        "advanced" => {
            selected.extend(MINIMAL_SET);
            selected.extend(CORE_EXTRAS);
            selected.extend(ADVANCED_EXTRAS);
        }
        "custom" => {
            for (key, id) in CUSTOM_TOGGLES {
                if config.core_template_enabled(key) {
                    selected.push(id);
                }
            }
        }
        _ => {}
    }
    debug!("Tier '{}' selects {} template(s)", tier, selected.len());
    selected.into_iter().map(str::to_string).collect()
}
