// ramsinrs/src/env.rs

//! Environment variable capture and name resolution.
//!
//! Overrides arrive as `RAMSIN_<GROUP>_<FIELD>=<VALUE>` (or the flat
//! `RAMSIN_<FIELD>` form for top-level concerns of the basic document).
//! Group and field names may themselves contain underscores, so the split is
//! ambiguous; the greedy shortest-prefix rule below resolves it: the first
//! token prefix that exactly names a known group wins, and the remainder is
//! the field.

use std::env;

/// Prefix every recognized environment variable carries.
pub const ENV_PREFIX: &str = "RAMSIN_";

/// A candidate override captured from one environment variable. Ephemeral;
/// lives for one reconciliation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RawOverride {
    /// Original variable name, for log messages.
    pub var: String,
    /// Lowercased remainder after the prefix.
    pub key: String,
    /// Raw value, untouched.
    pub value: String,
}

impl RawOverride {
    pub fn new(var: &str, value: &str) -> Option<Self> {
        let rest = var.strip_prefix(ENV_PREFIX)?;
        if rest.is_empty() {
            return None;
        }
        Some(Self {
            var: var.to_string(),
            key: rest.to_lowercase(),
            value: value.to_string(),
        })
    }
}

/// Snapshot the process environment once, keeping only `RAMSIN_*` variables.
/// Sorted by variable name so logs and error lists are deterministic.
pub fn collect_overrides() -> Vec<RawOverride> {
    let mut overrides: Vec<RawOverride> = env::vars()
        .filter_map(|(var, value)| RawOverride::new(&var, &value))
        .collect();
    overrides.sort_by(|a, b| a.var.cmp(&b.var));
    overrides
}

/// A resolved `(group, field)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub group: String,
    pub field: String,
}

/// Split `key` into `(group, field)` against the known group names using the
/// greedy shortest-prefix rule. Returns None when no prefix names a group.
pub fn resolve_key(key: &str, groups: &[String]) -> Option<Resolved> {
    let tokens: Vec<&str> = key.split('_').collect();
    for i in 1..tokens.len() {
        let candidate = tokens[..i].join("_");
        if groups.iter().any(|g| g == &candidate) {
            return Some(Resolved {
                group: candidate,
                field: tokens[i..].join("_"),
            });
        }
    }
    None
}
