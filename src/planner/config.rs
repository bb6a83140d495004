use std::collections::BTreeSet;

use crate::error::{PlanError, Result};

/// Immutable constraint set for one plan-generation run.
///
/// Include and exclude sets hold lowercase names; use [`PlanConfig::name_set`]
/// when building them from raw CLI input.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    pub days: usize,
    pub servings: f64,
    pub reuse_allowed: bool,
    /// `None` means unbounded.
    pub max_repeats: Option<u32>,
    /// `None` means an entropy-seeded, non-reproducible run.
    pub seed: Option<u64>,
    pub include: BTreeSet<String>,
    pub exclude: BTreeSet<String>,
    pub interactive: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            days: 7,
            servings: 1.0,
            reuse_allowed: true,
            max_repeats: None,
            seed: None,
            include: BTreeSet::new(),
            exclude: BTreeSet::new(),
            interactive: false,
        }
    }
}

impl PlanConfig {
    pub fn validate(&self) -> Result<()> {
        if self.days < 1 {
            return Err(PlanError::InvalidInput("days must be at least 1".into()));
        }
        if self.servings < 1.0 {
            return Err(PlanError::InvalidInput(
                "servings must be at least 1".into(),
            ));
        }
        if self.max_repeats == Some(0) {
            return Err(PlanError::InvalidInput(
                "max-repeats must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Lowercased name set from raw CLI values.
    pub fn name_set(names: &[String]) -> BTreeSet<String> {
        names.iter().map(|n| n.trim().to_lowercase()).collect()
    }

    /// One-line summary of the active constraints, used in exhaustion errors.
    pub fn constraint_summary(&self) -> String {
        let mut parts = vec![format!(
            "reuse={}",
            if self.reuse_allowed { "on" } else { "off" }
        )];
        if let Some(limit) = self.max_repeats {
            parts.push(format!("max-repeats={limit}"));
        }
        if !self.include.is_empty() {
            parts.push(format!("include=[{}]", join(&self.include)));
        }
        if !self.exclude.is_empty() {
            parts.push(format!("exclude=[{}]", join(&self.exclude)));
        }
        parts.join(", ")
    }
}

fn join(names: &BTreeSet<String>) -> String {
    names.iter().cloned().collect::<Vec<_>>().join(", ")
}
