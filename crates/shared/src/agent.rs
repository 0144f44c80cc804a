//! Agent profile - a security detection/response product in the catalog

use crate::{InvalidAgentProfileError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Static performance attributes of a detection/response agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentProfile {
    /// Stable identity key (positive)
    pub id: u32,

    /// Display name, unique within a catalog
    pub name: String,

    /// Detection/response success rate in [0, 1]
    pub effectiveness: f64,

    /// Relative responsiveness in [0, 10], higher is faster
    pub speed: f64,

    /// False-positive rate in [0, 1], lower is better
    pub fp_rate: f64,

    /// Licensing cost per month
    pub monthly_cost: f64,

    /// Threat category keys this agent specializes in
    #[serde(default)]
    pub coverage: BTreeSet<String>,
}

impl AgentProfile {
    /// Create a profile with empty coverage
    pub fn new(
        id: u32,
        name: impl Into<String>,
        effectiveness: f64,
        speed: f64,
        fp_rate: f64,
        monthly_cost: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            effectiveness,
            speed,
            fp_rate,
            monthly_cost,
            coverage: BTreeSet::new(),
        }
    }

    /// Builder: add covered threat keys
    pub fn with_coverage<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.coverage.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Check if this agent declares coverage for a threat key
    pub fn covers(&self, threat_key: &str) -> bool {
        self.coverage.contains(threat_key)
    }

    /// Check identity and numeric-range invariants.
    ///
    /// Coverage is not checked here: an empty or unknown coverage set is
    /// a catalog concern and is rejected when the catalog is built.
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: String| -> Result<()> {
            Err(InvalidAgentProfileError::new(self.id, reason).into())
        };

        if self.id == 0 {
            return fail("id must be a positive integer".to_string());
        }
        if self.name.trim().is_empty() {
            return fail("name must not be empty".to_string());
        }
        if !in_range(self.effectiveness, 0.0, 1.0) {
            return fail(format!("effectiveness {} outside [0, 1]", self.effectiveness));
        }
        if !in_range(self.speed, 0.0, 10.0) {
            return fail(format!("speed {} outside [0, 10]", self.speed));
        }
        if !in_range(self.fp_rate, 0.0, 1.0) {
            return fail(format!("fpRate {} outside [0, 1]", self.fp_rate));
        }
        if !(self.monthly_cost.is_finite() && self.monthly_cost > 0.0) {
            return fail(format!("monthlyCost {} must be positive", self.monthly_cost));
        }
        Ok(())
    }
}

fn in_range(value: f64, min: f64, max: f64) -> bool {
    // NaN fails both comparisons
    value >= min && value <= max
}
