//! Score result - one agent scored against one threat category

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Outcome of scoring a single agent.
///
/// Every field is a copy taken at scoring time, so later catalog changes
/// never alter a recommendation that has already been delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub agent_id: u32,
    pub agent_name: String,

    /// Composite suitability, never negative
    pub raw_score: f64,

    /// Display confidence in 0..=99 (not a probability)
    pub confidence: u8,

    pub expected_containment_minutes: u32,

    /// Whether the scored threat was in the agent's declared coverage
    pub covers_threat: bool,

    pub effectiveness: f64,
    pub speed: f64,
    pub fp_rate: f64,
    pub monthly_cost: f64,
    pub coverage: BTreeSet<String>,
}
