//! Summary metrics derived from a ranked result list

use serde::{Deserialize, Serialize};
use shared::{AdvisorError, Result, ScoreResult, ThreatCategory};

/// Aggregates shown alongside a recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSummary {
    pub top_agent: String,
    pub top_confidence: u8,
    pub top_effectiveness: f64,

    /// Mean expected containment time, truncated to whole minutes
    pub mean_expected_minutes: u32,

    pub total_monthly_cost: f64,

    /// Mean time plus the manual decision overhead
    pub manual_baseline_minutes: u32,

    pub time_saved_minutes: u32,
    pub reduction_percent: f64,
}

impl RecommendationSummary {
    pub fn from_results(results: &[ScoreResult], manual_overhead_minutes: u32) -> Result<Self> {
        let top = results.first().ok_or(AdvisorError::EmptyCatalog)?;

        let total_minutes: u64 = results
            .iter()
            .map(|r| u64::from(r.expected_containment_minutes))
            .sum();
        let mean_expected_minutes = (total_minutes / results.len() as u64) as u32;
        let manual_baseline_minutes = mean_expected_minutes
            .checked_add(manual_overhead_minutes)
            .ok_or_else(|| {
                AdvisorError::Config(format!(
                    "manual overhead of {} minutes overflows the baseline",
                    manual_overhead_minutes
                ))
            })?;
        let time_saved_minutes = manual_baseline_minutes - mean_expected_minutes;

        let reduction_percent = if manual_baseline_minutes == 0 {
            0.0
        } else {
            f64::from(time_saved_minutes) / f64::from(manual_baseline_minutes) * 100.0
        };

        Ok(Self {
            top_agent: top.agent_name.clone(),
            top_confidence: top.confidence,
            top_effectiveness: top.effectiveness,
            mean_expected_minutes,
            total_monthly_cost: results.iter().map(|r| r.monthly_cost).sum(),
            manual_baseline_minutes,
            time_saved_minutes,
            reduction_percent,
        })
    }
}

/// The four axes of an agent's profile chart, each nominally 0-100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentProfileChart {
    pub effectiveness: f64,
    pub speed: f64,
    pub low_fp_rate: f64,
    /// Negative when the monthly cost exceeds 1000
    pub cost_efficiency: f64,
}

impl AgentProfileChart {
    pub fn from_result(result: &ScoreResult) -> Self {
        Self {
            effectiveness: result.effectiveness * 100.0,
            speed: result.speed * 10.0,
            low_fp_rate: (1.0 - result.fp_rate) * 100.0,
            cost_efficiency: (1000.0 - result.monthly_cost) / 10.0,
        }
    }

    pub fn axes(&self) -> [(&'static str, f64); 4] {
        [
            ("Effectiveness", self.effectiveness),
            ("Speed", self.speed),
            ("Low FP Rate", self.low_fp_rate),
            ("Cost Efficiency", self.cost_efficiency),
        ]
    }
}

/// Explanation for why an agent was ranked first
pub fn rationale(result: &ScoreResult, threat: &ThreatCategory) -> String {
    let mut text = format!(
        "Highest combined score for {}. Optimal balance of effectiveness ({:.0}%), \
         response speed ({:.1}/10), and low false-positive rate ({:.1}%).",
        threat.display_name,
        result.effectiveness * 100.0,
        result.speed,
        result.fp_rate * 100.0,
    );
    if result.covers_threat {
        text.push_str(" Direct coverage for this threat type.");
    }
    text
}
