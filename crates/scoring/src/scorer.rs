//! Scoring function - one agent against one threat category
//!
//! ```text
//! rawScore = effectiveness*10 + speed*1.2 + fpTerm*0.8 + coverageBonus*15 - monthlyCost/100
//! fpTerm   = 1 / (fpRate + 0.01)
//! ```
//!
//! The weights are load-bearing: changing any of them changes rankings.

use sha2::{Digest, Sha256};
use shared::{AgentProfile, Result, ScoreResult};

const EFFECTIVENESS_WEIGHT: f64 = 10.0;
const SPEED_WEIGHT: f64 = 1.2;
const FP_WEIGHT: f64 = 0.8;
const COVERAGE_WEIGHT: f64 = 15.0;
const COST_DIVISOR: f64 = 100.0;

const COVERED_BONUS: f64 = 1.0;
const UNCOVERED_BONUS: f64 = 0.3;

/// Keeps the FP term finite (max 100) for a perfect agent
const FP_FLOOR: f64 = 0.01;

const JITTER_MIN: u32 = 3;
const JITTER_MAX: u32 = 7;

const CONFIDENCE_SCALE: f64 = 3.5;
const CONFIDENCE_OFFSET: f64 = 40.0;
const CONFIDENCE_CAP: u8 = 99;

/// Score an agent with the default jitter seed (0)
pub fn score(agent: &AgentProfile, threat_key: &str) -> Result<ScoreResult> {
    score_with_seed(agent, threat_key, 0)
}

/// Score an agent.
///
/// Unknown threat keys are not an error; they earn the uncovered bonus.
/// Fails only when the profile itself is out of range.
pub fn score_with_seed(agent: &AgentProfile, threat_key: &str, seed: u64) -> Result<ScoreResult> {
    agent.validate()?;

    let covers_threat = agent.covers(threat_key);
    let coverage_bonus = if covers_threat { COVERED_BONUS } else { UNCOVERED_BONUS };
    let fp_term = 1.0 / (agent.fp_rate + FP_FLOOR);

    let composite = agent.effectiveness * EFFECTIVENESS_WEIGHT
        + agent.speed * SPEED_WEIGHT
        + fp_term * FP_WEIGHT
        + coverage_bonus * COVERAGE_WEIGHT
        - agent.monthly_cost / COST_DIVISOR;
    let raw_score = composite.max(0.0);

    // speed is in [0, 10] so the base is never negative
    let base_minutes = ((10.0 - agent.speed) * 2.0).round() as u32;
    let expected_containment_minutes = base_minutes + containment_jitter(seed, agent.id, threat_key);

    Ok(ScoreResult {
        agent_id: agent.id,
        agent_name: agent.name.clone(),
        raw_score,
        confidence: confidence(raw_score),
        expected_containment_minutes,
        covers_threat,
        effectiveness: agent.effectiveness,
        speed: agent.speed,
        fp_rate: agent.fp_rate,
        monthly_cost: agent.monthly_cost,
        coverage: agent.coverage.clone(),
    })
}

/// Deterministic jitter in `JITTER_MIN..=JITTER_MAX` for an (agent, threat) pair.
///
/// Derived from a SHA-256 digest of the inputs rather than a shared random
/// stream, so the value does not depend on call order or process.
pub fn containment_jitter(seed: u64, agent_id: u32, threat_key: &str) -> u32 {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(agent_id.to_le_bytes());
    hasher.update(threat_key.as_bytes());
    let digest = hasher.finalize();

    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    let span = u64::from(JITTER_MAX - JITTER_MIN + 1);

    JITTER_MIN + (u64::from_le_bytes(head) % span) as u32
}

fn confidence(raw_score: f64) -> u8 {
    let scaled = (raw_score * CONFIDENCE_SCALE + CONFIDENCE_OFFSET).round();
    scaled.clamp(0.0, f64::from(CONFIDENCE_CAP)) as u8
}
