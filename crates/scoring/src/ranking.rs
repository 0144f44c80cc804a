//! Ranking selector - score every agent, order, keep the top K

use crate::scorer::score_with_seed;
use shared::{AdvisorError, AgentProfile, Result, ScoreResult};
use std::cmp::Ordering;

/// Rank agents for a threat with the default jitter seed
pub fn rank(agents: &[AgentProfile], threat_key: &str, top_k: usize) -> Result<Vec<ScoreResult>> {
    rank_with_seed(agents, threat_key, top_k, 0)
}

/// Rank agents for a threat.
///
/// Output is ordered by descending raw score, ties by ascending agent id,
/// and holds `min(top_k, agents.len())` entries. Input order never matters.
/// Any invalid agent fails the whole call.
pub fn rank_with_seed(
    agents: &[AgentProfile],
    threat_key: &str,
    top_k: usize,
    seed: u64,
) -> Result<Vec<ScoreResult>> {
    if agents.is_empty() {
        return Err(AdvisorError::EmptyCatalog);
    }
    if top_k == 0 {
        return Err(AdvisorError::InvalidTopK(top_k));
    }

    let mut results = agents
        .iter()
        .map(|agent| score_with_seed(agent, threat_key, seed))
        .collect::<Result<Vec<_>>>()?;

    results.sort_by(by_score_then_id);
    results.truncate(top_k);
    Ok(results)
}

fn by_score_then_id(a: &ScoreResult, b: &ScoreResult) -> Ordering {
    b.raw_score
        .total_cmp(&a.raw_score)
        .then_with(|| a.agent_id.cmp(&b.agent_id))
}
