//! AgentCatalog - Validated collection of agent profiles

use crate::ThreatTaxonomy;
use shared::{AgentProfile, InvalidAgentProfileError, Result};
use std::collections::HashSet;

/// Immutable agent catalog.
///
/// Every profile has passed `AgentProfile::validate`, declares at least one
/// covered threat, and only references keys present in the taxonomy it was
/// built against. Ids and names are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentCatalog {
    agents: Vec<AgentProfile>,
}

impl AgentCatalog {
    pub fn new(agents: Vec<AgentProfile>, taxonomy: &ThreatTaxonomy) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();

        for agent in &agents {
            agent.validate()?;

            if agent.coverage.is_empty() {
                return Err(InvalidAgentProfileError::new(agent.id, "coverage must not be empty").into());
            }
            if let Some(unknown) = agent.coverage.iter().find(|k| !taxonomy.contains(k)) {
                return Err(InvalidAgentProfileError::new(
                    agent.id,
                    format!("coverage references unknown threat category '{}'", unknown),
                )
                .into());
            }
            if !ids.insert(agent.id) {
                return Err(InvalidAgentProfileError::new(agent.id, "duplicate agent id").into());
            }
            if !names.insert(agent.name.as_str()) {
                return Err(InvalidAgentProfileError::new(
                    agent.id,
                    format!("duplicate agent name '{}'", agent.name),
                )
                .into());
            }
        }

        Ok(Self { agents })
    }

    pub fn agents(&self) -> &[AgentProfile] {
        &self.agents
    }

    pub fn get(&self, id: u32) -> Option<&AgentProfile> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Agents declaring coverage for a threat key
    pub fn covering(&self, threat_key: &str) -> Vec<&AgentProfile> {
        self.agents.iter().filter(|a| a.covers(threat_key)).collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{AdvisorError, Severity, ThreatCategory};

    fn taxonomy() -> ThreatTaxonomy {
        ThreatTaxonomy::new([
            ThreatCategory::new("ransomware", "Ransomware Attack", Severity::Critical, ""),
            ThreatCategory::new("phishing", "Phishing Campaign", Severity::High, ""),
        ])
        .unwrap()
    }

    fn agent(id: u32, name: &str, coverage: &[&str]) -> AgentProfile {
        AgentProfile::new(id, name, 0.9, 8.0, 0.03, 600.0).with_coverage(coverage.iter().copied())
    }

    fn rejection_reason(result: Result<AgentCatalog>) -> (u32, String) {
        match result {
            Err(AdvisorError::InvalidAgentProfile(e)) => (e.agent_id, e.reason),
            other => panic!("expected InvalidAgentProfile, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_catalog() {
        let catalog = AgentCatalog::new(
            vec![
                agent(1, "Endpoint Guard", &["ransomware"]),
                agent(2, "Mail Shield", &["phishing"]),
            ],
            &taxonomy(),
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(2).unwrap().name, "Mail Shield");
        assert!(catalog.get(3).is_none());
        assert_eq!(catalog.covering("ransomware").len(), 1);
    }

    #[test]
    fn test_empty_coverage_rejected() {
        let result = AgentCatalog::new(vec![agent(4, "Generalist", &[])], &taxonomy());
        let (id, reason) = rejection_reason(result);
        assert_eq!(id, 4);
        assert!(reason.contains("coverage"));
    }

    #[test]
    fn test_unknown_coverage_rejected() {
        let result = AgentCatalog::new(vec![agent(5, "Flood Wall", &["ddos"])], &taxonomy());
        let (id, reason) = rejection_reason(result);
        assert_eq!(id, 5);
        assert!(reason.contains("'ddos'"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = AgentCatalog::new(
            vec![agent(1, "First", &["phishing"]), agent(1, "Second", &["phishing"])],
            &taxonomy(),
        );
        let (_, reason) = rejection_reason(result);
        assert_eq!(reason, "duplicate agent id");
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = AgentCatalog::new(
            vec![agent(1, "Twin", &["phishing"]), agent(2, "Twin", &["ransomware"])],
            &taxonomy(),
        );
        let (id, reason) = rejection_reason(result);
        assert_eq!(id, 2);
        assert!(reason.contains("duplicate agent name"));
    }

    #[test]
    fn test_range_violation_surfaces_at_load() {
        let mut bad = agent(9, "Noisy", &["phishing"]);
        bad.fp_rate = 2.0;

        let (id, reason) = rejection_reason(AgentCatalog::new(vec![bad], &taxonomy()));
        assert_eq!(id, 9);
        assert!(reason.contains("fpRate"));
    }

    #[test]
    fn test_empty_catalog_is_allowed_at_load() {
        // Ranking is where an empty catalog becomes an error
        let catalog = AgentCatalog::new(Vec::new(), &taxonomy()).unwrap();
        assert!(catalog.is_empty());
    }
}
