//! RecommendationEngine - Taxonomy-checked recommendations over a catalog

use crate::ranking::rank_with_seed;
use catalog::{AgentCatalog, ThreatTaxonomy};
use serde::{Deserialize, Serialize};
use shared::{AdvisorConfig, Logger, Result, ScoreResult, ThreatCategory};
use std::collections::HashMap;
use std::sync::Arc;

/// Ranked agents for one threat category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub threat: ThreatCategory,
    pub results: Vec<ScoreResult>,
}

impl Recommendation {
    /// Highest-ranked agent
    pub fn top(&self) -> Option<&ScoreResult> {
        self.results.first()
    }
}

/// Recommendation engine.
///
/// Owns its catalog, taxonomy and configuration, so independent engines
/// never share state.
pub struct RecommendationEngine {
    catalog: AgentCatalog,
    taxonomy: ThreatTaxonomy,
    config: AdvisorConfig,
    logger: Arc<dyn Logger>,
}

impl RecommendationEngine {
    /// Create a new RecommendationEngine
    pub fn new(
        catalog: AgentCatalog,
        taxonomy: ThreatTaxonomy,
        config: AdvisorConfig,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            catalog,
            taxonomy,
            config,
            logger,
        }
    }

    /// Recommend the configured number of agents for a threat
    pub fn recommend(&self, threat_key: &str) -> Result<Recommendation> {
        self.recommend_top(threat_key, self.config.top_k)
    }

    /// Recommend up to `top_k` agents for a threat.
    ///
    /// Unknown threat keys are rejected here, before ranking.
    pub fn recommend_top(&self, threat_key: &str, top_k: usize) -> Result<Recommendation> {
        let threat = match self.taxonomy.get(threat_key) {
            Ok(threat) => threat,
            Err(e) => {
                self.logger.warn(&format!("Rejected threat key '{}'", threat_key), None);
                return Err(e);
            }
        };

        let results = rank_with_seed(self.catalog.agents(), threat_key, top_k, self.config.jitter_seed)?;

        let mut meta = HashMap::new();
        meta.insert("threat".to_string(), threat_key.to_string());
        meta.insert("returned".to_string(), results.len().to_string());
        if let Some(top) = results.first() {
            meta.insert("topAgent".to_string(), top.agent_name.clone());
        }
        self.logger.info(
            &format!(
                "Ranked {} agents for '{}' (top {})",
                self.catalog.len(),
                threat.display_name,
                top_k
            ),
            Some(&meta),
        );

        Ok(Recommendation {
            threat: threat.clone(),
            results,
        })
    }

    /// Look up a threat category
    pub fn threat(&self, key: &str) -> Result<&ThreatCategory> {
        self.taxonomy.get(key)
    }

    pub fn catalog(&self) -> &AgentCatalog {
        &self.catalog
    }

    pub fn taxonomy(&self) -> &ThreatTaxonomy {
        &self.taxonomy
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{AdvisorError, AgentProfile, NullLogger, Severity};

    fn create_engine(config: AdvisorConfig) -> RecommendationEngine {
        let (catalog, taxonomy) = catalog::builtin::load().unwrap();
        RecommendationEngine::new(catalog, taxonomy, config, Arc::new(NullLogger))
    }

    fn ids(recommendation: &Recommendation) -> Vec<u32> {
        recommendation.results.iter().map(|r| r.agent_id).collect()
    }

    #[test]
    fn test_recommend_ransomware_with_builtin_catalog() {
        let engine = create_engine(AdvisorConfig::default());
        let recommendation = engine.recommend("ransomware").unwrap();

        assert_eq!(recommendation.threat.severity, Severity::Critical);
        assert_eq!(recommendation.results.len(), 5);
        // CrowdStrike Falcon XDR, then Sophos Intercept X
        assert_eq!(&ids(&recommendation)[..2], &[1, 20]);
        assert!(recommendation.results.iter().all(|r| r.covers_threat));
        assert_eq!(recommendation.top().unwrap().agent_name, "CrowdStrike Falcon XDR");
    }

    #[test]
    fn test_every_builtin_threat_is_recommendable() {
        let engine = create_engine(AdvisorConfig::default());

        for key in engine.taxonomy().keys() {
            let recommendation = engine.recommend(key).unwrap();
            assert_eq!(recommendation.results.len(), 5);
            assert!(recommendation.results.iter().all(|r| r.confidence <= 99));
        }
    }

    #[test]
    fn test_unknown_threat_rejected() {
        let engine = create_engine(AdvisorConfig::default());

        match engine.recommend("meteor_strike") {
            Err(AdvisorError::UnknownThreatCategory(e)) => {
                assert_eq!(e.key, "meteor_strike");
                assert!(e.available.contains(&"ransomware".to_string()));
            }
            other => panic!("expected UnknownThreatCategory, got {:?}", other),
        }
    }

    #[test]
    fn test_configured_top_k() {
        let engine = create_engine(AdvisorConfig {
            top_k: 3,
            ..AdvisorConfig::default()
        });

        assert_eq!(engine.recommend("phishing").unwrap().results.len(), 3);
        assert_eq!(engine.recommend_top("phishing", 25).unwrap().results.len(), 25);
        assert!(matches!(
            engine.recommend_top("phishing", 0),
            Err(AdvisorError::InvalidTopK(0))
        ));
    }

    #[test]
    fn test_engines_are_independent() {
        let builtin = create_engine(AdvisorConfig::default());

        let taxonomy = ThreatTaxonomy::new([ThreatCategory::new(
            "phishing",
            "Phishing Campaign",
            Severity::High,
            "",
        )])
        .unwrap();
        let catalog = AgentCatalog::new(
            vec![AgentProfile::new(500, "Mail Filter", 0.5, 5.0, 0.2, 100.0).with_coverage(["phishing"])],
            &taxonomy,
        )
        .unwrap();
        let custom = RecommendationEngine::new(catalog, taxonomy, AdvisorConfig::default(), Arc::new(NullLogger));

        assert_eq!(ids(&custom.recommend("phishing").unwrap()), vec![500]);
        assert!(custom.recommend("ransomware").is_err());
        assert_eq!(builtin.recommend("phishing").unwrap().results.len(), 5);
    }

    #[test]
    fn test_empty_catalog_fails_at_recommend() {
        let taxonomy = catalog::builtin::taxonomy().unwrap();
        let catalog = AgentCatalog::new(Vec::new(), &taxonomy).unwrap();
        let engine = RecommendationEngine::new(catalog, taxonomy, AdvisorConfig::default(), Arc::new(NullLogger));

        assert!(matches!(engine.recommend("ransomware"), Err(AdvisorError::EmptyCatalog)));
    }

    #[test]
    fn test_jitter_seed_changes_minutes_not_order() {
        let a = create_engine(AdvisorConfig::default()).recommend("apt").unwrap();
        let b = create_engine(AdvisorConfig {
            jitter_seed: 12345,
            ..AdvisorConfig::default()
        })
        .recommend("apt")
        .unwrap();

        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_recommendation_serializes_camel_case() {
        let engine = create_engine(AdvisorConfig::default());
        let json = serde_json::to_value(engine.recommend("ddos").unwrap()).unwrap();

        assert_eq!(json["threat"]["displayName"], "DDoS Attack");
        assert!(json["results"][0]["expectedContainmentMinutes"].is_u64());
        assert!(json["results"][0]["rawScore"].is_f64());
    }
}
