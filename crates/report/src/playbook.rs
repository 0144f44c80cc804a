//! Playbook - Incident-response playbook export (Markdown / JSON)

use crate::summary::{rationale, RecommendationSummary};
use chrono::{DateTime, Utc};
use scoring::Recommendation;
use serde::Serialize;
use shared::{Result, ScoreResult, ThreatCategory};
use std::path::{Path, PathBuf};

/// Number of agents a playbook lists
pub const PLAYBOOK_MAX_ENTRIES: usize = 5;

/// Incident-response playbook for one threat.
///
/// Entries are taken in the order given; the engine has already sorted and
/// truncated them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Playbook {
    pub threat: ThreatCategory,
    pub entries: Vec<ScoreResult>,
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<RecommendationSummary>,
}

impl Playbook {
    pub fn new(threat: ThreatCategory, results: &[ScoreResult]) -> Self {
        Self {
            threat,
            entries: results.iter().take(PLAYBOOK_MAX_ENTRIES).cloned().collect(),
            generated_at: Utc::now(),
            summary: None,
        }
    }

    pub fn from_recommendation(recommendation: &Recommendation) -> Self {
        Self::new(recommendation.threat.clone(), &recommendation.results)
    }

    /// Builder: fix the generation time
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Builder: attach response-time comparison figures
    pub fn with_summary(mut self, summary: RecommendationSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Default file name: `playbook_<threat>_<YYYYmmdd_HHMMSS>.md`
    pub fn file_name(&self) -> String {
        format!(
            "playbook_{}_{}.md",
            self.threat.key,
            self.generated_at.format("%Y%m%d_%H%M%S")
        )
    }

    pub fn render_markdown(&self) -> String {
        let mut content = String::from("# Incident Response Playbook\n\n");
        content.push_str(&format!(
            "Generated: {}\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));
        content.push_str(&format!("## Threat: {}\n\n", self.threat.label()));
        content.push_str(&format!("Description: {}\n\n", self.threat.description));
        content.push_str(&format!("## Recommended Agents (Top {})\n", PLAYBOOK_MAX_ENTRIES));

        for (idx, entry) in self.entries.iter().enumerate() {
            content.push_str(&format!(
                "\n### {}. {} (Score: {:.1})\n",
                idx + 1,
                entry.agent_name,
                entry.raw_score
            ));
            content.push_str(&format!(
                "- Confidence: {}% | Expected Time: {} min\n",
                entry.confidence, entry.expected_containment_minutes
            ));
            content.push_str(&format!(
                "- Effectiveness: {:.0}% | Speed: {:.1}/10 | FP Rate: {:.1}%\n",
                entry.effectiveness * 100.0,
                entry.speed,
                entry.fp_rate * 100.0
            ));
            if idx == 0 {
                content.push_str(&format!("- Why this agent: {}\n", rationale(entry, &self.threat)));
            }
        }

        if let Some(summary) = &self.summary {
            content.push_str("\n## Response Time Comparison\n\n");
            content.push_str(&format!(
                "- Manual SOC decision: {} min\n",
                summary.manual_baseline_minutes
            ));
            content.push_str(&format!(
                "- Recommended agents: {} min\n",
                summary.mean_expected_minutes
            ));
            content.push_str(&format!(
                "- Time saved: ~{} min per incident ({:.1}% reduction)\n",
                summary.time_saved_minutes, summary.reduction_percent
            ));
            content.push_str(&format!(
                "- Total monthly cost: ${:.0}\n",
                summary.total_monthly_cost
            ));
        }

        content
    }

    /// Write the Markdown playbook into a directory, returning its path
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        std::fs::write(&path, self.render_markdown())?;
        Ok(path)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use scoring::RecommendationEngine;
    use shared::{AdvisorConfig, NullLogger};
    use std::sync::Arc;

    fn recommendation(threat: &str, top_k: usize) -> Recommendation {
        let (catalog, taxonomy) = catalog::builtin::load().unwrap();
        let engine = RecommendationEngine::new(catalog, taxonomy, AdvisorConfig::default(), Arc::new(NullLogger));
        engine.recommend_top(threat, top_k).unwrap()
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn test_render_ransomware_playbook() {
        let playbook = Playbook::from_recommendation(&recommendation("ransomware", 5))
            .with_generated_at(fixed_time());
        let markdown = playbook.render_markdown();

        assert!(markdown.contains("Generated: 2025-03-14 09:26:53"));
        assert!(markdown.contains("## Threat: Ransomware Attack (CRITICAL)"));
        assert!(markdown.contains("Description: File encryption with ransom demand"));
        assert!(markdown.contains("### 1. CrowdStrike Falcon XDR (Score: 52.9)"));
        assert!(markdown.contains("- Effectiveness: 95% | Speed: 8.5/10 | FP Rate: 2.0%"));
        assert!(markdown.contains("Direct coverage for this threat type."));
        assert!(markdown.contains("### 5. "));
        assert!(!markdown.contains("Response Time Comparison"));
    }

    #[test]
    fn test_render_layout() {
        let markdown = Playbook::from_recommendation(&recommendation("ransomware", 5))
            .with_generated_at(fixed_time())
            .render_markdown();

        assert!(markdown.starts_with(
            "# Incident Response Playbook\n\nGenerated: 2025-03-14 09:26:53\n\n## Threat: Ransomware Attack (CRITICAL)\n\n"
        ));
        assert!(markdown.contains("## Recommended Agents (Top 5)\n\n### 1. "));
        assert!(markdown.ends_with('\n'));
        assert!(!markdown.contains("\n\n\n"));
    }

    #[test]
    fn test_playbook_keeps_at_most_five_entries() {
        let playbook = Playbook::from_recommendation(&recommendation("apt", 10));
        assert_eq!(playbook.entries.len(), PLAYBOOK_MAX_ENTRIES);
        assert!(!playbook.render_markdown().contains("### 6. "));
    }

    #[test]
    fn test_playbook_preserves_given_order() {
        let rec = recommendation("phishing", 5);
        let playbook = Playbook::from_recommendation(&rec);
        assert_eq!(playbook.entries, rec.results);
    }

    #[test]
    fn test_summary_section() {
        let rec = recommendation("malware", 5);
        let summary = RecommendationSummary::from_results(&rec.results, 8).unwrap();
        let markdown = Playbook::from_recommendation(&rec)
            .with_summary(summary.clone())
            .render_markdown();

        assert!(markdown.contains("## Response Time Comparison"));
        assert!(markdown.contains(&format!("- Manual SOC decision: {} min", summary.manual_baseline_minutes)));
    }

    #[test]
    fn test_file_name() {
        let playbook = Playbook::from_recommendation(&recommendation("zero_day", 5))
            .with_generated_at(fixed_time());
        assert_eq!(playbook.file_name(), "playbook_zero_day_20250314_092653.md");
    }

    #[test]
    fn test_save_writes_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let playbook = Playbook::from_recommendation(&recommendation("ddos", 5))
            .with_generated_at(fixed_time());

        let path = playbook.save(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("playbook_ddos_20250314_092653.md"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), playbook.render_markdown());
    }

    #[test]
    fn test_json_export() {
        let playbook = Playbook::from_recommendation(&recommendation("bot_attack", 5));
        let value: serde_json::Value = serde_json::from_str(&playbook.to_json().unwrap()).unwrap();

        assert_eq!(value["threat"]["key"], "bot_attack");
        assert_eq!(value["entries"].as_array().unwrap().len(), 5);
        assert!(value.get("summary").is_none());
    }
}
