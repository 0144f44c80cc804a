//! Terminal rendering of recommendations

use console::{style, StyledObject};
use report::{rationale, AgentProfileChart, RecommendationSummary};
use scoring::Recommendation;
use serde::Serialize;
use shared::{Severity, ThreatCategory};

/// JSON shape printed by `--json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationOutput<'a> {
    #[serde(flatten)]
    pub recommendation: &'a Recommendation,
    pub summary: RecommendationSummary,
}

pub fn severity_badge(severity: Severity) -> StyledObject<&'static str> {
    let badge = style(severity.as_str()).bold();
    match severity {
        Severity::Critical => badge.red(),
        Severity::High => badge.yellow(),
        Severity::Medium => badge.cyan(),
        Severity::Low => badge.green(),
    }
}

pub fn threat_header(threat: &ThreatCategory) -> String {
    format!(
        "{} [{}]\n  {}",
        style(&threat.display_name).bold(),
        severity_badge(threat.severity),
        threat.description
    )
}

/// Human-readable report: header, summary, ranked agents
pub fn render_recommendation(recommendation: &Recommendation, summary: &RecommendationSummary) -> String {
    let mut lines = vec![threat_header(&recommendation.threat), String::new()];

    lines.push(style("Summary").bold().underlined().to_string());
    lines.push(format!(
        "  Top agent:     {} ({}% confidence)",
        summary.top_agent, summary.top_confidence
    ));
    lines.push(format!("  Avg response:  {} min", summary.mean_expected_minutes));
    lines.push(format!("  Effectiveness: {:.0}%", summary.top_effectiveness * 100.0));
    lines.push(format!("  Total cost:    ${:.0}/month", summary.total_monthly_cost));
    lines.push(format!(
        "  Manual SOC:    {} min  ->  saved ~{} min ({:.1}% reduction)",
        summary.manual_baseline_minutes, summary.time_saved_minutes, summary.reduction_percent
    ));
    lines.push(String::new());

    lines.push(
        style(format!("Recommended Agents (Top {})", recommendation.results.len()))
            .bold()
            .underlined()
            .to_string(),
    );
    for (idx, result) in recommendation.results.iter().enumerate() {
        let marker = if result.covers_threat { style("✓").green() } else { style("·").dim() };
        lines.push(format!(
            "  #{} {} {} (Score: {:.1}, Confidence: {}%)",
            idx + 1,
            marker,
            style(&result.agent_name).bold(),
            result.raw_score,
            result.confidence
        ));
        lines.push(format!(
            "       Effectiveness {:.0}% | Speed {:.1}/10 | FP {:.1}% | {} min | ${:.0}/month",
            result.effectiveness * 100.0,
            result.speed,
            result.fp_rate * 100.0,
            result.expected_containment_minutes,
            result.monthly_cost
        ));

        if idx == 0 {
            let chart = AgentProfileChart::from_result(result);
            let axes: Vec<String> = chart
                .axes()
                .iter()
                .map(|(name, value)| format!("{} {:.0}", name, value))
                .collect();
            lines.push(format!("       Profile: {}", axes.join(" | ")));
            lines.push(format!(
                "       {}",
                style(rationale(result, &recommendation.threat)).italic()
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoring::RecommendationEngine;
    use shared::{AdvisorConfig, NullLogger};
    use std::sync::Arc;

    fn recommendation() -> Recommendation {
        let (catalog, taxonomy) = catalog::builtin::load().unwrap();
        RecommendationEngine::new(catalog, taxonomy, AdvisorConfig::default(), Arc::new(NullLogger))
            .recommend("ransomware")
            .unwrap()
    }

    #[test]
    fn test_render_lists_every_result() {
        console::set_colors_enabled(false);
        let rec = recommendation();
        let summary = RecommendationSummary::from_results(&rec.results, 8).unwrap();
        let text = render_recommendation(&rec, &summary);

        assert!(text.contains("Ransomware Attack [CRITICAL]"));
        assert!(text.contains("#1 ✓ CrowdStrike Falcon XDR (Score: 52.9, Confidence: 99%)"));
        assert!(text.contains("#5 "));
        assert!(text.contains("Profile: Effectiveness 95 | Speed 85 | Low FP Rate 98 | Cost Efficiency 15"));
    }

    #[test]
    fn test_json_output_flattens_recommendation() {
        let rec = recommendation();
        let output = RecommendationOutput {
            recommendation: &rec,
            summary: RecommendationSummary::from_results(&rec.results, 8).unwrap(),
        };
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["threat"]["key"], "ransomware");
        assert_eq!(value["results"].as_array().unwrap().len(), 5);
        assert_eq!(value["summary"]["manualBaselineMinutes"], value["summary"]["meanExpectedMinutes"].as_u64().unwrap() + 8);
    }
}
