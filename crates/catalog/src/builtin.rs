//! The catalog shipped with Argus: 25 agents and 17 threat categories

use crate::{AgentCatalog, ThreatTaxonomy};
use shared::{AgentProfile, Result, Severity, ThreatCategory};

/// Version stamped into exported catalog documents
pub const BUILTIN_CATALOG_VERSION: &str = "2025.1";

/// (key, display name, severity, description)
const THREATS: &[(&str, &str, Severity, &str)] = &[
    ("ransomware", "Ransomware Attack", Severity::Critical, "File encryption with ransom demand"),
    ("phishing", "Phishing Campaign", Severity::High, "Credential harvesting via email"),
    ("apt", "Advanced Persistent Threat", Severity::Critical, "Long-term targeted intrusion"),
    ("ddos", "DDoS Attack", Severity::High, "Distributed denial of service"),
    ("insider_threat", "Insider Threat", Severity::High, "Malicious internal actor"),
    ("lateral_movement", "Lateral Movement", Severity::Critical, "Network propagation detected"),
    ("data_exfiltration", "Data Exfiltration", Severity::Critical, "Unauthorized data transfer"),
    ("malware", "Malware Infection", Severity::High, "Malicious software detected"),
    ("zero_day", "Zero-Day Exploit", Severity::Critical, "Unknown vulnerability exploitation"),
    ("credential_theft", "Credential Theft", Severity::High, "Account credentials compromised"),
    ("business_email_compromise", "Business Email Compromise", Severity::Critical, "Executive email account takeover"),
    ("privilege_escalation", "Privilege Escalation", Severity::High, "Unauthorized privilege elevation"),
    ("c2_communication", "C2 Communication", Severity::Critical, "Command and control traffic"),
    ("web_attack", "Web Application Attack", Severity::Medium, "SQL injection or XSS detected"),
    ("bot_attack", "Bot Attack", Severity::Medium, "Automated malicious traffic"),
    ("account_takeover", "Account Takeover", Severity::High, "Hijacked user account activity"),
    ("compliance_violation", "Compliance Violation", Severity::Medium, "Regulatory policy breach detected"),
];

/// (id, name, effectiveness, speed, fp rate, monthly cost, coverage)
type AgentRow = (u32, &'static str, f64, f64, f64, f64, &'static [&'static str]);

const AGENTS: &[AgentRow] = &[
    (1, "CrowdStrike Falcon XDR", 0.95, 8.5, 0.02, 850.0, &["ransomware", "malware", "apt", "lateral_movement"]),
    (2, "Darktrace Enterprise Immune", 0.92, 9.2, 0.05, 920.0, &["insider_threat", "lateral_movement", "data_exfiltration", "apt"]),
    (3, "Microsoft Defender AI", 0.89, 7.8, 0.03, 680.0, &["phishing", "malware", "ransomware", "credential_theft"]),
    (4, "Vectra AI Cognito", 0.94, 9.0, 0.04, 890.0, &["lateral_movement", "c2_communication", "data_exfiltration"]),
    (5, "SentinelOne Singularity", 0.93, 8.8, 0.03, 780.0, &["ransomware", "zero_day", "malware", "apt"]),
    (6, "Proofpoint Email Defense", 0.91, 7.5, 0.02, 450.0, &["phishing", "business_email_compromise", "malware"]),
    (7, "Palo Alto Cortex XDR", 0.90, 8.3, 0.04, 820.0, &["ransomware", "malware", "apt", "zero_day"]),
    (8, "Splunk UEBA", 0.87, 6.5, 0.06, 720.0, &["insider_threat", "credential_theft", "privilege_escalation"]),
    (9, "IBM QRadar SIEM", 0.85, 6.8, 0.05, 950.0, &["apt", "compliance_violation", "data_exfiltration"]),
    (10, "Cloudflare Magic Firewall", 0.88, 9.5, 0.03, 580.0, &["ddos", "web_attack", "bot_attack"]),
    (11, "Abnormal Security", 0.93, 8.0, 0.02, 520.0, &["business_email_compromise", "phishing", "account_takeover"]),
    (12, "Cybereason Defense Platform", 0.91, 8.6, 0.04, 790.0, &["ransomware", "malware", "apt"]),
    (13, "Cisco SecureX", 0.86, 7.2, 0.05, 840.0, &["malware", "web_attack", "c2_communication"]),
    (14, "Fortinet FortiAI", 0.89, 8.1, 0.04, 710.0, &["ransomware", "zero_day", "malware"]),
    (15, "Trellix XDR", 0.88, 7.9, 0.04, 760.0, &["apt", "malware", "data_exfiltration"]),
    (16, "Exabeam UEBA", 0.90, 7.0, 0.05, 690.0, &["insider_threat", "credential_theft", "privilege_escalation"]),
    (17, "Zscaler Zero Trust", 0.87, 8.7, 0.03, 620.0, &["data_exfiltration", "lateral_movement", "zero_day"]),
    (18, "TrendMicro Vision One", 0.89, 8.2, 0.04, 730.0, &["ransomware", "malware", "phishing"]),
    (19, "Rapid7 InsightIDR", 0.86, 7.4, 0.05, 650.0, &["insider_threat", "lateral_movement", "credential_theft"]),
    (20, "Sophos Intercept X", 0.88, 8.0, 0.03, 590.0, &["ransomware", "malware", "zero_day"]),
    (21, "Carbon Black Cloud", 0.91, 8.4, 0.03, 770.0, &["apt", "ransomware", "malware"]),
    (22, "Securonix UEBA", 0.89, 6.9, 0.06, 710.0, &["insider_threat", "privilege_escalation", "data_exfiltration"]),
    (23, "Symantec Endpoint Security", 0.87, 7.7, 0.04, 640.0, &["malware", "ransomware", "phishing"]),
    (24, "Chronicle Security", 0.90, 7.6, 0.04, 880.0, &["apt", "c2_communication", "data_exfiltration"]),
    (25, "Arctic Wolf MDR", 0.92, 8.3, 0.03, 810.0, &["ransomware", "apt", "lateral_movement"]),
];

/// Built-in threat categories
pub fn threat_categories() -> Vec<ThreatCategory> {
    THREATS
        .iter()
        .map(|(key, name, severity, description)| ThreatCategory::new(*key, *name, *severity, *description))
        .collect()
}

/// Built-in agent profiles
pub fn agent_profiles() -> Vec<AgentProfile> {
    AGENTS
        .iter()
        .map(|(id, name, effectiveness, speed, fp_rate, cost, coverage)| {
            AgentProfile::new(*id, *name, *effectiveness, *speed, *fp_rate, *cost)
                .with_coverage(coverage.iter().copied())
        })
        .collect()
}

pub fn taxonomy() -> Result<ThreatTaxonomy> {
    ThreatTaxonomy::new(threat_categories())
}

/// Built-in taxonomy and catalog, validated together
pub fn load() -> Result<(AgentCatalog, ThreatTaxonomy)> {
    let taxonomy = taxonomy()?;
    let catalog = AgentCatalog::new(agent_profiles(), &taxonomy)?;
    Ok((catalog, taxonomy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let (catalog, taxonomy) = load().unwrap();
        assert_eq!(catalog.len(), 25);
        assert_eq!(taxonomy.len(), 17);
    }

    #[test]
    fn test_every_threat_has_a_specialist() {
        let (catalog, taxonomy) = load().unwrap();

        for threat in taxonomy.iter() {
            assert!(
                !catalog.covering(&threat.key).is_empty(),
                "no agent covers '{}'",
                threat.key
            );
        }
    }

    #[test]
    fn test_builtin_ids_are_sequential() {
        let ids: Vec<u32> = agent_profiles().iter().map(|a| a.id).collect();
        assert_eq!(ids, (1..=25).collect::<Vec<_>>());
    }
}
