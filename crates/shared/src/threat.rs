//! Threat taxonomy types

use crate::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Incident severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled class of security incident
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatCategory {
    /// Unique identifier (e.g. "ransomware")
    pub key: String,

    /// Human-readable name
    pub display_name: String,

    pub severity: Severity,

    pub description: String,
}

impl ThreatCategory {
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        severity: Severity,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            severity,
            description: description.into(),
        }
    }

    /// Check the record-level invariants
    pub fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(AdvisorError::InvalidThreatCategory {
                key: self.key.clone(),
                reason: "key must not be empty".to_string(),
            });
        }
        if self.display_name.trim().is_empty() {
            return Err(AdvisorError::InvalidThreatCategory {
                key: self.key.clone(),
                reason: "display name must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Label used in menus: "Ransomware Attack (CRITICAL)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_name, self.severity)
    }
}
