//! Error types for Argus

use thiserror::Error;

/// Error raised when an agent profile violates a catalog invariant
#[derive(Debug, Error)]
#[error("Invalid agent profile #{agent_id}: {reason}")]
pub struct InvalidAgentProfileError {
    pub agent_id: u32,
    pub reason: String,
}

impl InvalidAgentProfileError {
    pub fn new(agent_id: u32, reason: impl Into<String>) -> Self {
        Self {
            agent_id,
            reason: reason.into(),
        }
    }
}

/// Error raised when a threat key is not part of the taxonomy
#[derive(Debug, Error)]
#[error("Threat category '{key}' not found. Available categories: {}", available.join(", "))]
pub struct UnknownThreatCategoryError {
    pub key: String,
    pub available: Vec<String>,
}

/// General Argus error type
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error(transparent)]
    InvalidAgentProfile(#[from] InvalidAgentProfileError),

    #[error(transparent)]
    UnknownThreatCategory(#[from] UnknownThreatCategoryError),

    #[error("Invalid threat category '{key}': {reason}")]
    InvalidThreatCategory { key: String, reason: String },

    #[error("Agent catalog is empty")]
    EmptyCatalog,

    #[error("Threat taxonomy is empty")]
    EmptyTaxonomy,

    #[error("Invalid top-K value {0}: must be a positive integer")]
    InvalidTopK(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
