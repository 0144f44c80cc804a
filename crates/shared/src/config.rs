//! Configuration types for Argus

use crate::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Number of recommendations returned when nothing else is configured
pub const DEFAULT_TOP_K: usize = 5;

/// Minutes added to the mean containment time to model a manual SOC decision
pub const DEFAULT_MANUAL_OVERHEAD_MINUTES: u32 = 8;

/// Upper bound for the manual decision overhead (one day)
pub const MAX_MANUAL_OVERHEAD_MINUTES: u32 = 24 * 60;

/// Advisor configuration (config.json)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvisorConfig {
    /// Number of agents returned per recommendation
    pub top_k: usize,

    /// Overhead used for the manual baseline comparison
    pub manual_overhead_minutes: u32,

    /// Seed mixed into the containment-time jitter
    pub jitter_seed: u64,

    /// Catalog document to load instead of the built-in catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            manual_overhead_minutes: DEFAULT_MANUAL_OVERHEAD_MINUTES,
            jitter_seed: 0,
            catalog_path: None,
        }
    }
}

impl AdvisorConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content)?;
        config.validate()?;

        // Relative catalog paths are resolved against the config file
        if let (Some(catalog), Some(parent)) = (&config.catalog_path, path.parent()) {
            if catalog.is_relative() {
                config.catalog_path = Some(parent.join(catalog));
            }
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(AdvisorError::Config("topK must be at least 1".to_string()));
        }
        if self.manual_overhead_minutes > MAX_MANUAL_OVERHEAD_MINUTES {
            return Err(AdvisorError::Config(format!(
                "manualOverheadMinutes must be at most {}, got {}",
                MAX_MANUAL_OVERHEAD_MINUTES, self.manual_overhead_minutes
            )));
        }
        Ok(())
    }
}

/// Logger interface for dependency injection
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn info(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn warn(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn error(&self, message: &str, meta: Option<&HashMap<String, String>>);
}

/// No-op logger for testing
#[derive(Debug, Clone, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn info(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn warn(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn error(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
}
