//! CatalogLoader - Load catalog documents from YAML/JSON files

use crate::{builtin, AgentCatalog, ThreatTaxonomy};
use serde::{Deserialize, Serialize};
use shared::{AdvisorError, AgentProfile, Result, ThreatCategory};
use std::path::Path;

/// On-disk catalog format: the taxonomy and the agents that reference it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    #[serde(default)]
    pub version: Option<String>,

    pub threats: Vec<ThreatCategory>,

    pub agents: Vec<AgentProfile>,
}

impl CatalogDocument {
    /// Document holding the built-in catalog
    pub fn builtin() -> Self {
        Self {
            version: Some(builtin::BUILTIN_CATALOG_VERSION.to_string()),
            threats: builtin::threat_categories(),
            agents: builtin::agent_profiles(),
        }
    }
}

/// Supported document encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(CatalogFormat::Yaml),
            Some("json") => Ok(CatalogFormat::Json),
            _ => Err(AdvisorError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Catalog loader
#[derive(Debug, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load and validate a catalog document from disk
    pub fn load_file(&self, path: &Path) -> Result<(AgentCatalog, ThreatTaxonomy)> {
        let format = CatalogFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        self.load_str(&content, format)
    }

    /// Parse and validate a catalog document
    pub fn load_str(&self, content: &str, format: CatalogFormat) -> Result<(AgentCatalog, ThreatTaxonomy)> {
        let document: CatalogDocument = match format {
            CatalogFormat::Yaml => serde_yaml::from_str(content)?,
            CatalogFormat::Json => serde_json::from_str(content)?,
        };
        self.validate(document)
    }

    /// Validate a parsed document. The taxonomy is built first so agent
    /// coverage can be checked against it.
    pub fn validate(&self, document: CatalogDocument) -> Result<(AgentCatalog, ThreatTaxonomy)> {
        let taxonomy = ThreatTaxonomy::new(document.threats)?;
        let catalog = AgentCatalog::new(document.agents, &taxonomy)?;
        Ok((catalog, taxonomy))
    }

    /// Write a document to disk in the format implied by the extension
    pub fn save(&self, document: &CatalogDocument, path: &Path) -> Result<()> {
        let content = match CatalogFormat::from_path(path)? {
            CatalogFormat::Yaml => serde_yaml::to_string(document)?,
            CatalogFormat::Json => serde_json::to_string_pretty(document)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
