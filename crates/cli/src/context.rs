//! Engine construction from config files and flags

use crate::logging::TracingLogger;
use anyhow::Context as _;
use catalog::CatalogLoader;
use scoring::RecommendationEngine;
use shared::AdvisorConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Everything a command needs to run
pub struct AppContext {
    pub engine: RecommendationEngine,
    pub json: bool,
}

/// Options shared by all commands
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    pub config: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub json: bool,
}

impl AppContext {
    /// Build the engine.
    ///
    /// The catalog is taken from `--catalog`, then the config's
    /// `catalogPath`, then the built-in catalog.
    pub fn load(options: &ContextOptions) -> anyhow::Result<Self> {
        let config = match &options.config {
            Some(path) => AdvisorConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => AdvisorConfig::default(),
        };

        let catalog_path = options.catalog.clone().or_else(|| config.catalog_path.clone());
        let (catalog, taxonomy) = match catalog_path {
            Some(path) => load_catalog(&path)?,
            None => {
                tracing::debug!("using built-in catalog");
                catalog::builtin::load()?
            }
        };

        tracing::debug!(
            agents = catalog.len(),
            threats = taxonomy.len(),
            top_k = config.top_k,
            "engine ready"
        );

        Ok(Self {
            engine: RecommendationEngine::new(catalog, taxonomy, config, Arc::new(TracingLogger)),
            json: options.json,
        })
    }
}

fn load_catalog(path: &Path) -> anyhow::Result<(catalog::AgentCatalog, catalog::ThreatTaxonomy)> {
    tracing::info!(path = %path.display(), "loading catalog");
    CatalogLoader::new()
        .load_file(path)
        .with_context(|| format!("failed to load catalog {}", path.display()))
}
