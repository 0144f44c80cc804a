//! # Argus Catalog
//!
//! Read-only reference data for the recommendation engine.
//!
//! ## Components
//!
//! - `ThreatTaxonomy` - Threat categories keyed by identifier
//! - `AgentCatalog` - Validated agent profiles
//! - `CatalogLoader` - Load catalog documents from YAML/JSON
//! - `builtin` - The catalog shipped with Argus

pub mod agent_catalog;
pub mod builtin;
pub mod loader;
pub mod taxonomy;

pub use agent_catalog::AgentCatalog;
pub use loader::{CatalogDocument, CatalogLoader};
pub use taxonomy::ThreatTaxonomy;
