//! # Argus Report
//!
//! Consumers of ranked recommendations: summary metrics, per-agent profile
//! values, rationale text and the incident-response playbook export.

mod playbook;
mod summary;

pub use playbook::{Playbook, PLAYBOOK_MAX_ENTRIES};
pub use summary::{rationale, AgentProfileChart, RecommendationSummary};
