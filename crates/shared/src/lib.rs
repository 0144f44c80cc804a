//! # Argus Shared
//!
//! Common types used across all Argus crates: agent profiles, the threat
//! taxonomy record, score results, errors and configuration.

pub mod agent;
pub mod config;
pub mod error;
pub mod score;
pub mod threat;

// Re-exports
pub use agent::*;
pub use config::*;
pub use error::*;
pub use score::*;
pub use threat::*;
