//! # Argus Scoring
//!
//! Recommendation scoring and ranking.
//!
//! ## Components
//!
//! - `score` - Composite suitability of one agent for one threat
//! - `rank` - Score a catalog, order it and keep the top K
//! - `RecommendationEngine` - Taxonomy-checked recommendations over a catalog
//! - `pick_threat` - Seeded threat selection for drills

mod engine;
mod picker;
mod ranking;
mod scorer;

pub use engine::{Recommendation, RecommendationEngine};
pub use picker::pick_threat;
pub use ranking::{rank, rank_with_seed};
pub use scorer::{containment_jitter, score, score_with_seed};
