//! Seeded threat selection for drills and demos

use catalog::ThreatTaxonomy;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use shared::{AdvisorError, Result, ThreatCategory};

/// Pick a threat category uniformly at random.
///
/// Keys are drawn in sorted order from a generator seeded with `seed`, so a
/// seed always selects the same category for the same taxonomy.
pub fn pick_threat(taxonomy: &ThreatTaxonomy, seed: u64) -> Result<&ThreatCategory> {
    let mut rng = StdRng::seed_from_u64(seed);

    taxonomy
        .iter()
        .choose(&mut rng)
        .ok_or(AdvisorError::EmptyTaxonomy)
}
