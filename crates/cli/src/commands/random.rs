//! argus random command - drill against a randomly picked threat

use crate::commands::recommend::{present, recommend_with_progress};
use crate::context::AppContext;
use clap::Args;

#[derive(Debug, Args)]
pub struct RandomCommand {
    /// Seed for the threat pick; the same seed always picks the same threat
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl RandomCommand {
    pub fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let key = self.pick(ctx)?;
        let recommendation = recommend_with_progress(ctx, &key, None)?;
        present(ctx, &recommendation)
    }

    /// Resolve the threat key to drill against
    pub fn pick(&self, ctx: &AppContext) -> anyhow::Result<String> {
        pick_threat_key(ctx, self.seed)
    }
}

/// Pick a threat key, drawing a fresh seed when none is given.
///
/// The seed is logged so the pick can be replayed with `--seed`.
pub fn pick_threat_key(ctx: &AppContext, seed: Option<u64>) -> anyhow::Result<String> {
    let seed = seed.unwrap_or_else(rand::random);
    let threat = scoring::pick_threat(ctx.engine.taxonomy(), seed)?;

    tracing::info!(seed, threat = %threat.key, "picked random threat");
    Ok(threat.key.clone())
}
