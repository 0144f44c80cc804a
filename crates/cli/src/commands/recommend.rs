//! argus recommend command

use crate::context::AppContext;
use crate::output::{render_recommendation, RecommendationOutput};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use report::RecommendationSummary;
use scoring::Recommendation;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct RecommendCommand {
    /// Threat category key (see `argus threats`)
    pub threat: String,

    /// Number of agents to return (defaults to the configured topK)
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,
}

impl RecommendCommand {
    pub fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let recommendation = recommend_with_progress(ctx, &self.threat, self.top_k)?;
        present(ctx, &recommendation)
    }
}

/// Rank agents, showing a spinner on interactive terminals
pub fn recommend_with_progress(
    ctx: &AppContext,
    threat: &str,
    top_k: Option<usize>,
) -> anyhow::Result<Recommendation> {
    let spinner = if ctx.json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!(
        "Ranking {} agents for '{}'...",
        ctx.engine.catalog().len(),
        threat
    ));

    let top_k = top_k.unwrap_or(ctx.engine.config().top_k);
    let result = ctx.engine.recommend_top(threat, top_k);
    spinner.finish_and_clear();

    Ok(result?)
}

/// Print a recommendation as JSON or as a terminal report
pub fn present(ctx: &AppContext, recommendation: &Recommendation) -> anyhow::Result<()> {
    let summary = RecommendationSummary::from_results(
        &recommendation.results,
        ctx.engine.config().manual_overhead_minutes,
    )?;

    if ctx.json {
        let output = RecommendationOutput {
            recommendation,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", render_recommendation(recommendation, &summary));
    }
    Ok(())
}
