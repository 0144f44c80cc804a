//! argus playbook command

use crate::commands::recommend::recommend_with_progress;
use crate::context::AppContext;
use clap::Args;
use report::{Playbook, RecommendationSummary};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PlaybookCommand {
    /// Threat category key
    pub threat: String,

    /// Directory the playbook is written to
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

impl PlaybookCommand {
    pub fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let playbook = self.build(ctx)?;

        if ctx.json {
            println!("{}", playbook.to_json()?);
            return Ok(());
        }

        let path = playbook.save(&self.output)?;
        tracing::info!(path = %path.display(), "playbook written");
        println!("✓ Playbook written to {}", path.display());
        Ok(())
    }

    pub fn build(&self, ctx: &AppContext) -> anyhow::Result<Playbook> {
        let recommendation = recommend_with_progress(ctx, &self.threat, None)?;
        let summary = RecommendationSummary::from_results(
            &recommendation.results,
            ctx.engine.config().manual_overhead_minutes,
        )?;
        Ok(Playbook::from_recommendation(&recommendation).with_summary(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextOptions;

    #[test]
    fn test_run_writes_playbook_file() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::load(&ContextOptions::default()).unwrap();
        let cmd = PlaybookCommand {
            threat: "insider_threat".to_string(),
            output: dir.path().join("out"),
        };

        cmd.run(&ctx).unwrap();

        let written: Vec<_> = std::fs::read_dir(dir.path().join("out"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(written.len(), 1);
        assert!(written[0].starts_with("playbook_insider_threat_"));
        assert!(written[0].ends_with(".md"));
    }

    #[test]
    fn test_build_includes_summary() {
        let ctx = AppContext::load(&ContextOptions::default()).unwrap();
        let playbook = PlaybookCommand {
            threat: "apt".to_string(),
            output: PathBuf::from("."),
        }
        .build(&ctx)
        .unwrap();

        let summary = playbook.summary.as_ref().unwrap();
        assert_eq!(summary.manual_baseline_minutes, summary.mean_expected_minutes + 8);
    }
}
