//! argus threats command

use crate::context::AppContext;
use crate::output::severity_badge;
use clap::{Args, ValueEnum};
use shared::{Severity, ThreatCategory};

/// Severity filter accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SeverityArg {
    Low,
    Medium,
    High,
    Critical,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Low => Severity::Low,
            SeverityArg::Medium => Severity::Medium,
            SeverityArg::High => Severity::High,
            SeverityArg::Critical => Severity::Critical,
        }
    }
}

#[derive(Debug, Args)]
pub struct ThreatsCommand {
    /// Only show categories at or above this severity
    #[arg(long, value_enum)]
    pub min_severity: Option<SeverityArg>,
}

impl ThreatsCommand {
    pub fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let threats = self.select(ctx);

        if ctx.json {
            println!("{}", serde_json::to_string_pretty(&threats)?);
            return Ok(());
        }

        println!("Threat categories ({}):", threats.len());
        for threat in threats {
            let specialists = ctx.engine.catalog().covering(&threat.key).len();
            println!(
                "  {:<28} {:<9} {} ({} specialist agents)",
                threat.key,
                severity_badge(threat.severity),
                threat.display_name,
                specialists
            );
        }
        Ok(())
    }

    pub fn select<'a>(&self, ctx: &'a AppContext) -> Vec<&'a ThreatCategory> {
        let min = self.min_severity.map(Severity::from).unwrap_or(Severity::Low);
        ctx.engine.taxonomy().at_least(min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextOptions;

    #[test]
    fn test_filter_by_severity() {
        let ctx = AppContext::load(&ContextOptions::default()).unwrap();

        let all = ThreatsCommand { min_severity: None }.select(&ctx);
        assert_eq!(all.len(), ctx.engine.taxonomy().len());

        let critical = ThreatsCommand {
            min_severity: Some(SeverityArg::Critical),
        }
        .select(&ctx);
        assert!(!critical.is_empty());
        assert!(critical.iter().all(|t| t.severity == Severity::Critical));
        assert!(critical.len() < all.len());
    }
}
