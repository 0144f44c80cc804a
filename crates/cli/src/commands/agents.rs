//! argus agents command

use crate::context::AppContext;
use clap::Args;
use shared::AgentProfile;

#[derive(Debug, Args)]
pub struct AgentsCommand {
    /// Only show agents declaring coverage for this threat key
    #[arg(long)]
    pub covering: Option<String>,
}

impl AgentsCommand {
    pub fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let agents = self.select(ctx)?;

        if ctx.json {
            println!("{}", serde_json::to_string_pretty(&agents)?);
            return Ok(());
        }

        println!("Agents ({}):", agents.len());
        for agent in agents {
            let coverage: Vec<&str> = agent.coverage.iter().map(String::as_str).collect();
            println!(
                "  {:>3}  {:<30} eff {:>3.0}%  speed {:>4.1}  fp {:>4.1}%  ${:<5.0} {}",
                agent.id,
                agent.name,
                agent.effectiveness * 100.0,
                agent.speed,
                agent.fp_rate * 100.0,
                agent.monthly_cost,
                coverage.join(",")
            );
        }
        Ok(())
    }

    pub fn select<'a>(&self, ctx: &'a AppContext) -> anyhow::Result<Vec<&'a AgentProfile>> {
        let catalog = ctx.engine.catalog();
        match &self.covering {
            Some(key) => {
                ctx.engine.threat(key)?;
                Ok(catalog.covering(key))
            }
            None => Ok(catalog.agents().iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextOptions;

    #[test]
    fn test_select_covering() {
        let ctx = AppContext::load(&ContextOptions::default()).unwrap();

        let ddos = AgentsCommand {
            covering: Some("ddos".to_string()),
        }
        .select(&ctx)
        .unwrap();
        let names: Vec<&str> = ddos.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Cloudflare Magic Firewall"]);

        let all = AgentsCommand { covering: None }.select(&ctx).unwrap();
        assert_eq!(all.len(), 25);
    }

    #[test]
    fn test_unknown_covering_key_rejected() {
        let ctx = AppContext::load(&ContextOptions::default()).unwrap();
        let result = AgentsCommand {
            covering: Some("volcano".to_string()),
        }
        .select(&ctx);
        assert!(result.is_err());
    }
}
