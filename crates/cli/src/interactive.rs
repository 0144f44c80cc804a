//! Interactive mode - pick a threat from a menu and review recommendations

use crate::commands::random::pick_threat_key;
use crate::commands::recommend::{present, recommend_with_progress};
use crate::context::AppContext;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};
use report::{Playbook, RecommendationSummary};
use std::path::PathBuf;

/// What a menu selection resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Analyze(String),
    Random,
    Quit,
}

/// Interactive threat analysis session
pub struct InteractiveCli<'a> {
    ctx: &'a AppContext,
    keys: Vec<String>,
    playbook_dir: PathBuf,
}

impl<'a> InteractiveCli<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        Self {
            ctx,
            keys: ctx.engine.taxonomy().keys().map(str::to_string).collect(),
            playbook_dir: PathBuf::from("."),
        }
    }

    /// Menu entries: every threat, then the random pick, then quit
    pub fn menu_items(&self) -> Vec<String> {
        let mut items: Vec<String> = self.ctx.engine.taxonomy().iter().map(|t| t.label()).collect();
        items.push("Random attack".to_string());
        items.push("Quit".to_string());
        items
    }

    pub fn action_for(&self, index: usize) -> MenuAction {
        match index {
            i if i < self.keys.len() => MenuAction::Analyze(self.keys[i].clone()),
            i if i == self.keys.len() => MenuAction::Random,
            _ => MenuAction::Quit,
        }
    }

    /// Run the menu loop
    pub fn run(&self) -> anyhow::Result<()> {
        println!("Argus Interactive Mode");
        println!(
            "{} agents, {} threat categories loaded",
            self.ctx.engine.catalog().len(),
            self.keys.len()
        );
        println!();

        let theme = ColorfulTheme::default();
        let items = self.menu_items();

        loop {
            let selection = Select::with_theme(&theme)
                .with_prompt("Select threat type")
                .items(&items)
                .default(0)
                .interact_opt()?;

            let key = match selection.map(|i| self.action_for(i)) {
                Some(MenuAction::Analyze(key)) => key,
                Some(MenuAction::Random) => pick_threat_key(self.ctx, None)?,
                Some(MenuAction::Quit) | None => {
                    println!("Goodbye!");
                    return Ok(());
                }
            };

            if let Err(e) = self.analyze(&key, &theme) {
                println!("Error: {}", e);
            }
            println!();
        }
    }

    fn analyze(&self, key: &str, theme: &ColorfulTheme) -> anyhow::Result<()> {
        let recommendation = recommend_with_progress(self.ctx, key, None)?;
        present(self.ctx, &recommendation)?;
        println!();

        let export = Confirm::with_theme(theme)
            .with_prompt("Export incident response playbook?")
            .default(false)
            .interact()?;

        if export {
            let summary = RecommendationSummary::from_results(
                &recommendation.results,
                self.ctx.engine.config().manual_overhead_minutes,
            )?;
            let path = Playbook::from_recommendation(&recommendation)
                .with_summary(summary)
                .save(&self.playbook_dir)?;
            println!("✓ Playbook written to {}", path.display());
        }
        Ok(())
    }
}
