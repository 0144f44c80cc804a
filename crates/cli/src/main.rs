//! Argus CLI - Security agent recommendations from the command line
//!
//! Usage:
//!   argus                          - Start interactive mode
//!   argus recommend <threat>       - Rank agents for a threat
//!   argus random [--seed N]        - Rank agents for a randomly picked threat
//!   argus threats                  - List threat categories
//!   argus agents [--covering KEY]  - List catalog agents
//!   argus playbook <threat>        - Export an incident response playbook
//!   argus init [dir]               - Write a config and editable catalog

use clap::{Parser, Subcommand};
use cli::commands::{
    AgentsCommand, InitCommand, PlaybookCommand, RandomCommand, RecommendCommand, ThreatsCommand,
};
use cli::context::{AppContext, ContextOptions};
use cli::interactive::InteractiveCli;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "argus")]
#[command(about = "Argus - Security agent recommendation engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog document (YAML or JSON), overrides the config
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank agents for a threat category
    Recommend(RecommendCommand),
    /// Rank agents for a randomly picked threat category
    Random(RandomCommand),
    /// List threat categories
    Threats(ThreatsCommand),
    /// List catalog agents
    Agents(AgentsCommand),
    /// Export an incident response playbook
    Playbook(PlaybookCommand),
    /// Initialize a config and editable catalog
    Init(InitCommand),
}

fn main() -> anyhow::Result<()> {
    cli::logging::init();

    let cli = Cli::parse();

    if let Some(Commands::Init(cmd)) = &cli.command {
        return cmd.run();
    }

    let ctx = AppContext::load(&ContextOptions {
        config: cli.config,
        catalog: cli.catalog,
        json: cli.json,
    })?;

    match cli.command {
        Some(Commands::Recommend(cmd)) => cmd.run(&ctx),
        Some(Commands::Random(cmd)) => cmd.run(&ctx),
        Some(Commands::Threats(cmd)) => cmd.run(&ctx),
        Some(Commands::Agents(cmd)) => cmd.run(&ctx),
        Some(Commands::Playbook(cmd)) => cmd.run(&ctx),
        Some(Commands::Init(_)) => Ok(()),
        None => {
            // No subcommand - start interactive mode
            let interactive = InteractiveCli::new(&ctx);
            interactive.run()
        }
    }
}
