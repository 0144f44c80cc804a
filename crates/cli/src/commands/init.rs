//! argus init command

use anyhow::bail;
use catalog::{CatalogDocument, CatalogLoader};
use clap::Args;
use shared::AdvisorConfig;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";
const CATALOG_FILE: &str = "catalog.yaml";

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to initialize
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        println!("Initializing Argus workspace in {:?}", self.directory);

        let config_path = self.directory.join(CONFIG_FILE);
        let catalog_path = self.directory.join(CATALOG_FILE);
        self.ensure_writable(&config_path)?;
        self.ensure_writable(&catalog_path)?;

        std::fs::create_dir_all(&self.directory)?;

        let config = AdvisorConfig {
            catalog_path: Some(PathBuf::from(CATALOG_FILE)),
            ..AdvisorConfig::default()
        };
        std::fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

        // Editable copy of the built-in catalog
        CatalogLoader::new().save(&CatalogDocument::builtin(), &catalog_path)?;

        println!("✓ Argus workspace initialized");
        println!("  Run: argus --config {} recommend ransomware", config_path.display());
        Ok(())
    }

    fn ensure_writable(&self, path: &Path) -> anyhow::Result<()> {
        if path.exists() && !self.force {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }
        Ok(())
    }
}
