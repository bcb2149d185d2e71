//! Options shared by every command.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use polycalc_content::{CatalogLoader, ConfigLoader, UnitCatalog};
use polycalc_core::{CombatConfig, Unit};

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Combat settings (TOML)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Extra unit kinds (RON)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

/// Resolved global options.
pub struct Context {
    pub json: bool,
    pub config: CombatConfig,
    pub catalog: UnitCatalog,
}

impl Context {
    pub fn load(args: &GlobalArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("loading combat settings from {}", path.display()))?,
            None => CombatConfig::default(),
        };

        let catalog = match &args.catalog {
            Some(path) => CatalogLoader::load(path)
                .with_context(|| format!("loading unit catalog from {}", path.display()))?,
            None => UnitCatalog::new(),
        };

        tracing::debug!(?config, "combat settings");

        Ok(Self {
            json: args.json,
            config,
            catalog,
        })
    }

    pub fn parse_unit(&self, description: &str) -> Result<Unit> {
        self.catalog
            .parse_unit(description)
            .with_context(|| format!("invalid unit '{}'", description.trim()))
    }

    pub fn parse_units(&self, descriptions: &str) -> Result<Vec<Unit>> {
        let units = self
            .catalog
            .parse_units(descriptions)
            .with_context(|| format!("invalid unit list '{}'", descriptions.trim()))?;
        if units.is_empty() {
            anyhow::bail!("unit list '{}' is empty", descriptions.trim());
        }
        Ok(units)
    }
}
