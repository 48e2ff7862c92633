//! CLI command implementations.

pub mod answer;
pub mod import;
pub mod init;
pub mod stats;
pub mod summary;
pub mod taxonomy;

use anyhow::{Context, Result};
use species_stat_core::config::Config;
use species_stat_core::taxonomy::Taxonomy;
use species_stat_store::SurveyStore;
use std::path::Path;

/// Config, taxonomy and store for commands that touch survey data.
pub(crate) struct Workspace {
    pub config: Config,
    pub taxonomy: Taxonomy,
    pub store: SurveyStore,
}

impl Workspace {
    pub fn open() -> Result<Self> {
        let config = Config::load()?;
        let taxonomy = config.load_taxonomy().context("Invalid taxonomy")?;
        let store = open_store(&config.database.path)?;
        Ok(Self {
            config,
            taxonomy,
            store,
        })
    }
}

pub(crate) fn open_store(path: &Path) -> Result<SurveyStore> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    SurveyStore::open(path).with_context(|| format!("Failed to open {}", path.display()))
}
