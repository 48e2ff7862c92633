//! Initialize a species-stat project directory.

use anyhow::{Context, Result};
use colored::Colorize;
use species_stat_core::config::{Config, CONFIG_FILE};
use std::path::{Path, PathBuf};

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    println!("{} Initializing species-stat project...", "→".blue());
    let created = write_default_config(&base_path)?;

    let config_path = base_path.join(CONFIG_FILE);
    if created {
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    println!();
    println!("Next steps:");
    println!("  {} species-stat import <username> <contacts.json>", "1.".blue());
    println!("  {} species-stat answer <username> <contact> <choice>", "2.".blue());
    println!("  {} species-stat summary <username>", "3.".blue());

    Ok(())
}

/// Write `species-stat.toml` into `base_path` unless one exists. Returns
/// whether a file was written.
pub(crate) fn write_default_config(base_path: &Path) -> Result<bool> {
    std::fs::create_dir_all(base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    let config_path = base_path.join(CONFIG_FILE);
    if config_path.exists() {
        return Ok(false);
    }
    Config::default().save(&config_path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_config_once() {
        let dir = tempfile::tempdir().unwrap();
        assert!(write_default_config(dir.path()).unwrap());
        assert!(!write_default_config(dir.path()).unwrap());

        let config = Config::from_path(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("survey");
        assert!(write_default_config(&nested).unwrap());
        assert!(nested.join(CONFIG_FILE).exists());
    }
}
