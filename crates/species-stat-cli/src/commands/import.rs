//! Import a subject's contact list from JSON.

use anyhow::{Context, Result};
use colored::Colorize;
use species_stat_store::Contact;
use std::path::Path;

use super::Workspace;

pub fn run(username: &str, file: &str) -> Result<()> {
    let contacts = read_contacts(Path::new(file))?;
    let ws = Workspace::open()?;

    ws.store.get_or_create_user(username, "")?;
    let imported = ws.store.import_contacts(username, &contacts)?;
    let counts = ws.store.response_counts(username)?;

    println!(
        "{} Imported {} contacts for {} ({} pending)",
        "✓".green(),
        imported.to_string().cyan(),
        username.bold(),
        counts.pending
    );
    if imported < contacts.len() {
        println!(
            "  {} {} contacts skipped (already imported or over the limit)",
            "•".yellow(),
            contacts.len() - imported
        );
    }
    Ok(())
}

pub(crate) fn read_contacts(path: &Path) -> Result<Vec<Contact>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Expected a JSON array of contacts in {}", path.display()))
}
