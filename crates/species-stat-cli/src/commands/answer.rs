//! Record a single classification.

use anyhow::{bail, Result};
use colored::Colorize;
use species_stat_store::Answer;

use super::Workspace;

pub fn run(username: &str, contact: &str, choice: &str) -> Result<()> {
    let ws = Workspace::open()?;
    if !ws.taxonomy.contains(choice) {
        bail!(
            "Unknown choice '{}'. Run {} to list choices.",
            choice,
            "species-stat taxonomy --verbose".cyan()
        );
    }

    ws.store
        .record_answers(&ws.taxonomy, username, &[Answer::new(contact, choice)])?;
    let counts = ws.store.response_counts(username)?;

    let (_, category) = ws.taxonomy.category_of(choice).pair();
    println!(
        "{} {} → {} ({})",
        "✓".green(),
        contact.bold(),
        choice.cyan(),
        category
    );
    println!("  {} answered, {} pending", counts.answered, counts.pending);
    Ok(())
}
