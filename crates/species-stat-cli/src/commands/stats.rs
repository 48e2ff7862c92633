//! Show survey database statistics.

use anyhow::Result;
use colored::Colorize;

use super::Workspace;

pub fn run() -> Result<()> {
    let ws = Workspace::open()?;
    let (users, responses) = ws.store.stats()?;

    println!("{}", "Species Stat".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!("  Database:    {}", ws.config.database.path.display());
    println!("  Users:       {}", users.to_string().cyan());
    println!("  Responses:   {}", responses.to_string().cyan());
    println!(
        "  Taxonomy:    {} choices in {} categories",
        ws.taxonomy.len(),
        ws.taxonomy.categories().len()
    );
    Ok(())
}
