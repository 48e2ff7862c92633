//! Show a subject's deviations from the baseline.

use anyhow::{bail, Result};
use colored::Colorize;
use species_stat_core::summary::Summary;

use super::Workspace;

pub fn run(username: &str, notes: Option<usize>) -> Result<()> {
    let ws = Workspace::open()?;
    let Some(user) = ws.store.user(username)? else {
        bail!("No such user: {}", username);
    };

    let max_notes = notes.unwrap_or(ws.config.summary.max_notes);
    let summary = ws.store.result_summary(&ws.taxonomy, &user, max_notes)?;
    let counts = ws.store.response_counts(username)?;

    println!("{}", format!("Results for {}", user.username).white().bold());
    println!("{}", "═".repeat(52).dimmed());
    if let Some(species) = &user.species {
        let label = match &user.species_custom {
            Some(custom) => custom.clone(),
            None => ws
                .taxonomy
                .choice(species)
                .map(|c| c.label.clone())
                .unwrap_or_else(|| species.clone()),
        };
        println!("  Species:   {}", label.cyan());
    }
    println!(
        "  Answered:  {} of {}",
        counts.answered.to_string().cyan(),
        counts.total
    );
    println!();

    print!("{}", render_table(&summary));
    println!();
    println!("{}", summary.text);
    Ok(())
}

fn render_table(summary: &Summary) -> String {
    let mut out = format!(
        "{:<24} {:>9} {:>9} {:>8}\n",
        "Choice", "Observed", "Baseline", "Ratio"
    );
    for deviation in &summary.deviations {
        out.push_str(&format!(
            "{:<24} {:>8.2}% {:>8.2}% {:>7.0}%\n",
            deviation.label,
            deviation.observed * 100.0,
            deviation.baseline * 100.0,
            deviation.ratio * 100.0
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use species_stat_core::builtin;
    use species_stat_core::summary::summarize;

    #[test]
    fn table_has_row_per_deviation() {
        let taxonomy = builtin::taxonomy().unwrap();
        let summary = summarize(&taxonomy, "riismo", &["wolf", "wolf", "dragon"]);
        let table = render_table(&summary);

        assert_eq!(table.lines().count(), summary.deviations.len() + 1);
        assert!(table.lines().nth(1).unwrap().starts_with("Dragon"));
    }

    #[test]
    fn empty_summary_is_header_only() {
        let taxonomy = builtin::taxonomy().unwrap();
        let none: [&str; 0] = [];
        let summary = summarize(&taxonomy, "riismo", &none);
        assert_eq!(render_table(&summary).lines().count(), 1);
    }
}
