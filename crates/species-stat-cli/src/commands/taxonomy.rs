//! Print the loaded taxonomy.

use anyhow::{Context, Result};
use colored::Colorize;
use species_stat_core::config::Config;
use species_stat_core::taxonomy::Taxonomy;

pub fn run(verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let taxonomy = config.load_taxonomy().context("Invalid taxonomy")?;
    print!("{}", render(&taxonomy, verbose));
    Ok(())
}

fn render(taxonomy: &Taxonomy, verbose: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({} choices, {} responses)\n",
        "Taxonomy".white().bold(),
        taxonomy.len(),
        taxonomy.total_frequency()
    ));

    for category in taxonomy.categories() {
        out.push_str(&format!(
            "\n{} {:>6.2}%\n",
            category.label.blue().bold(),
            category.percentage * 100.0
        ));
        for choice in &category.choices {
            out.push_str(&format!(
                "  {:<24} {:>6.2}%",
                choice.label,
                choice.percentage * 100.0
            ));
            if verbose {
                out.push_str(&format!("  {} ({})", choice.name.dimmed(), choice.frequency));
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use species_stat_core::builtin;

    #[test]
    fn lists_every_choice() {
        colored::control::set_override(false);
        let taxonomy = builtin::taxonomy().unwrap();
        let text = render(&taxonomy, true);

        for (_, choice) in taxonomy.iter() {
            assert!(text.contains(&choice.label), "missing {}", choice.label);
        }
        assert!(text.contains("redfox (1018)"));
    }
}
