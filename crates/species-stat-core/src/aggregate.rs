//! Per-subject response aggregation.
//!
//! Turns the choice names a subject assigned to their contacts into observed
//! percentages over every countable choice of the taxonomy.

use crate::taxonomy::Taxonomy;
use std::collections::HashMap;

/// Observed share of each countable choice for one subject.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observation {
    percentages: HashMap<String, f64>,
    counted: usize,
}

impl Observation {
    /// Count `answers` against the taxonomy.
    ///
    /// Names outside the taxonomy, and the sentinel choice, are ignored.
    /// With nothing counted every percentage is 0.0.
    pub fn from_answers<I, S>(taxonomy: &Taxonomy, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, usize> = taxonomy
            .countable_choices()
            .map(|name| (name.to_string(), 0))
            .collect();

        let mut counted = 0usize;
        for answer in answers {
            if let Some(count) = counts.get_mut(answer.as_ref()) {
                *count += 1;
                counted += 1;
            }
        }

        let divisor = counted.max(1) as f64;
        let percentages = counts
            .into_iter()
            .map(|(name, count)| (name, count as f64 / divisor))
            .collect();

        Self {
            percentages,
            counted,
        }
    }

    /// Build from already-normalized shares.
    ///
    /// No raw answers exist here, so `counted()` reports how many choices
    /// have a positive share. It is zero exactly when every share is zero.
    pub fn from_percentages<I, S>(percentages: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let percentages: HashMap<String, f64> = percentages
            .into_iter()
            .map(|(name, pct)| (name.into(), pct))
            .collect();
        let counted = percentages.values().filter(|pct| **pct > 0.0).count();
        Self {
            percentages,
            counted,
        }
    }

    /// Observed percentage, 0.0 for anything not counted.
    pub fn percent(&self, choice_name: &str) -> f64 {
        self.percentages.get(choice_name).copied().unwrap_or(0.0)
    }

    /// Number of answers that matched a countable choice.
    ///
    /// For [`Observation::from_percentages`] this is the number of choices
    /// with a positive share instead. Either way zero means nothing was
    /// observed, which is what [`Observation::is_empty`] relies on.
    pub fn counted(&self) -> usize {
        self.counted
    }

    pub fn is_empty(&self) -> bool {
        self.counted == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.percentages.iter().map(|(name, pct)| (name.as_str(), *pct))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    #[test]
    fn counts_become_percentages() {
        let taxonomy = builtin::taxonomy().unwrap();
        let observation =
            Observation::from_answers(&taxonomy, ["wolf", "wolf", "dragon", "redfox"]);
        assert_eq!(observation.counted(), 4);
        assert!((observation.percent("wolf") - 0.5).abs() < 1e-10);
        assert!((observation.percent("dragon") - 0.25).abs() < 1e-10);
        assert_eq!(observation.percent("tiger"), 0.0);
    }

    #[test]
    fn every_countable_choice_is_present() {
        let taxonomy = builtin::taxonomy().unwrap();
        let observation = Observation::from_answers(&taxonomy, ["wolf"]);
        assert_eq!(observation.iter().count(), taxonomy.len() - 1);
    }

    #[test]
    fn unknown_and_sentinel_answers_are_ignored() {
        let taxonomy = builtin::taxonomy().unwrap();
        let observation =
            Observation::from_answers(&taxonomy, ["unicorn", "nothing", "husky"]);
        assert_eq!(observation.counted(), 1);
        assert!((observation.percent("husky") - 1.0).abs() < 1e-10);
        assert_eq!(observation.percent("nothing"), 0.0);
        assert_eq!(observation.percent("unicorn"), 0.0);
    }

    #[test]
    fn shares_count_positive_choices() {
        let observation =
            Observation::from_percentages([("wolf", 0.75), ("fox", 0.25), ("cat", 0.0)]);
        assert_eq!(observation.counted(), 2);
        assert!(!observation.is_empty());
        assert!((observation.percent("wolf") - 0.75).abs() < 1e-10);

        let zeros = Observation::from_percentages([("wolf", 0.0), ("fox", 0.0)]);
        assert_eq!(zeros.counted(), 0);
        assert!(zeros.is_empty());
    }

    #[test]
    fn no_answers_yields_all_zero() {
        let taxonomy = builtin::taxonomy().unwrap();
        let observation = Observation::from_answers(&taxonomy, Vec::<String>::new());
        assert!(observation.is_empty());
        assert!(observation.iter().all(|(_, pct)| pct == 0.0));
    }
}
