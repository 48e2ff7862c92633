//! Deviation ranking and text summaries.
//!
//! Compares a subject's observed percentages against the taxonomy baseline.
//! Each choice with a positive baseline yields one [`Deviation`]; rows are
//! ranked by `observed / baseline`, highest first, and the top few are
//! rendered as a sentence.

use crate::aggregate::Observation;
use crate::taxonomy::Taxonomy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Number of deviations mentioned in a text summary.
pub const DEFAULT_MAX_NOTES: usize = 3;

/// One ranked row of a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deviation {
    pub label: String,
    /// `observed / baseline`; 1.0 means exactly the normal amount.
    pub ratio: f64,
    pub observed: f64,
    pub baseline: f64,
}

impl Deviation {
    pub fn new(label: impl Into<String>, ratio: f64, observed: f64, baseline: f64) -> Self {
        Self {
            label: label.into(),
            ratio,
            observed,
            baseline,
        }
    }

    /// "120% the normal amount of wolf"
    pub fn note(&self) -> String {
        format!(
            "{:.0}% the normal amount of {}",
            self.ratio * 100.0,
            self.label.to_lowercase()
        )
    }
}

/// Ranked deviations plus their rendered sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub deviations: Vec<Deviation>,
    pub text: String,
}

/// Rank every positive-baseline choice by observed/baseline ratio.
///
/// The sort is stable: equal ratios keep taxonomy order.
pub fn rank_deviations(taxonomy: &Taxonomy, observation: &Observation) -> Vec<Deviation> {
    let mut deviations: Vec<Deviation> = taxonomy
        .iter()
        .filter(|(_, choice)| choice.percentage > 0.0)
        .map(|(_, choice)| {
            let observed = observation.percent(&choice.name);
            Deviation::new(
                choice.label.clone(),
                observed / choice.percentage,
                observed,
                choice.percentage,
            )
        })
        .collect();

    deviations.sort_by(|a, b| b.ratio.partial_cmp(&a.ratio).unwrap_or(Ordering::Equal));
    deviations
}

/// Render at most `max_notes` deviations as a sentence about `subject`.
pub fn render_summary(subject: &str, deviations: &[Deviation], max_notes: usize) -> String {
    if deviations.is_empty() {
        return format!("{} did not name any following species.", subject);
    }

    let mut notes: Vec<String> = deviations
        .iter()
        .take(max_notes.max(1))
        .map(Deviation::note)
        .collect();

    if notes.len() > 1 {
        if let Some(last) = notes.last_mut() {
            last.insert_str(0, "and ");
        }
    }

    format!("{}'s follow list has {}.", subject, notes.join(", "))
}

/// Aggregate `answers`, rank them and render the default summary.
pub fn summarize<I, S>(taxonomy: &Taxonomy, subject: &str, answers: I) -> Summary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    summarize_with(taxonomy, subject, answers, DEFAULT_MAX_NOTES)
}

/// [`summarize`] with an explicit note limit.
pub fn summarize_with<I, S>(
    taxonomy: &Taxonomy,
    subject: &str,
    answers: I,
    max_notes: usize,
) -> Summary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let observation = Observation::from_answers(taxonomy, answers);
    let deviations = if observation.is_empty() {
        Vec::new()
    } else {
        rank_deviations(taxonomy, &observation)
    };

    tracing::debug!(
        subject,
        counted = observation.counted(),
        rows = deviations.len(),
        "Summarized responses"
    );

    let text = render_summary(subject, &deviations, max_notes);
    Summary { deviations, text }
}
