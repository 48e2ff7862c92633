//! Weighted species taxonomy with baseline percentages.
//!
//! A taxonomy is built once from static definitions and then shared read-only.
//! Every choice carries a reference-population frequency; loading normalizes
//! those into percentages of the grand total.

use crate::error::{ConfigurationError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Choice meaning "no species"; never counted or ranked.
pub const NOTHING_CHOICE: &str = "nothing";

/// Choice that requires a custom species description when declared.
pub const OTHER_CHOICE: &str = "other";

fn default_sentinel() -> String {
    NOTHING_CHOICE.to_string()
}

/// Static definition of a single choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceDefinition {
    pub name: String,
    pub label: String,
    pub frequency: u64,
}

impl ChoiceDefinition {
    pub fn new(name: impl Into<String>, label: impl Into<String>, frequency: u64) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            frequency,
        }
    }
}

/// Static definition of a category and its choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    pub label: String,
    pub choices: Vec<ChoiceDefinition>,
}

impl CategoryDefinition {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        choices: Vec<ChoiceDefinition>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            choices,
        }
    }
}

/// Ordered category definitions plus the name of the "nothing selected" choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyDefinition {
    pub categories: Vec<CategoryDefinition>,
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
}

impl TaxonomyDefinition {
    pub fn new(categories: Vec<CategoryDefinition>) -> Self {
        Self {
            categories,
            sentinel: default_sentinel(),
        }
    }

    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }
}

/// A selectable classification value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    pub name: String,
    pub label: String,
    pub frequency: u64,
    /// Share of the grand total frequency, in [0, 1].
    pub percentage: f64,
}

/// A named group of choices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub name: String,
    pub label: String,
    pub choices: Vec<Choice>,
    pub total_frequency: u64,
    pub percentage: f64,
}

/// Result of looking up the category that owns a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryLookup<'a> {
    Found { name: &'a str, label: &'a str },
    Unknown,
}

impl<'a> CategoryLookup<'a> {
    /// `(name, label)`, with `("unknown", "Unknown")` for unrecognized choices.
    pub fn pair(&self) -> (&'a str, &'a str) {
        match *self {
            CategoryLookup::Found { name, label } => (name, label),
            CategoryLookup::Unknown => ("unknown", "Unknown"),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, CategoryLookup::Found { .. })
    }
}

/// Choices of one category, borrowed for selection UI.
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceGroup<'a> {
    pub category: &'a str,
    pub label: &'a str,
    pub choices: Vec<(&'a str, &'a str)>,
}

/// Immutable weighted taxonomy. Cheap to share behind an `Arc`.
#[derive(Debug, Clone, Serialize)]
pub struct Taxonomy {
    categories: Vec<Category>,
    sentinel: String,
    total_frequency: u64,
    #[serde(skip)]
    index: HashMap<String, (usize, usize)>,
}

impl Taxonomy {
    /// Build a taxonomy, computing every baseline percentage.
    pub fn load(definition: TaxonomyDefinition) -> Result<Self> {
        let mut index = HashMap::new();
        let mut total_frequency: u64 = 0;

        for (ci, category) in definition.categories.iter().enumerate() {
            if category.name.is_empty() {
                return Err(ConfigurationError::EmptyName("category"));
            }
            for (hi, choice) in category.choices.iter().enumerate() {
                if choice.name.is_empty() {
                    return Err(ConfigurationError::EmptyName("choice"));
                }
                if index.insert(choice.name.clone(), (ci, hi)).is_some() {
                    return Err(ConfigurationError::DuplicateChoice(choice.name.clone()));
                }
                total_frequency = total_frequency
                    .checked_add(choice.frequency)
                    .ok_or(ConfigurationError::FrequencyOverflow)?;
            }
        }

        if total_frequency == 0 {
            return Err(ConfigurationError::ZeroTotalFrequency);
        }

        let total = total_frequency as f64;
        let categories: Vec<Category> = definition
            .categories
            .into_iter()
            .map(|category| {
                // Bounded by the checked grand total above.
                let category_total: u64 = category.choices.iter().map(|c| c.frequency).sum();
                Category {
                    name: category.name,
                    label: category.label,
                    total_frequency: category_total,
                    percentage: category_total as f64 / total,
                    choices: category
                        .choices
                        .into_iter()
                        .map(|choice| Choice {
                            percentage: choice.frequency as f64 / total,
                            name: choice.name,
                            label: choice.label,
                            frequency: choice.frequency,
                        })
                        .collect(),
                }
            })
            .collect();

        tracing::info!(
            categories = categories.len(),
            choices = index.len(),
            total_frequency,
            "Loaded taxonomy"
        );

        Ok(Self {
            categories,
            sentinel: definition.sentinel,
            total_frequency,
            index,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Name of the "nothing selected" choice.
    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    pub fn total_frequency(&self) -> u64 {
        self.total_frequency
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, choice_name: &str) -> bool {
        self.index.contains_key(choice_name)
    }

    pub fn choice(&self, choice_name: &str) -> Option<&Choice> {
        let &(ci, hi) = self.index.get(choice_name)?;
        Some(&self.categories[ci].choices[hi])
    }

    /// Every (category, choice) pair in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&Category, &Choice)> + '_ {
        self.categories
            .iter()
            .flat_map(|category| category.choices.iter().map(move |choice| (category, choice)))
    }

    /// Flat `(name, label)` pairs in category-then-choice order.
    pub fn choices(&self) -> Vec<(&str, &str)> {
        self.iter()
            .map(|(_, choice)| (choice.name.as_str(), choice.label.as_str()))
            .collect()
    }

    pub fn grouped_choices(&self) -> Vec<ChoiceGroup<'_>> {
        self.categories
            .iter()
            .map(|category| ChoiceGroup {
                category: &category.name,
                label: &category.label,
                choices: category
                    .choices
                    .iter()
                    .map(|c| (c.name.as_str(), c.label.as_str()))
                    .collect(),
            })
            .collect()
    }

    /// Category owning `choice_name`. Never fails.
    pub fn category_of(&self, choice_name: &str) -> CategoryLookup<'_> {
        match self.index.get(choice_name) {
            Some(&(ci, _)) => {
                let category = &self.categories[ci];
                CategoryLookup::Found {
                    name: &category.name,
                    label: &category.label,
                }
            }
            None => CategoryLookup::Unknown,
        }
    }

    /// Baseline percentage of a choice, `None` if unknown.
    pub fn baseline_percent(&self, choice_name: &str) -> Option<f64> {
        self.choice(choice_name).map(|c| c.percentage)
    }

    /// Choice names that can be counted: everything except the sentinel.
    pub fn countable_choices(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter()
            .map(|(_, choice)| choice.name.as_str())
            .filter(move |name| *name != self.sentinel)
    }
}

/// Build a taxonomy from definitions. See [`Taxonomy::load`].
pub fn load_taxonomy(definition: TaxonomyDefinition) -> Result<Taxonomy> {
    Taxonomy::load(definition)
}

/// Free-function form of [`Taxonomy::category_of`].
pub fn category_of<'a>(taxonomy: &'a Taxonomy, choice_name: &str) -> CategoryLookup<'a> {
    taxonomy.category_of(choice_name)
}
