//! Convenience re-exports.

pub use crate::aggregate::Observation;
pub use crate::builtin;
pub use crate::config::Config;
pub use crate::error::{ConfigError, ConfigurationError};
pub use crate::summary::{
    rank_deviations, render_summary, summarize, summarize_with, Deviation, Summary,
    DEFAULT_MAX_NOTES,
};
pub use crate::taxonomy::{
    category_of, load_taxonomy, Category, CategoryDefinition, CategoryLookup, Choice,
    ChoiceDefinition, Taxonomy, TaxonomyDefinition, NOTHING_CHOICE, OTHER_CHOICE,
};
