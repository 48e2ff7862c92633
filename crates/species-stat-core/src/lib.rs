//! # Species Stat Core
//!
//! Baseline statistics for the follow-list species survey.
//!
//! A subject declares their own species, then classifies each account they
//! follow. This crate holds the computational core:
//!
//! - **Taxonomy**: weighted categories and choices, normalized once into
//!   baseline percentages
//! - **Observation**: a subject's answers as observed percentages
//! - **Summary**: observed/baseline ratios, ranked, with a short sentence
//!   describing the largest deviations
//!
//! ## Quick Start
//!
//! ```rust
//! use species_stat_core::prelude::*;
//!
//! let taxonomy = builtin::taxonomy().unwrap();
//! let summary = summarize(&taxonomy, "riismo", ["wolf", "wolf", "dragon"]);
//!
//! assert_eq!(summary.deviations[0].label, "Dragon");
//! assert!(summary.text.starts_with("riismo's follow list has"));
//! ```

pub mod aggregate;
pub mod builtin;
pub mod config;
pub mod error;
pub mod prelude;
pub mod summary;
pub mod taxonomy;
