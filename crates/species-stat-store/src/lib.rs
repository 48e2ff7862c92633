//! # Species Stat Store
//!
//! SQLite persistence for the survey: accounts, imported contacts and the
//! classification each subject assigned to each contact.
//!
//! ```rust
//! use species_stat_core::builtin;
//! use species_stat_store::{Answer, Contact, SurveyStore};
//!
//! let taxonomy = builtin::taxonomy().unwrap();
//! let store = SurveyStore::open_in_memory().unwrap();
//! store.get_or_create_user("riismo", "").unwrap();
//! store.import_contacts("riismo", &[Contact::new("grey", "")]).unwrap();
//! store
//!     .record_answers(&taxonomy, "riismo", &[Answer::new("grey", "wolf")])
//!     .unwrap();
//!
//! assert_eq!(store.answered_choices("riismo").unwrap(), vec!["wolf"]);
//! ```

pub mod store;
pub mod types;

pub use store::SurveyStore;
pub use types::{
    Answer, Contact, NextStep, ResponseCounts, Result, StoreError, User, MAX_IMPORTED_CONTACTS,
};
