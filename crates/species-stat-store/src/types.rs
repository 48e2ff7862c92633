//! Persistent records and store errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Upper bound on contacts imported for one subject (five pages of 200).
pub const MAX_IMPORTED_CONTACTS: usize = 1000;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("{contact} is not in {subject}'s contact list")]
    UnknownContact { subject: String, contact: String },

    #[error("Unknown choice: {0}")]
    UnknownChoice(String),

    #[error("Custom species must be entered if \"other\" is selected")]
    MissingCustomSpecies,

    #[error("Userinfo of {0} is already set")]
    UserinfoAlreadySet(String),

    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

/// An account: either a subject taking the survey or one of their contacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub icon_url: String,
    /// Public key of the result page.
    pub result_id: Uuid,
    /// Declared choice name, once userinfo is complete.
    pub species: Option<String>,
    /// Free text, only kept for the "other" choice.
    pub species_custom: Option<String>,
}

impl User {
    pub fn userinfo_is_complete(&self) -> bool {
        self.species.is_some()
    }

    /// Result id as 32 lowercase hex digits.
    pub fn result_key(&self) -> String {
        self.result_id.simple().to_string()
    }
}

/// A followed account to be classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub username: String,
    #[serde(default)]
    pub icon_url: String,
}

impl Contact {
    pub fn new(username: impl Into<String>, icon_url: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            icon_url: icon_url.into(),
        }
    }
}

/// One classification submitted by a subject. An empty `choice` means skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub contact: String,
    pub choice: String,
}

impl Answer {
    pub fn new(contact: impl Into<String>, choice: impl Into<String>) -> Self {
        Self {
            contact: contact.into(),
            choice: choice.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCounts {
    pub answered: usize,
    pub pending: usize,
    pub total: usize,
}

/// Where a subject should go next in the survey flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStep {
    /// Own species not declared yet.
    Userinfo,
    /// Contacts still waiting for a classification.
    Survey,
    /// Everything answered; results are available.
    Results,
    /// Nothing imported and nothing answered.
    Welcome,
}

impl NextStep {
    pub fn for_user(user: &User, counts: &ResponseCounts) -> Self {
        if !user.userinfo_is_complete() {
            NextStep::Userinfo
        } else if counts.pending > 0 {
            NextStep::Survey
        } else if counts.answered > 0 {
            NextStep::Results
        } else {
            NextStep::Welcome
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(species: Option<&str>) -> User {
        User {
            username: "riismo".into(),
            icon_url: String::new(),
            result_id: Uuid::nil(),
            species: species.map(String::from),
            species_custom: None,
        }
    }

    #[test]
    fn next_step_order() {
        let counts = ResponseCounts {
            answered: 2,
            pending: 1,
            total: 3,
        };
        assert_eq!(NextStep::for_user(&user(None), &counts), NextStep::Userinfo);
        assert_eq!(NextStep::for_user(&user(Some("wolf")), &counts), NextStep::Survey);

        let done = ResponseCounts {
            answered: 3,
            pending: 0,
            total: 3,
        };
        assert_eq!(NextStep::for_user(&user(Some("wolf")), &done), NextStep::Results);
        assert_eq!(
            NextStep::for_user(&user(Some("wolf")), &ResponseCounts::default()),
            NextStep::Welcome
        );
    }

    #[test]
    fn result_key_is_simple_hex() {
        assert_eq!(user(None).result_key(), "0".repeat(32));
    }

    #[test]
    fn contact_error_message() {
        let err = StoreError::UnknownContact {
            subject: "riismo".into(),
            contact: "fox".into(),
        };
        assert_eq!(err.to_string(), "fox is not in riismo's contact list");
    }
}
