//! SQLite-backed survey store.
//!
//! Holds accounts and responses. A response links a subject to one of their
//! contacts and carries the subject's classification, or NULL while pending.

use crate::types::*;
use rusqlite::{params, Connection, OptionalExtension, Row};
use species_stat_core::summary::{summarize_with, Summary};
use species_stat_core::taxonomy::{Taxonomy, OTHER_CHOICE};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

const USER_COLUMNS: &str = "username, icon_url, result_id, species, species_custom";

/// Survey persistence. Clones share one connection.
#[derive(Clone)]
pub struct SurveyStore {
    conn: Arc<Mutex<Connection>>,
}

impl SurveyStore {
    /// Create a new in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_with_connection(conn)
    }

    /// Create or open a file-backed store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "Opened survey database");
        Self::init_with_connection(conn)
    }

    fn init_with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                username TEXT PRIMARY KEY,
                icon_url TEXT NOT NULL,
                result_id TEXT NOT NULL UNIQUE,
                species TEXT,
                species_custom TEXT
            );

            CREATE TABLE IF NOT EXISTS responses (
                source TEXT NOT NULL REFERENCES users(username) ON DELETE CASCADE,
                target TEXT NOT NULL REFERENCES users(username) ON DELETE CASCADE,
                species TEXT,
                PRIMARY KEY (source, target)
            );

            CREATE INDEX IF NOT EXISTS idx_responses_source ON responses(source);
            "#,
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn row_to_user(row: &Row<'_>) -> rusqlite::Result<(User, String)> {
        let result_id: String = row.get(2)?;
        Ok((
            User {
                username: row.get(0)?,
                icon_url: row.get(1)?,
                result_id: Uuid::nil(),
                species: row.get(3)?,
                species_custom: row.get(4)?,
            },
            result_id,
        ))
    }

    fn finish_user((mut user, result_id): (User, String)) -> Result<User> {
        user.result_id = Uuid::parse_str(&result_id)
            .map_err(|e| StoreError::Corrupt(format!("result_id of {}: {}", user.username, e)))?;
        Ok(user)
    }

    fn find_user(conn: &Connection, username: &str) -> Result<Option<User>> {
        let sql = format!("SELECT {} FROM users WHERE username = ?1", USER_COLUMNS);
        conn.query_row(&sql, params![username], Self::row_to_user)
            .optional()?
            .map(Self::finish_user)
            .transpose()
    }

    fn require_user(conn: &Connection, username: &str) -> Result<User> {
        Self::find_user(conn, username)?
            .ok_or_else(|| StoreError::UnknownUser(username.to_string()))
    }

    fn insert_user_if_missing(conn: &Connection, username: &str, icon_url: &str) -> Result<bool> {
        let inserted = conn.execute(
            "INSERT OR IGNORE INTO users (username, icon_url, result_id) VALUES (?1, ?2, ?3)",
            params![username, icon_url, Uuid::new_v4().simple().to_string()],
        )?;
        Ok(inserted > 0)
    }

    /// Return the named user, creating it first if required.
    pub fn get_or_create_user(&self, username: &str, icon_url: &str) -> Result<User> {
        let conn = self.lock();
        if Self::insert_user_if_missing(&conn, username, icon_url)? {
            tracing::info!(username, "Created user");
        }
        Self::require_user(&conn, username)
    }

    pub fn user(&self, username: &str) -> Result<Option<User>> {
        Self::find_user(&self.lock(), username)
    }

    pub fn user_by_result_id(&self, result_id: &Uuid) -> Result<Option<User>> {
        let conn = self.lock();
        let sql = format!("SELECT {} FROM users WHERE result_id = ?1", USER_COLUMNS);
        conn.query_row(
            &sql,
            params![result_id.simple().to_string()],
            Self::row_to_user,
        )
        .optional()?
        .map(Self::finish_user)
        .transpose()
    }

    /// Record the subject's own species. This happens once; a subject whose
    /// userinfo is complete gets `UserinfoAlreadySet`.
    ///
    /// `other` requires custom text; custom text is dropped for any other choice.
    pub fn set_userinfo(
        &self,
        taxonomy: &Taxonomy,
        username: &str,
        species: &str,
        species_custom: Option<&str>,
    ) -> Result<User> {
        if !taxonomy.contains(species) {
            return Err(StoreError::UnknownChoice(species.to_string()));
        }

        let custom = species_custom.map(str::trim).filter(|s| !s.is_empty());
        let custom = if species == OTHER_CHOICE {
            Some(custom.ok_or(StoreError::MissingCustomSpecies)?)
        } else {
            None
        };

        let conn = self.lock();
        if Self::require_user(&conn, username)?.userinfo_is_complete() {
            return Err(StoreError::UserinfoAlreadySet(username.to_string()));
        }
        conn.execute(
            "UPDATE users SET species = ?2, species_custom = ?3 WHERE username = ?1",
            params![username, species, custom],
        )?;

        tracing::info!(username, species, "Recorded userinfo");
        Self::require_user(&conn, username)
    }

    /// Add contacts as pending responses of `subject`.
    ///
    /// Already-known pairs are left untouched. Returns the number of new
    /// pending responses.
    pub fn import_contacts(&self, subject: &str, contacts: &[Contact]) -> Result<usize> {
        let mut conn = self.lock();
        Self::require_user(&conn, subject)?;

        let tx = conn.transaction()?;
        let mut added = 0;
        for contact in contacts.iter().take(MAX_IMPORTED_CONTACTS) {
            if contact.username.is_empty() {
                continue;
            }
            Self::insert_user_if_missing(&tx, &contact.username, &contact.icon_url)?;
            added += tx.execute(
                "INSERT OR IGNORE INTO responses (source, target) VALUES (?1, ?2)",
                params![subject, contact.username],
            )?;
        }
        tx.commit()?;

        tracing::info!(subject, added, offered = contacts.len(), "Imported contacts");
        Ok(added)
    }

    /// Contacts of `subject` still waiting for a classification.
    pub fn pending_contacts(&self, subject: &str) -> Result<Vec<Contact>> {
        let conn = self.lock();
        let mut stmt = conn.prepare(
            "SELECT u.username, u.icon_url FROM responses r \
             JOIN users u ON u.username = r.target \
             WHERE r.source = ?1 AND r.species IS NULL \
             ORDER BY u.username",
        )?;
        let contacts = stmt
            .query_map(params![subject], |row| {
                Ok(Contact {
                    username: row.get(0)?,
                    icon_url: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(contacts)
    }

    /// Store classifications; the whole batch fails on the first invalid answer.
    ///
    /// Answers with an empty choice are skipped. Returns how many were stored.
    pub fn record_answers(
        &self,
        taxonomy: &Taxonomy,
        subject: &str,
        answers: &[Answer],
    ) -> Result<usize> {
        let mut conn = self.lock();
        Self::require_user(&conn, subject)?;

        let tx = conn.transaction()?;
        let mut recorded = 0;
        for answer in answers {
            if answer.choice.is_empty() {
                continue;
            }
            if !taxonomy.contains(&answer.choice) {
                return Err(StoreError::UnknownChoice(answer.choice.clone()));
            }
            let updated = tx.execute(
                "UPDATE responses SET species = ?3 WHERE source = ?1 AND target = ?2",
                params![subject, answer.contact, answer.choice],
            )?;
            if updated == 0 {
                return Err(StoreError::UnknownContact {
                    subject: subject.to_string(),
                    contact: answer.contact.clone(),
                });
            }
            recorded += 1;
        }
        tx.commit()?;

        tracing::info!(subject, recorded, "Recorded answers");
        Ok(recorded)
    }

    /// Choice names of every answered response of `subject`.
    pub fn answered_choices(&self, subject: &str) -> Result<Vec<String>> {
        let conn = self.lock();
        let mut stmt = conn.prepare(
            "SELECT species FROM responses \
             WHERE source = ?1 AND species IS NOT NULL ORDER BY target",
        )?;
        let choices = stmt
            .query_map(params![subject], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(choices)
    }

    pub fn response_counts(&self, subject: &str) -> Result<ResponseCounts> {
        Self::count_responses(&self.lock(), subject)
    }

    fn count_responses(conn: &Connection, subject: &str) -> Result<ResponseCounts> {
        let (total, answered): (i64, i64) = conn.query_row(
            "SELECT COUNT(*), COUNT(species) FROM responses WHERE source = ?1",
            params![subject],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        let total = total as usize;
        let answered = answered as usize;
        Ok(ResponseCounts {
            answered,
            pending: total - answered,
            total,
        })
    }

    pub fn next_step(&self, username: &str) -> Result<NextStep> {
        let conn = self.lock();
        let user = Self::require_user(&conn, username)?;
        let counts = Self::count_responses(&conn, username)?;
        Ok(NextStep::for_user(&user, &counts))
    }

    /// Deviation summary of everything `user` has answered so far.
    pub fn result_summary(
        &self,
        taxonomy: &Taxonomy,
        user: &User,
        max_notes: usize,
    ) -> Result<Summary> {
        let answers = self.answered_choices(&user.username)?;
        Ok(summarize_with(taxonomy, &user.username, &answers, max_notes))
    }

    /// Number of (users, responses) rows.
    pub fn stats(&self) -> Result<(usize, usize)> {
        let conn = self.lock();
        let users: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        let responses: i64 =
            conn.query_row("SELECT COUNT(*) FROM responses", [], |row| row.get(0))?;
        Ok((users as usize, responses as usize))
    }
}
