//! Application state for the web server.
//!
//! The taxonomy is loaded once and shared read-only. Store calls run on the
//! blocking pool since SQLite access is synchronous.

use crate::error::ApiError;
use species_stat_core::summary::DEFAULT_MAX_NOTES;
use species_stat_core::taxonomy::Taxonomy;
use species_stat_store::{StoreError, SurveyStore};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub taxonomy: Arc<Taxonomy>,
    pub store: SurveyStore,
    /// Deviations mentioned in text summaries.
    pub max_notes: usize,
}

impl AppState {
    pub fn new(taxonomy: Taxonomy, store: SurveyStore) -> Self {
        Self {
            taxonomy: Arc::new(taxonomy),
            store,
            max_notes: DEFAULT_MAX_NOTES,
        }
    }

    pub fn with_max_notes(mut self, max_notes: usize) -> Self {
        self.max_notes = max_notes;
        self
    }

    /// Run a store operation on the blocking pool.
    pub async fn run<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&SurveyStore, &Taxonomy) -> Result<T, StoreError> + Send + 'static,
    {
        let store = self.store.clone();
        let taxonomy = Arc::clone(&self.taxonomy);
        tokio::task::spawn_blocking(move || op(&store, &taxonomy))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?
            .map_err(ApiError::from)
    }
}
