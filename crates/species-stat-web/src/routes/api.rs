//! REST API endpoints for the survey.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use species_stat_core::summary::Deviation;
use species_stat_core::taxonomy::Taxonomy;
use species_stat_store::{Answer, Contact, NextStep, ResponseCounts, StoreError, SurveyStore, User};
use std::sync::Arc;
use uuid::Uuid;

/// Where a subject stands in the survey.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserStatus {
    pub username: String,
    pub icon_url: String,
    pub result_id: String,
    pub has_userinfo: bool,
    pub species: Option<String>,
    pub species_custom: Option<String>,
    pub responses: ResponseCounts,
    pub next_step: NextStep,
}

fn user_status(store: &SurveyStore, user: User) -> Result<UserStatus, StoreError> {
    let responses = store.response_counts(&user.username)?;
    Ok(UserStatus {
        result_id: user.result_key(),
        has_userinfo: user.userinfo_is_complete(),
        next_step: NextStep::for_user(&user, &responses),
        username: user.username,
        icon_url: user.icon_url,
        species: user.species,
        species_custom: user.species_custom,
        responses,
    })
}

fn require_user(store: &SurveyStore, username: &str) -> Result<User, StoreError> {
    store
        .user(username)?
        .ok_or_else(|| StoreError::UnknownUser(username.to_string()))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Categories and choices with baseline percentages.
pub async fn get_taxonomy(State(state): State<AppState>) -> Json<Arc<Taxonomy>> {
    Json(Arc::clone(&state.taxonomy))
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    #[serde(default)]
    pub icon_url: String,
}

/// Register a subject (idempotent).
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<UserStatus>, ApiError> {
    let username = req.username.trim().to_string();
    if username.is_empty() {
        return Err(ApiError::BadRequest("username must not be empty".into()));
    }

    let status = state
        .run(move |store, _| {
            let user = store.get_or_create_user(&username, &req.icon_url)?;
            user_status(store, user)
        })
        .await?;
    Ok(Json(status))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserStatus>, ApiError> {
    let status = state
        .run(move |store, _| {
            let user = require_user(store, &username)?;
            user_status(store, user)
        })
        .await?;
    Ok(Json(status))
}

#[derive(Debug, Deserialize)]
pub struct UserinfoRequest {
    pub species: String,
    #[serde(default)]
    pub species_custom: Option<String>,
}

/// Declare the subject's own species.
pub async fn put_userinfo(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(req): Json<UserinfoRequest>,
) -> Result<Json<UserStatus>, ApiError> {
    let status = state
        .run(move |store, taxonomy| {
            let user = store.set_userinfo(
                taxonomy,
                &username,
                &req.species,
                req.species_custom.as_deref(),
            )?;
            user_status(store, user)
        })
        .await?;
    Ok(Json(status))
}

#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImportResponse {
    pub imported: usize,
    pub pending: usize,
}

/// Import the subject's contact list.
pub async fn import_contacts(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(req): Json<ImportRequest>,
) -> Result<Json<ImportResponse>, ApiError> {
    let response = state
        .run(move |store, _| {
            let imported = store.import_contacts(&username, &req.contacts)?;
            let counts = store.response_counts(&username)?;
            Ok(ImportResponse {
                imported,
                pending: counts.pending,
            })
        })
        .await?;
    Ok(Json(response))
}

/// Contacts still waiting for a classification.
pub async fn get_pending(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state
        .run(move |store, _| {
            require_user(store, &username)?;
            store.pending_contacts(&username)
        })
        .await?;
    Ok(Json(contacts))
}

#[derive(Debug, Deserialize)]
pub struct ResponsesRequest {
    pub answers: Vec<Answer>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResponsesResponse {
    pub recorded: usize,
    pub result_id: String,
}

/// Record classifications and return the result page id.
pub async fn record_responses(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(req): Json<ResponsesRequest>,
) -> Result<Json<ResponsesResponse>, ApiError> {
    let response = state
        .run(move |store, taxonomy| {
            let recorded = store.record_answers(taxonomy, &username, &req.answers)?;
            let user = require_user(store, &username)?;
            Ok(ResponsesResponse {
                recorded,
                result_id: user.result_key(),
            })
        })
        .await?;
    Ok(Json(response))
}

/// Public result page data.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultView {
    pub username: String,
    pub icon_url: String,
    pub species: Option<String>,
    pub species_custom: Option<String>,
    pub deltas: Vec<Deviation>,
    pub text_summary: String,
}

/// Summary for anyone who knows the result id.
pub async fn get_result(
    State(state): State<AppState>,
    Path(result_id): Path<String>,
) -> Result<Json<ResultView>, ApiError> {
    let id = Uuid::try_parse(&result_id)
        .map_err(|_| ApiError::BadRequest(format!("malformed result id: {}", result_id)))?;
    let max_notes = state.max_notes;

    let view = state
        .run(move |store, taxonomy| {
            let Some(user) = store.user_by_result_id(&id)? else {
                return Ok(None);
            };
            let summary = store.result_summary(taxonomy, &user, max_notes)?;
            Ok(Some(ResultView {
                username: user.username,
                icon_url: user.icon_url,
                species: user.species,
                species_custom: user.species_custom,
                deltas: summary.deviations,
                text_summary: summary.text,
            }))
        })
        .await?;

    view.map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("result {}", result_id)))
}
