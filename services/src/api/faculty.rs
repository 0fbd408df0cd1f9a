//! Handlers for `/api/faculty` and `/api/departments`.

use crate::AppState;
use crate::api::resolve_language_id;
use crate::api::types::{bad_request, storage_error};
use crate::config::Config;
use crate::database::SqlStorage;
use axum::{
    Json,
    extract::{Extension, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageIdParam {
    #[serde(default)]
    pub language_id: Option<i32>,
}

/// List faculty directory cards.
///
/// GET /api/faculty
pub async fn list<S>(
    State(state): State<AppState<S>>,
    Extension(config): Extension<Config>,
    params: Result<Query<LanguageIdParam>, QueryRejection>,
) -> impl IntoResponse
where
    S: SqlStorage,
{
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let language = match resolve_language_id(params.language_id, &config) {
        Ok(language) => language,
        Err(e) => return bad_request(e.to_string()),
    };

    match state.sql_storage.faculty_list(language).await {
        Ok(cards) => (StatusCode::OK, Json(cards)).into_response(),
        Err(e) => storage_error("list faculty", e),
    }
}

/// List departments for the directory filters.
///
/// GET /api/departments
pub async fn departments<S>(
    State(state): State<AppState<S>>,
    Extension(config): Extension<Config>,
    params: Result<Query<LanguageIdParam>, QueryRejection>,
) -> impl IntoResponse
where
    S: SqlStorage,
{
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let language = match resolve_language_id(params.language_id, &config) {
        Ok(language) => language,
        Err(e) => return bad_request(e.to_string()),
    };

    match state.sql_storage.departments_list(language).await {
        Ok(departments) => (StatusCode::OK, Json(departments)).into_response(),
        Err(e) => storage_error("list departments", e),
    }
}
