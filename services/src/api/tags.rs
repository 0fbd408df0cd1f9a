//! Handlers for `/api/tags`.

use crate::AppState;
use crate::api::announcements::LanguageParam;
use crate::api::resolve_language_code;
use crate::api::types::{bad_request, storage_error};
use crate::config::Config;
use crate::database::SqlStorage;
use axum::{
    Json,
    extract::{Extension, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};

/// List tags named in the requested language.
///
/// GET /api/tags
pub async fn list<S>(
    State(state): State<AppState<S>>,
    Extension(config): Extension<Config>,
    params: Result<Query<LanguageParam>, QueryRejection>,
) -> impl IntoResponse
where
    S: SqlStorage,
{
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let language = match resolve_language_code(params.language.as_deref(), &config) {
        Ok(language) => language,
        Err(e) => return bad_request(e.to_string()),
    };

    match state.sql_storage.tags_list(language).await {
        Ok(tags) => (StatusCode::OK, Json(tags)).into_response(),
        Err(e) => storage_error("list tags", e),
    }
}
