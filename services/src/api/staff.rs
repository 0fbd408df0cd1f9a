//! Handlers for `/api/staff/*`.

use crate::AppState;
use crate::api::resolve_language_id;
use crate::api::types::{ApiErrorResponse, bad_request, storage_error};
use crate::config::Config;
use crate::database::SqlStorage;
use axum::{
    Json,
    extract::{Extension, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniProfileParams {
    pub profile_id: i32,
    #[serde(default)]
    pub language_id: Option<i32>,
}

/// Get a staff member's mini profile.
///
/// GET /api/staff/miniProfile?profileId=<id>&languageId=<id>
pub async fn mini_profile<S>(
    State(state): State<AppState<S>>,
    Extension(config): Extension<Config>,
    params: Result<Query<MiniProfileParams>, QueryRejection>,
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

    match state
        .sql_storage
        .staff_mini_profile(params.profile_id, language)
        .await
    {
        Ok(Some(profile)) => (StatusCode::OK, Json(profile)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiErrorResponse::not_found(format!(
                "Staff profile {} has no {} text",
                params.profile_id, language
            ))),
        )
            .into_response(),
        Err(e) => storage_error("get staff profile", e),
    }
}
