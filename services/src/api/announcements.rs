//! Handlers for `/api/announcements/*` endpoints.

use crate::AppState;
use crate::announcements::{AnnouncementApproval, AnnouncementQuery, Page};
use crate::api::resolve_language_code;
use crate::api::types::{bad_request, storage_error};
use crate::config::Config;
use crate::database::SqlStorage;
use axum::{
    Json,
    extract::{Extension, Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// Query string for `GET /api/announcements`.
///
/// `tags` is a comma separated list of tag names in `language`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAnnouncementsParams {
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LanguageParam {
    #[serde(default)]
    pub language: Option<String>,
}

/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (midnight UTC).
pub(crate) fn parse_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return Some(time.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|time| time.and_utc())
}

fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|tags| {
        tags.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

/// List one page of announcements.
///
/// GET /api/announcements
pub async fn list<S>(
    State(state): State<AppState<S>>,
    Extension(config): Extension<Config>,
    params: Result<Query<ListAnnouncementsParams>, QueryRejection>,
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

    let Some(page) = Page::new(params.page.unwrap_or(1)) else {
        return bad_request("Page numbers start at 1");
    };

    let start_time = match params.start_time.as_deref() {
        None => DateTime::<Utc>::UNIX_EPOCH,
        Some(raw) => match parse_time(raw) {
            Some(time) => time,
            None => return bad_request(format!("Invalid startTime: {raw}")),
        },
    };

    let end_time = match params.end_time.as_deref() {
        None => Utc::now(),
        Some(raw) => match parse_time(raw) {
            Some(time) => time,
            None => return bad_request(format!("Invalid endTime: {raw}")),
        },
    };

    let query = AnnouncementQuery::new(
        split_tags(params.tags.as_deref()),
        start_time,
        end_time,
        page,
        language,
    );

    match state.sql_storage.announcements_list(query).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => storage_error("list announcements", e),
    }
}

/// Publish, approve and pin an announcement, overwriting its localized text.
///
/// PUT /api/announcements/:id/approval
pub async fn approve<S>(
    State(state): State<AppState<S>>,
    Extension(config): Extension<Config>,
    Path(id): Path<i32>,
    params: Result<Query<LanguageParam>, QueryRejection>,
    Json(payload): Json<AnnouncementApproval>,
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

    if payload.title.trim().is_empty() {
        return bad_request("Title cannot be empty");
    }

    match state
        .sql_storage
        .announcements_approve(id, language, payload)
        .await
    {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => storage_error("approve announcement", e),
    }
}
