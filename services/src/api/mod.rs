//! HTTP API served under `/api`.
//!
//! - `announcements` - announcement listing and approval
//! - `tags` - localized tag names for filter chips
//! - `staff` - staff mini profiles
//! - `faculty` - faculty directory cards and departments
//! - `types` - shared error responses

pub mod announcements;
pub mod faculty;
pub mod staff;
pub mod tags;
pub mod types;

use crate::AppState;
use crate::config::Config;
use crate::database::SqlStorage;
use axum::{
    Router,
    routing::{get, put},
};
use campus_utils::{Language, LanguageError};

/// Creates the API router with all endpoints.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: SqlStorage,
{
    Router::new()
        .route("/announcements", get(announcements::list::<S>))
        .route(
            "/announcements/{id}/approval",
            put(announcements::approve::<S>),
        )
        .route("/tags", get(tags::list::<S>))
        .route("/staff/miniProfile", get(staff::mini_profile::<S>))
        .route("/faculty", get(faculty::list::<S>))
        .route("/departments", get(faculty::departments::<S>))
}

/// Resolves a `language=<code>` parameter, falling back to the configured default.
pub(crate) fn resolve_language_code(
    code: Option<&str>,
    config: &Config,
) -> Result<Language, LanguageError> {
    match code {
        Some(code) => Language::from_code(code),
        None => Ok(config.default_language()),
    }
}

/// Resolves a `languageId=<id>` parameter, falling back to the configured default.
pub(crate) fn resolve_language_id(
    id: Option<i32>,
    config: &Config,
) -> Result<Language, LanguageError> {
    match id {
        Some(id) => Language::from_id(id),
        None => Ok(config.default_language()),
    }
}
