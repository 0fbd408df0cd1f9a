//! HTTP service for the department site: announcements, tags, staff
//! profiles and the faculty directory, backed by PostgreSQL.

use crate::config::Config;
use crate::database::SqlStorage;
use axum::{
    Router,
    extract::{Extension, Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;

pub mod announcements;
pub mod api;
pub mod build_info;
pub mod config;
pub mod database;
pub mod faculty;
pub mod staff;
pub mod tags;
pub mod telemetry;

/// Shared router state.
#[derive(Clone)]
pub struct AppState<S> {
    pub sql_storage: S,
}

impl<S> AppState<S> {
    pub fn new(sql_storage: S) -> Self {
        Self { sql_storage }
    }
}

/// Creates the application router.
pub fn routes<S>(sql_storage: S, config: Config) -> Router
where
    S: SqlStorage,
{
    let state = AppState::new(sql_storage);

    let api_routes = api::routes::<S>().route("/is-health", get(health_check::<S>));

    Router::new()
        .nest("/api", api_routes)
        .fallback(any(catch_all))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http_request",
                    http_request.method = ?request.method(),
                    http_request.uri = ?request.uri(),
                    http_request.version = ?request.version(),
                    http_request.user_agent = ?request.headers().get(axum::http::header::USER_AGENT),
                )
            }),
        )
        .layer(Extension(config))
        .with_state(state)
}

async fn health_check<S>(
    State(state): State<AppState<S>>,
    Extension(config): Extension<Config>,
) -> impl IntoResponse
where
    S: SqlStorage,
{
    let mut response = if state.sql_storage.is_connected().await {
        (StatusCode::OK, "OK").into_response()
    } else {
        (StatusCode::BAD_GATEWAY, "502").into_response()
    };

    let headers = [
        ("x-service-env", config.environment().to_string()),
        (
            "x-service-version",
            build_info::version_label(config.environment()),
        ),
    ];
    for (name, value) in headers {
        match HeaderValue::from_str(&value) {
            Ok(value) => {
                response
                    .headers_mut()
                    .insert(HeaderName::from_static(name), value);
            }
            Err(e) => tracing::warn!("Skipping {} header: {}", name, e),
        }
    }

    response
}

async fn catch_all() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
