//! Storage abstraction over the department database.
//!
//! Handlers are generic over [`SqlStorage`]; [`PgStorage`] is the PostgreSQL
//! implementation. `PgStorage` keeps no pool: every operation opens its own
//! connection and closes it before returning, on success and on error.

use crate::announcements::{
    self, AnnouncementApproval, AnnouncementQuery, AnnouncementRecord, AnnouncementView, TagView,
};
use crate::config::Config;
use crate::faculty::{self, DepartmentLabel, FacultyCard};
use crate::{staff, tags};
use campus_utils::Language;
use campus_utils::profile::MiniProfile;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use std::future::Future;
use std::str::FromStr;

/// Error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum SqlStorageError {
    /// The requested row, or its localization for the requested language, does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The database rejected the operation or could not be reached.
    #[error("Database error: {0}")]
    Db(String),
}

impl From<sqlx::Error> for SqlStorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Db(err.to_string())
    }
}

pub trait SqlStorage: Clone + Send + Sync + 'static {
    fn is_connected(&self) -> impl Future<Output = bool> + Send;

    /// One page of published, approved announcements localized to `query.language`.
    fn announcements_list(
        &self,
        query: AnnouncementQuery,
    ) -> impl Future<Output = Result<Vec<AnnouncementView>, SqlStorageError>> + Send;

    /// Publishes, approves and pins an announcement and overwrites its
    /// localized text for `language`.
    ///
    /// Returns [`SqlStorageError::NotFound`] when the announcement or its
    /// `language` localization is missing; nothing is created in that case.
    fn announcements_approve(
        &self,
        announcement_id: i32,
        language: Language,
        approval: AnnouncementApproval,
    ) -> impl Future<Output = Result<AnnouncementRecord, SqlStorageError>> + Send;

    fn tags_list(
        &self,
        language: Language,
    ) -> impl Future<Output = Result<Vec<TagView>, SqlStorageError>> + Send;

    fn staff_mini_profile(
        &self,
        profile_id: i32,
        language: Language,
    ) -> impl Future<Output = Result<Option<MiniProfile>, SqlStorageError>> + Send;

    fn faculty_list(
        &self,
        language: Language,
    ) -> impl Future<Output = Result<Vec<FacultyCard>, SqlStorageError>> + Send;

    fn departments_list(
        &self,
        language: Language,
    ) -> impl Future<Output = Result<Vec<DepartmentLabel>, SqlStorageError>> + Send;
}

#[derive(Clone)]
pub struct PgStorage {
    options: PgConnectOptions,
}

impl PgStorage {
    pub fn new(database_url: &str) -> Result<Self, SqlStorageError> {
        let options = PgConnectOptions::from_str(database_url)?;
        Ok(Self { options })
    }

    pub fn from_config(config: &Config) -> Result<Self, SqlStorageError> {
        Self::new(config.database_url())
    }

    /// Opens a connection owned by a single storage operation.
    pub async fn connect(&self) -> Result<PgConnection, SqlStorageError> {
        let conn = PgConnection::connect_with(&self.options).await?;
        Ok(conn)
    }

    /// Applies the migrations bundled under `services/migrations`.
    pub async fn run_migrations(&self) -> anyhow::Result<()> {
        let mut conn = self.connect().await?;
        let result = sqlx::migrate!("./migrations").run(&mut conn).await;
        release(conn).await;
        result?;

        tracing::info!("Database migrations applied");
        Ok(())
    }
}

async fn release(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!("Failed to close database connection: {}", e);
    }
}

impl SqlStorage for PgStorage {
    async fn is_connected(&self) -> bool {
        let Ok(mut conn) = self.connect().await else {
            return false;
        };
        let alive = sqlx::query("SELECT 1").execute(&mut conn).await.is_ok();
        release(conn).await;
        alive
    }

    async fn announcements_list(
        &self,
        query: AnnouncementQuery,
    ) -> Result<Vec<AnnouncementView>, SqlStorageError> {
        let mut conn = self.connect().await?;
        let result = announcements::query::list(&mut conn, &query).await;
        release(conn).await;
        Ok(result?)
    }

    async fn announcements_approve(
        &self,
        announcement_id: i32,
        language: Language,
        approval: AnnouncementApproval,
    ) -> Result<AnnouncementRecord, SqlStorageError> {
        let mut conn = self.connect().await?;
        let result =
            announcements::query::approve(&mut conn, announcement_id, language, &approval).await;
        release(conn).await;
        result
    }

    async fn tags_list(&self, language: Language) -> Result<Vec<TagView>, SqlStorageError> {
        let mut conn = self.connect().await?;
        let result = tags::list(&mut conn, language).await;
        release(conn).await;
        Ok(result?)
    }

    async fn staff_mini_profile(
        &self,
        profile_id: i32,
        language: Language,
    ) -> Result<Option<MiniProfile>, SqlStorageError> {
        let mut conn = self.connect().await?;
        let result = staff::mini_profile(&mut conn, profile_id, language).await;
        release(conn).await;
        Ok(result?)
    }

    async fn faculty_list(&self, language: Language) -> Result<Vec<FacultyCard>, SqlStorageError> {
        let mut conn = self.connect().await?;
        let result = faculty::list(&mut conn, language).await;
        release(conn).await;
        Ok(result?)
    }

    async fn departments_list(
        &self,
        language: Language,
    ) -> Result<Vec<DepartmentLabel>, SqlStorageError> {
        let mut conn = self.connect().await?;
        let result = faculty::departments(&mut conn, language).await;
        release(conn).await;
        Ok(result?)
    }
}
