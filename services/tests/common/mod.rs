//! Shared test utilities for integration tests.
//!
//! This module provides common test infrastructure including:
//! - `MockSqlStorage` - an in-memory `SqlStorage` that records listing queries
//! - Helpers for building the router and fixture data

use campus_services::{
    announcements::{
        AnnouncementApproval, AnnouncementQuery, AnnouncementRecord, AnnouncementView, TagView,
    },
    config::Config,
    database::{SqlStorage, SqlStorageError},
    faculty::{DepartmentLabel, FacultyCard},
    routes,
};
use campus_utils::Language;
use campus_utils::profile::MiniProfile;
use chrono::{TimeZone, Utc};
use std::sync::{Arc, Mutex};

/// Mock SQL storage for testing.
#[derive(Clone)]
pub struct MockSqlStorage {
    pub is_connected: bool,
    /// Returned as-is by `announcements_list`.
    pub announcements: Vec<AnnouncementView>,
    /// `(announcement id, language)` pairs that have localized text.
    pub localized: Vec<(i32, Language)>,
    pub profiles: Vec<(Language, MiniProfile)>,
    pub faculty: Vec<FacultyCard>,
    /// Every query `announcements_list` received.
    pub queries: Arc<Mutex<Vec<AnnouncementQuery>>>,
}

impl MockSqlStorage {
    pub fn new() -> Self {
        Self {
            is_connected: true,
            announcements: Vec::new(),
            localized: Vec::new(),
            profiles: Vec::new(),
            faculty: Vec::new(),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[allow(dead_code)]
    pub fn disconnected() -> Self {
        Self {
            is_connected: false,
            ..Self::new()
        }
    }

    #[allow(dead_code)]
    pub fn last_query(&self) -> Option<AnnouncementQuery> {
        self.queries.lock().expect("lock poisoned").last().cloned()
    }
}

impl Default for MockSqlStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlStorage for MockSqlStorage {
    async fn is_connected(&self) -> bool {
        self.is_connected
    }

    async fn announcements_list(
        &self,
        query: AnnouncementQuery,
    ) -> Result<Vec<AnnouncementView>, SqlStorageError> {
        self.queries.lock().expect("lock poisoned").push(query);
        Ok(self.announcements.clone())
    }

    async fn announcements_approve(
        &self,
        announcement_id: i32,
        language: Language,
        approval: AnnouncementApproval,
    ) -> Result<AnnouncementRecord, SqlStorageError> {
        if !self.localized.contains(&(announcement_id, language)) {
            return Err(SqlStorageError::NotFound(format!(
                "announcement {announcement_id} has no {language} localization"
            )));
        }

        let now = Utc::now();
        Ok(AnnouncementRecord {
            id: announcement_id,
            author: approval.author,
            is_published: true,
            is_approved: true,
            is_pinned: true,
            publish_time: Some(now),
            update_time: now,
            language,
            title: approval.title,
            content: approval.content,
        })
    }

    async fn tags_list(&self, language: Language) -> Result<Vec<TagView>, SqlStorageError> {
        let name = match language {
            Language::ZhTw => "活動",
            Language::EnUs => "event",
        };
        Ok(vec![TagView {
            id: 1,
            name: name.to_owned(),
        }])
    }

    async fn staff_mini_profile(
        &self,
        profile_id: i32,
        language: Language,
    ) -> Result<Option<MiniProfile>, SqlStorageError> {
        Ok(self
            .profiles
            .iter()
            .find(|(lang, profile)| *lang == language && profile.profile_id == profile_id)
            .map(|(_, profile)| profile.clone()))
    }

    async fn faculty_list(
        &self,
        _language: Language,
    ) -> Result<Vec<FacultyCard>, SqlStorageError> {
        Ok(self.faculty.clone())
    }

    async fn departments_list(
        &self,
        _language: Language,
    ) -> Result<Vec<DepartmentLabel>, SqlStorageError> {
        Err(SqlStorageError::Db("connection refused".to_owned()))
    }
}

/// Create the test app router with default test configuration.
pub fn create_test_app(sql_storage: MockSqlStorage) -> axum::Router {
    routes(sql_storage, Config::new_for_test())
}

#[allow(dead_code)]
pub fn sample_announcement(id: i32) -> AnnouncementView {
    AnnouncementView {
        id,
        title: format!("Announcement {id}"),
        content: "Details".to_owned(),
        update_time: Utc.with_ymd_and_hms(2018, 7, 2, 9, 0, 0).unwrap(),
        tags: vec![TagView {
            id: 1,
            name: "event".to_owned(),
        }],
        is_pinned: false,
    }
}
