//! Department announcements with per-language text and tags.

pub mod query;

use campus_utils::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of announcements on one listing page.
pub const ANNOUNCEMENTS_PER_PAGE: i64 = 6;

/// A 1-indexed listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    pub const FIRST: Self = Self(1);

    /// Returns `None` for page 0.
    pub fn new(page: u32) -> Option<Self> {
        (page >= 1).then_some(Self(page))
    }

    pub fn number(self) -> u32 {
        self.0
    }

    pub fn offset(self) -> i64 {
        (i64::from(self.0) - 1) * ANNOUNCEMENTS_PER_PAGE
    }

    pub fn limit(self) -> i64 {
        ANNOUNCEMENTS_PER_PAGE
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Filters for one listing request.
///
/// `update_time` must fall inside `[start_time, end_time]`, both ends inclusive.
/// A non-empty `tags` list keeps only announcements carrying every listed tag,
/// matched by the tag's display name in `language`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementQuery {
    tags: Vec<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub page: Page,
    pub language: Language,
}

impl AnnouncementQuery {
    pub fn new(
        tags: impl IntoIterator<Item = impl Into<String>>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        page: Page,
        language: Language,
    ) -> Self {
        let mut normalized: Vec<String> = Vec::new();
        for tag in tags {
            let tag: String = tag.into();
            let tag = tag.trim();
            if !tag.is_empty() && !normalized.iter().any(|seen| seen == tag) {
                normalized.push(tag.to_owned());
            }
        }

        Self {
            tags: normalized,
            start_time,
            end_time,
            page,
            language,
        }
    }

    /// Requested tag names, trimmed and without duplicates.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagView {
    pub id: i32,
    pub name: String,
}

/// Listing entry localized to a single language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementView {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub update_time: DateTime<Utc>,
    pub tags: Vec<TagView>,
    pub is_pinned: bool,
}

/// Values written when an announcement is approved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnnouncementApproval {
    pub author: String,
    pub title: String,
    pub content: String,
}

/// An announcement together with one of its localizations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementRecord {
    pub id: i32,
    pub author: String,
    pub is_published: bool,
    pub is_approved: bool,
    pub is_pinned: bool,
    pub publish_time: Option<DateTime<Utc>>,
    pub update_time: DateTime<Utc>,
    pub language: Language,
    pub title: String,
    pub content: String,
}
