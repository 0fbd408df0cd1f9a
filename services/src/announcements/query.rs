//! SQL for listing and approving announcements.
//!
//! Tag filtering runs in two phases. The first phase selects the ids of
//! announcements whose tags cover every requested name (group by id, keep
//! groups whose distinct matching names count equals the number of requested
//! names). The second phase hydrates one page of exactly those ids. Paginating
//! the joined rows directly would count an announcement once per matching tag.
//!
//! Localized rows are joined with the language in the join condition, so an
//! announcement or tag without text in the requested language is left out.

use super::{
    AnnouncementApproval, AnnouncementQuery, AnnouncementRecord, AnnouncementView, Page, TagView,
};
use crate::database::SqlStorageError;
use campus_utils::Language;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnection, Postgres};
use sqlx::{Connection, FromRow, QueryBuilder};
use std::collections::HashMap;

const MATCHING_IDS_SQL: &str = r#"
    SELECT a.announcement_id
    FROM announcement a
    INNER JOIN announcement_tag atag ON atag.announcement_id = a.announcement_id
    INNER JOIN tag_i18n ti ON ti.tag_id = atag.tag_id AND ti.language = $1
    WHERE ti.name = ANY($2)
      AND a.update_time BETWEEN $3 AND $4
      AND a.is_published
      AND a.is_approved
    GROUP BY a.announcement_id
    HAVING COUNT(DISTINCT ti.name) = $5
    ORDER BY a.announcement_id
"#;

const TAGS_FOR_ANNOUNCEMENTS_SQL: &str = r#"
    SELECT atag.announcement_id, atag.tag_id, ti.name
    FROM announcement_tag atag
    INNER JOIN tag_i18n ti ON ti.tag_id = atag.tag_id AND ti.language = $1
    WHERE atag.announcement_id = ANY($2)
    ORDER BY atag.announcement_id, atag.tag_id
"#;

/// Which announcements a page is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Scope {
    /// Published, approved and updated inside the window.
    Window {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Exactly these ids, already filtered by the first phase.
    Ids(Vec<i32>),
}

#[derive(Debug, FromRow)]
struct AnnouncementRow {
    announcement_id: i32,
    is_pinned: bool,
    update_time: DateTime<Utc>,
    title: String,
    content: String,
}

#[derive(Debug, FromRow)]
struct AnnouncementTagRow {
    announcement_id: i32,
    tag_id: i32,
    name: String,
}

#[derive(Debug, FromRow)]
struct ApprovedRow {
    announcement_id: i32,
    author: String,
    is_published: bool,
    is_approved: bool,
    is_pinned: bool,
    publish_time: Option<DateTime<Utc>>,
    update_time: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct LocalizedTextRow {
    title: String,
    content: String,
}

pub(crate) fn page_query(
    language: Language,
    scope: &Scope,
    page: Page,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT a.announcement_id, a.is_pinned, a.update_time, ai.title, ai.content \
         FROM announcement a \
         INNER JOIN announcement_i18n ai \
         ON ai.announcement_id = a.announcement_id AND ai.language = ",
    );
    builder.push_bind(language.code());

    match scope {
        Scope::Window { start, end } => {
            builder
                .push(" WHERE a.update_time BETWEEN ")
                .push_bind(*start)
                .push(" AND ")
                .push_bind(*end)
                .push(" AND a.is_published AND a.is_approved");
        }
        Scope::Ids(ids) => {
            builder
                .push(" WHERE a.announcement_id = ANY(")
                .push_bind(ids.clone())
                .push(")");
        }
    }

    builder
        .push(" ORDER BY a.announcement_id OFFSET ")
        .push_bind(page.offset())
        .push(" LIMIT ")
        .push_bind(page.limit());

    builder
}

/// First phase of a tag-filtered listing.
async fn matching_ids(
    conn: &mut PgConnection,
    query: &AnnouncementQuery,
) -> Result<Vec<i32>, sqlx::Error> {
    let required = i64::try_from(query.tags().len()).unwrap_or(i64::MAX);

    sqlx::query_scalar::<_, i32>(MATCHING_IDS_SQL)
        .bind(query.language.code())
        .bind(query.tags().to_vec())
        .bind(query.start_time)
        .bind(query.end_time)
        .bind(required)
        .fetch_all(&mut *conn)
        .await
}

async fn tags_for(
    conn: &mut PgConnection,
    language: Language,
    announcement_ids: Vec<i32>,
) -> Result<HashMap<i32, Vec<TagView>>, sqlx::Error> {
    let rows = sqlx::query_as::<_, AnnouncementTagRow>(TAGS_FOR_ANNOUNCEMENTS_SQL)
        .bind(language.code())
        .bind(announcement_ids)
        .fetch_all(&mut *conn)
        .await?;

    let mut tags: HashMap<i32, Vec<TagView>> = HashMap::new();
    for row in rows {
        tags.entry(row.announcement_id).or_default().push(TagView {
            id: row.tag_id,
            name: row.name,
        });
    }
    Ok(tags)
}

pub async fn list(
    conn: &mut PgConnection,
    query: &AnnouncementQuery,
) -> Result<Vec<AnnouncementView>, sqlx::Error> {
    let scope = if query.tags().is_empty() {
        Scope::Window {
            start: query.start_time,
            end: query.end_time,
        }
    } else {
        let ids = matching_ids(conn, query).await?;
        tracing::debug!(
            tags = ?query.tags(),
            matched = ids.len(),
            "Resolved tag filter"
        );
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Scope::Ids(ids)
    };

    let rows = page_query(query.language, &scope, query.page)
        .build_query_as::<AnnouncementRow>()
        .fetch_all(&mut *conn)
        .await?;

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids = rows.iter().map(|row| row.announcement_id).collect();
    let mut tags = tags_for(conn, query.language, ids).await?;

    Ok(rows
        .into_iter()
        .map(|row| AnnouncementView {
            id: row.announcement_id,
            title: row.title,
            content: row.content,
            update_time: row.update_time,
            tags: tags.remove(&row.announcement_id).unwrap_or_default(),
            is_pinned: row.is_pinned,
        })
        .collect())
}

/// Publishes, approves and pins an announcement and rewrites its `language` text.
///
/// Both updates share one transaction.
pub async fn approve(
    conn: &mut PgConnection,
    announcement_id: i32,
    language: Language,
    approval: &AnnouncementApproval,
) -> Result<AnnouncementRecord, SqlStorageError> {
    let mut tx = conn.begin().await?;

    let exists = sqlx::query_scalar::<_, i32>(
        "SELECT announcement_id FROM announcement WHERE announcement_id = $1 FOR UPDATE",
    )
    .bind(announcement_id)
    .fetch_optional(&mut *tx)
    .await?;
    if exists.is_none() {
        return Err(SqlStorageError::NotFound(format!(
            "announcement {announcement_id}"
        )));
    }

    let localized = sqlx::query_scalar::<_, i32>(
        "SELECT announcement_id FROM announcement_i18n \
         WHERE announcement_id = $1 AND language = $2 FOR UPDATE",
    )
    .bind(announcement_id)
    .bind(language.code())
    .fetch_optional(&mut *tx)
    .await?;
    if localized.is_none() {
        return Err(SqlStorageError::NotFound(format!(
            "announcement {announcement_id} has no {language} localization"
        )));
    }

    let approved = sqlx::query_as::<_, ApprovedRow>(
        r#"
        UPDATE announcement
        SET publish_time = $2,
            author = $3,
            is_pinned = TRUE,
            is_published = TRUE,
            is_approved = TRUE
        WHERE announcement_id = $1
        RETURNING announcement_id, author, is_published, is_approved, is_pinned,
                  publish_time, update_time
        "#,
    )
    .bind(announcement_id)
    .bind(Utc::now())
    .bind(&approval.author)
    .fetch_one(&mut *tx)
    .await?;

    let text = sqlx::query_as::<_, LocalizedTextRow>(
        r#"
        UPDATE announcement_i18n
        SET title = $3, content = $4
        WHERE announcement_id = $1 AND language = $2
        RETURNING title, content
        "#,
    )
    .bind(announcement_id)
    .bind(language.code())
    .bind(&approval.title)
    .bind(&approval.content)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(announcement_id, %language, "Announcement approved");

    Ok(AnnouncementRecord {
        id: approved.announcement_id,
        author: approved.author,
        is_published: approved.is_published,
        is_approved: approved.is_approved,
        is_pinned: approved.is_pinned,
        publish_time: approved.publish_time,
        update_time: approved.update_time,
        language,
        title: text.title,
        content: text.content,
    })
}
