//! Staff profiles.

use campus_utils::Language;
use campus_utils::profile::MiniProfile;
use sqlx::FromRow;
use sqlx::postgres::PgConnection;

#[derive(Debug, FromRow)]
struct MiniProfileRow {
    profile_id: i32,
    name: String,
    job_title: String,
    email: String,
    photo_url: Option<String>,
}

impl From<MiniProfileRow> for MiniProfile {
    fn from(row: MiniProfileRow) -> Self {
        Self {
            profile_id: row.profile_id,
            name: row.name,
            job_title: row.job_title,
            email: row.email,
            photo_url: row.photo_url,
        }
    }
}

/// Looks up a profile with its `language` text; `None` when either is missing.
pub async fn mini_profile(
    conn: &mut PgConnection,
    profile_id: i32,
    language: Language,
) -> Result<Option<MiniProfile>, sqlx::Error> {
    let row = sqlx::query_as::<_, MiniProfileRow>(
        r#"
        SELECT s.profile_id, si.name, si.job_title, s.email, s.photo_url
        FROM staff s
        INNER JOIN staff_i18n si ON si.profile_id = s.profile_id AND si.language = $2
        WHERE s.profile_id = $1
        "#,
    )
    .bind(profile_id)
    .bind(language.code())
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(MiniProfile::from))
}
