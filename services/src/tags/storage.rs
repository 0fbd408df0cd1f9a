use crate::announcements::TagView;
use campus_utils::Language;
use sqlx::postgres::PgConnection;

/// Every tag that has a display name in `language`, ordered by id.
pub async fn list(
    conn: &mut PgConnection,
    language: Language,
) -> Result<Vec<TagView>, sqlx::Error> {
    let rows = sqlx::query_as::<_, (i32, String)>(
        r#"
        SELECT t.tag_id, ti.name
        FROM tag t
        INNER JOIN tag_i18n ti ON ti.tag_id = t.tag_id AND ti.language = $1
        ORDER BY t.tag_id
        "#,
    )
    .bind(language.code())
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| TagView { id, name })
        .collect())
}
