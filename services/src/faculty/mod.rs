//! Faculty directory: members, their departments and research groups.
//!
//! Cards returned here are what the directory page renders and filters on
//! the client (department codes and one-character research-group codes).

use campus_utils::Language;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::postgres::PgConnection;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DepartmentLabel {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyCard {
    pub faculty_id: i32,
    pub name: String,
    pub email: String,
    /// One character per research group.
    pub research_group: String,
    pub departments: Vec<DepartmentLabel>,
}

#[derive(Debug, FromRow)]
struct FacultyRow {
    faculty_id: i32,
    name: String,
    email: String,
    research_group: String,
}

#[derive(Debug, FromRow)]
struct FacultyDepartmentRow {
    faculty_id: i32,
    code: String,
    name: String,
}

pub async fn list(
    conn: &mut PgConnection,
    language: Language,
) -> Result<Vec<FacultyCard>, sqlx::Error> {
    let rows = sqlx::query_as::<_, FacultyRow>(
        r#"
        SELECT f.faculty_id, fi.name, f.email, f.research_group
        FROM faculty f
        INNER JOIN faculty_i18n fi ON fi.faculty_id = f.faculty_id AND fi.language = $1
        ORDER BY f.faculty_id
        "#,
    )
    .bind(language.code())
    .fetch_all(&mut *conn)
    .await?;

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = rows.iter().map(|row| row.faculty_id).collect();
    let memberships = sqlx::query_as::<_, FacultyDepartmentRow>(
        r#"
        SELECT fd.faculty_id, d.code, di.name
        FROM faculty_department fd
        INNER JOIN department d ON d.department_id = fd.department_id
        INNER JOIN department_i18n di
            ON di.department_id = d.department_id AND di.language = $1
        WHERE fd.faculty_id = ANY($2)
        ORDER BY fd.faculty_id, d.department_id
        "#,
    )
    .bind(language.code())
    .bind(ids)
    .fetch_all(&mut *conn)
    .await?;

    let mut departments: HashMap<i32, Vec<DepartmentLabel>> = HashMap::new();
    for row in memberships {
        departments
            .entry(row.faculty_id)
            .or_default()
            .push(DepartmentLabel {
                code: row.code,
                name: row.name,
            });
    }

    Ok(rows
        .into_iter()
        .map(|row| FacultyCard {
            departments: departments.remove(&row.faculty_id).unwrap_or_default(),
            faculty_id: row.faculty_id,
            name: row.name,
            email: row.email,
            research_group: row.research_group,
        })
        .collect())
}

/// Departments with a name in `language`, for the directory filter chips.
pub async fn departments(
    conn: &mut PgConnection,
    language: Language,
) -> Result<Vec<DepartmentLabel>, sqlx::Error> {
    sqlx::query_as::<_, DepartmentLabel>(
        r#"
        SELECT d.code, di.name
        FROM department d
        INNER JOIN department_i18n di
            ON di.department_id = d.department_id AND di.language = $1
        ORDER BY d.department_id
        "#,
    )
    .bind(language.code())
    .fetch_all(&mut *conn)
    .await
}
