use serde::{Deserialize, Serialize};

/// Compact staff profile returned by `GET /api/staff/miniProfile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniProfile {
    pub profile_id: i32,
    pub name: String,
    pub job_title: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}
