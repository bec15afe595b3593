use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// One uploaded note. Rows are never updated, only inserted and deleted.
#[derive(Debug, Clone, FromRow)]
pub struct FileRecord {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub semester: String,
    pub year: String,
    pub file_url: String,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
    /// Uploader identity as supplied by the client at creation
    pub user_id: String,
    pub slug: Option<String>,
}

/// Values for a row about to be inserted. `created_at` is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub semester: String,
    pub year: String,
    pub file_url: String,
    pub file_name: String,
    pub user_id: String,
    pub slug: Option<String>,
}
