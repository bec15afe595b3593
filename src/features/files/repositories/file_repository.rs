use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::files::models::{FileRecord, NewFileRecord};

/// Access to the `files` table.
///
/// Every method is a single statement against the store; callers compose them
/// and rely on per-row atomicity only.
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// All records, or only those owned by `user_id`, newest first
    async fn list(&self, user_id: Option<&str>) -> Result<Vec<FileRecord>>;

    /// Insert a record and return it with the store-assigned `created_at`
    async fn insert(&self, record: NewFileRecord) -> Result<FileRecord>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FileRecord>>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<FileRecord>>;

    /// Remove a record. Returns `false` if no row had that id.
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Current time according to the store, used as a liveness probe
    async fn server_time(&self) -> Result<DateTime<Utc>>;
}
