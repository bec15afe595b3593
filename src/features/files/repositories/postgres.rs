use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::files::models::{FileRecord, NewFileRecord};
use crate::features::files::repositories::FileRepository;

const FILE_COLUMNS: &str =
    "id, title, subject, semester, year, file_url, file_name, created_at, user_id, slug";

/// `FileRepository` backed by the Postgres pool
pub struct PgFileRepository {
    pool: PgPool,
}

impl PgFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileRepository for PgFileRepository {
    async fn list(&self, user_id: Option<&str>) -> Result<Vec<FileRecord>> {
        let files = match user_id {
            Some(user_id) => {
                sqlx::query_as::<_, FileRecord>(&format!(
                    "SELECT {FILE_COLUMNS} FROM files WHERE user_id = $1 ORDER BY created_at DESC"
                ))
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, FileRecord>(&format!(
                    "SELECT {FILE_COLUMNS} FROM files ORDER BY created_at DESC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to list files: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(files)
    }

    async fn insert(&self, record: NewFileRecord) -> Result<FileRecord> {
        let file = sqlx::query_as::<_, FileRecord>(&format!(
            r#"
            INSERT INTO files (id, title, subject, semester, year, file_url, file_name, user_id, slug)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {FILE_COLUMNS}
            "#
        ))
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.subject)
        .bind(&record.semester)
        .bind(&record.year)
        .bind(&record.file_url)
        .bind(&record.file_name)
        .bind(&record.user_id)
        .bind(&record.slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save file metadata: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(file)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FileRecord>> {
        let file = sqlx::query_as::<_, FileRecord>(&format!(
            "SELECT {FILE_COLUMNS} FROM files WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(file)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<FileRecord>> {
        let file = sqlx::query_as::<_, FileRecord>(&format!(
            "SELECT {FILE_COLUMNS} FROM files WHERE slug = $1 ORDER BY created_at DESC LIMIT 1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(file)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete file {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn server_time(&self) -> Result<DateTime<Utc>> {
        let now = sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
            .fetch_one(&self.pool)
            .await?;

        Ok(now)
    }
}
