use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::files::models::{FileRecord, NewFileRecord};
use crate::features::files::repositories::FileRepository;

/// Store double for tests. Rows are kept in insertion order.
#[derive(Default)]
pub struct InMemoryFileRepository {
    rows: Mutex<Vec<FileRecord>>,
    unavailable: AtomicBool,
    concurrent_delete: AtomicBool,
}

impl InMemoryFileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Let another request win every delete: the row disappears between the
    /// caller's lookup and its own delete, which then affects no rows
    pub fn set_concurrent_delete(&self, enabled: bool) {
        self.concurrent_delete.store(enabled, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn rows(&self) -> std::sync::MutexGuard<'_, Vec<FileRecord>> {
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl FileRepository for InMemoryFileRepository {
    async fn list(&self, user_id: Option<&str>) -> Result<Vec<FileRecord>> {
        self.check_available()?;
        let mut files: Vec<FileRecord> = self
            .rows()
            .iter()
            .rev()
            .filter(|f| user_id.map_or(true, |u| f.user_id == u))
            .cloned()
            .collect();
        // Stable, so equal timestamps keep newest-inserted first
        files.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(files)
    }

    async fn insert(&self, record: NewFileRecord) -> Result<FileRecord> {
        self.check_available()?;
        let mut rows = self.rows();

        if rows.iter().any(|f| f.id == record.id) {
            return Err(AppError::Database(sqlx::Error::Protocol(
                "duplicate key value violates unique constraint \"files_pkey\"".to_string(),
            )));
        }

        // Strictly increasing so ordering tests are deterministic
        let now = Utc::now();
        let created_at: DateTime<Utc> = match rows.last() {
            Some(last) if last.created_at >= now => last.created_at + Duration::microseconds(1),
            _ => now,
        };

        let file = FileRecord {
            id: record.id,
            title: record.title,
            subject: record.subject,
            semester: record.semester,
            year: record.year,
            file_url: record.file_url,
            file_name: record.file_name,
            created_at,
            user_id: record.user_id,
            slug: record.slug,
        };
        rows.push(file.clone());
        Ok(file)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FileRecord>> {
        self.check_available()?;
        Ok(self.rows().iter().find(|f| f.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<FileRecord>> {
        self.check_available()?;
        Ok(self
            .rows()
            .iter()
            .rev()
            .find(|f| f.slug.as_deref() == Some(slug))
            .cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        self.check_available()?;
        let mut rows = self.rows();
        let before = rows.len();
        rows.retain(|f| f.id != id);

        if self.concurrent_delete.load(Ordering::SeqCst) {
            return Ok(false);
        }
        Ok(rows.len() < before)
    }

    async fn server_time(&self) -> Result<DateTime<Utc>> {
        self.check_available()?;
        Ok(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_len_survives_poisoned_lock() {
        let repository = Arc::new(InMemoryFileRepository::new());
        repository.rows().push(FileRecord {
            id: Uuid::new_v4(),
            title: "Soil".to_string(),
            subject: "Agronomy".to_string(),
            semester: "1".to_string(),
            year: "1".to_string(),
            file_url: "https://x/soil.pdf".to_string(),
            file_name: "soil.pdf".to_string(),
            created_at: Utc::now(),
            user_id: "u1".to_string(),
            slug: None,
        });

        let poisoner = Arc::clone(&repository);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.rows.lock().unwrap();
            panic!("poison the rows lock");
        })
        .join();

        assert!(repository.rows.is_poisoned());
        assert_eq!(repository.len(), 1);
    }
}
