use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::files::dtos::{CreateFileInput, FileResponseDto, FilesUpdatedEvent};
use crate::features::files::models::NewFileRecord;
use crate::features::files::ownership::{ensure_owner, ClaimedIdentity};
use crate::features::files::repositories::FileRepository;
use crate::modules::realtime::Broadcaster;
use crate::shared::validation::{slugify, SLUG_REGEX};

/// Service for note metadata
pub struct FileService {
    repository: Arc<dyn FileRepository>,
    events: Arc<Broadcaster<FilesUpdatedEvent>>,
}

impl FileService {
    pub fn new(
        repository: Arc<dyn FileRepository>,
        events: Arc<Broadcaster<FilesUpdatedEvent>>,
    ) -> Self {
        Self { repository, events }
    }

    /// Build the canonical slug for a new note: `<title words>-<id hex>`.
    /// The full id keeps slugs unique whenever ids are.
    pub fn slug_for(title: &str, id: Uuid) -> String {
        format!("{}-{}", slugify(title), id.simple())
    }

    /// List all notes, or only those uploaded by `user_id`, newest first
    pub async fn list(&self, user_id: Option<&str>) -> Result<Vec<FileResponseDto>> {
        let files = self.repository.list(user_id).await?;
        debug!("Listed {} files (owner filter: {:?})", files.len(), user_id);

        Ok(files.into_iter().map(FileResponseDto::from).collect())
    }

    /// Persist metadata for an uploaded note and notify realtime clients
    pub async fn create(&self, input: CreateFileInput) -> Result<FileResponseDto> {
        let id = Uuid::new_v4();
        let slug = Self::slug_for(&input.title, id);

        let file = self
            .repository
            .insert(NewFileRecord {
                id,
                title: input.title,
                subject: input.subject,
                semester: input.semester,
                year: input.year,
                file_url: input.file_url,
                file_name: input.file_name,
                user_id: input.user_id,
                slug: Some(slug),
            })
            .await?;

        info!(
            "File metadata saved: id={}, user_id={}, slug={:?}",
            file.id, file.user_id, file.slug
        );

        let response = FileResponseDto::from(file);
        let reached = self.events.publish(FilesUpdatedEvent::Upload {
            file: response.clone(),
        });
        debug!("Upload event for {} sent to {} clients", response.id, reached);

        Ok(response)
    }

    /// Delete a note on behalf of `user_id`, who must be its uploader.
    ///
    /// A malformed id cannot name a record and is reported as not found. If a
    /// concurrent delete removes the row between the ownership read and the
    /// delete, this call also reports not found.
    pub async fn delete(&self, id: &str, user_id: &str) -> Result<Uuid> {
        let not_found = || AppError::NotFound("File not found".to_string());

        let id = Uuid::parse_str(id).map_err(|_| not_found())?;
        let file = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)?;

        ensure_owner(&file, ClaimedIdentity::from_request_body(user_id))?;

        if !self.repository.delete(id).await? {
            return Err(not_found());
        }

        info!("File deleted: id={}, user_id={}", id, user_id);

        let reached = self.events.publish(FilesUpdatedEvent::Delete { id });
        debug!("Delete event for {} sent to {} clients", id, reached);

        Ok(id)
    }

    /// Get a note by its canonical slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<FileResponseDto> {
        let not_found = || AppError::NotFound(format!("Note '{}' not found", slug));

        if !SLUG_REGEX.is_match(slug) {
            return Err(not_found());
        }

        self.repository
            .find_by_slug(slug)
            .await?
            .map(FileResponseDto::from)
            .ok_or_else(not_found)
    }
}
