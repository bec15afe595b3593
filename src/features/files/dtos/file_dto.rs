use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::core::error::{AppError, Result};
use crate::features::files::models::FileRecord;

/// Query params for listing files
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListFilesQuery {
    /// Only return files uploaded by this user
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

impl ListFilesQuery {
    /// The owner filter, treating an empty `userId=` as absent
    pub fn owner_filter(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Request DTO for registering an uploaded note.
///
/// The file itself has already been stored by the upload provider; only its
/// URL and metadata arrive here.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileDto {
    #[schema(example = "Soil Mechanics")]
    #[validate(required(message = "title"), length(min = 1, message = "title"))]
    pub title: Option<String>,
    #[schema(example = "Agronomy")]
    #[validate(required(message = "subject"), length(min = 1, message = "subject"))]
    pub subject: Option<String>,
    #[schema(example = "3")]
    #[validate(required(message = "semester"), length(min = 1, message = "semester"))]
    pub semester: Option<String>,
    #[schema(example = "2")]
    #[validate(required(message = "year"), length(min = 1, message = "year"))]
    pub year: Option<String>,
    #[schema(example = "https://res.cloudinary.com/demo/raw/upload/soil.pdf")]
    #[validate(required(message = "fileUrl"), length(min = 1, message = "fileUrl"))]
    pub file_url: Option<String>,
    #[schema(example = "soil.pdf")]
    #[validate(required(message = "fileName"), length(min = 1, message = "fileName"))]
    pub file_name: Option<String>,
    #[schema(example = "user_2abc")]
    #[validate(required(message = "userId"), length(min = 1, message = "userId"))]
    pub user_id: Option<String>,
}

/// Create input with every field present and non-empty
#[derive(Debug, Clone)]
pub struct CreateFileInput {
    pub title: String,
    pub subject: String,
    pub semester: String,
    pub year: String,
    pub file_url: String,
    pub file_name: String,
    pub user_id: String,
}

impl CreateFileDto {
    /// Check required fields and unwrap them
    pub fn into_input(self) -> Result<CreateFileInput> {
        self.validate().map_err(|e| {
            AppError::Validation(missing_fields_message("Missing required fields", &e))
        })?;

        Ok(CreateFileInput {
            title: self.title.unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            semester: self.semester.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
            file_url: self.file_url.unwrap_or_default(),
            file_name: self.file_name.unwrap_or_default(),
            user_id: self.user_id.unwrap_or_default(),
        })
    }
}

/// Request DTO for deleting a file
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteFileDto {
    /// Identity of the caller; must match the uploader
    #[serde(rename = "userId")]
    #[schema(example = "user_2abc")]
    #[validate(required(message = "userId"), length(min = 1, message = "userId"))]
    pub user_id: Option<String>,
}

impl DeleteFileDto {
    pub fn into_user_id(self) -> Result<String> {
        self.validate().map_err(|_| {
            AppError::Validation("User ID required for deletion security".to_string())
        })?;
        Ok(self.user_id.unwrap_or_default())
    }
}

/// Response DTO for a file record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FileResponseDto {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub semester: String,
    pub year: String,
    pub file_url: String,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
    pub slug: Option<String>,
}

impl From<FileRecord> for FileResponseDto {
    fn from(f: FileRecord) -> Self {
        Self {
            id: f.id,
            title: f.title,
            subject: f.subject,
            semester: f.semester,
            year: f.year,
            file_url: f.file_url,
            file_name: f.file_name,
            created_at: f.created_at,
            user_id: f.user_id,
            slug: f.slug,
        }
    }
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteFileResponseDto {
    pub id: Uuid,
    pub deleted: bool,
}

/// Change notification pushed to realtime clients after a mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum FilesUpdatedEvent {
    Upload { file: FileResponseDto },
    Delete { id: Uuid },
}

/// "<prefix>: a, b" listing the offending fields by their wire names
fn missing_fields_message(prefix: &str, errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .values()
        .filter_map(|errs| errs.first())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .collect();
    fields.sort();
    fields.dedup();

    format!("{}: {}", prefix, fields.join(", "))
}
