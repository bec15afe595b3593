use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::core::extractor::AppJson;
use crate::features::files::dtos::{
    CreateFileDto, DeleteFileDto, DeleteFileResponseDto, FileResponseDto, ListFilesQuery,
};
use crate::features::files::services::FileService;
use crate::shared::types::ApiResponse;

/// List notes
///
/// Returns every note, newest first, or only the notes uploaded by `userId`.
/// The body is a bare array.
#[utoipa::path(
    get,
    path = "/api/files",
    tag = "files",
    params(ListFilesQuery),
    responses(
        (status = 200, description = "Notes, newest first", body = Vec<FileResponseDto>),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn list_files(
    State(service): State<Arc<FileService>>,
    Query(query): Query<ListFilesQuery>,
) -> Result<Json<Vec<FileResponseDto>>, AppError> {
    let files = service.list(query.owner_filter()).await?;
    Ok(Json(files))
}

/// Register an uploaded note
///
/// The file must already be stored with the upload provider; the body carries
/// its URL and classification.
#[utoipa::path(
    post,
    path = "/api/files",
    tag = "files",
    request_body = CreateFileDto,
    responses(
        (status = 201, description = "Note created", body = FileResponseDto),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn create_file(
    State(service): State<Arc<FileService>>,
    AppJson(dto): AppJson<CreateFileDto>,
) -> Result<(StatusCode, Json<FileResponseDto>), AppError> {
    let input = dto.into_input()?;
    let file = service.create(input).await?;

    Ok((StatusCode::CREATED, Json(file)))
}

/// Delete a note
///
/// Only the uploader can delete it. The uploader is identified by the
/// `userId` in the body, which is not verified against the auth provider.
#[utoipa::path(
    delete,
    path = "/api/files/{id}",
    tag = "files",
    params(
        ("id" = String, Path, description = "Note id")
    ),
    request_body = DeleteFileDto,
    responses(
        (status = 200, description = "Note deleted", body = ApiResponse<DeleteFileResponseDto>),
        (status = 400, description = "Missing userId"),
        (status = 403, description = "Caller is not the uploader"),
        (status = 404, description = "Note not found"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn delete_file(
    State(service): State<Arc<FileService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<DeleteFileDto>,
) -> Result<Json<ApiResponse<DeleteFileResponseDto>>, AppError> {
    let user_id = dto.into_user_id()?;
    let id = service.delete(&id, &user_id).await?;

    Ok(Json(ApiResponse::success(
        Some(DeleteFileResponseDto { id, deleted: true }),
        Some("File deleted successfully".to_string()),
    )))
}

/// Get a note by slug
#[utoipa::path(
    get,
    path = "/api/files/slug/{slug}",
    tag = "files",
    params(
        ("slug" = String, Path, description = "Canonical note slug")
    ),
    responses(
        (status = 200, description = "Note found", body = FileResponseDto),
        (status = 404, description = "Note not found")
    )
)]
pub async fn get_file_by_slug(
    State(service): State<Arc<FileService>>,
    Path(slug): Path<String>,
) -> Result<Json<FileResponseDto>, AppError> {
    let file = service.get_by_slug(&slug).await?;
    Ok(Json(file))
}
