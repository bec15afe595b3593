use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::features::files::handlers::{create_file, delete_file, get_file_by_slug, list_files};
use crate::features::files::services::FileService;

/// Create routes for the files feature
///
/// Note: reads are public and mutations carry the caller's `userId` in the body
pub fn routes(file_service: Arc<FileService>) -> Router {
    Router::new()
        .route("/api/files", get(list_files).post(create_file))
        .route("/api/files/{id}", delete(delete_file))
        .route("/api/files/slug/{slug}", get(get_file_by_slug))
        .with_state(file_service)
}
