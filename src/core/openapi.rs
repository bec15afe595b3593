use utoipa::{Modify, OpenApi};

use crate::features::files::{dtos as files_dtos, handlers as files_handlers};
use crate::features::health::{dtos as health_dtos, handlers as health_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Files
        files_handlers::list_files,
        files_handlers::create_file,
        files_handlers::delete_file,
        files_handlers::get_file_by_slug,
        // Health
        health_handlers::health_check,
    ),
    components(
        schemas(
            // Files
            files_dtos::CreateFileDto,
            files_dtos::DeleteFileDto,
            files_dtos::FileResponseDto,
            files_dtos::DeleteFileResponseDto,
            ApiResponse<files_dtos::DeleteFileResponseDto>,
            // Health
            health_dtos::HealthResponseDto,
            health_dtos::HealthErrorDto,
        )
    ),
    tags(
        (name = "files", description = "Shared study notes metadata"),
        (name = "health", description = "Liveness probe"),
    ),
    info(
        title = "Agri Notes API",
        version = "0.1.0",
        description = "Shared study notes for agriculture students",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/api/files",
            "/api/files/{id}",
            "/api/files/slug/{slug}",
            "/api/health",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Notes".to_string(),
            version: "9.9.9".to_string(),
            description: "Custom".to_string(),
        }
        .modify(&mut doc);
        assert_eq!(doc.info.title, "Notes");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Custom"));
    }
}
