use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness response: the store answered with its current time
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponseDto {
    #[schema(example = "ok")]
    pub status: String,
    pub time: DateTime<Utc>,
}

/// Liveness failure with the store's error detail
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthErrorDto {
    #[schema(example = "error")]
    pub status: String,
    pub message: String,
}
