use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::files::FileRepository;

/// Round-trips to the metadata store for liveness probes
pub struct HealthService {
    store: Arc<dyn FileRepository>,
}

impl HealthService {
    pub fn new(store: Arc<dyn FileRepository>) -> Self {
        Self { store }
    }

    pub async fn store_time(&self) -> Result<DateTime<Utc>> {
        self.store.server_time().await
    }
}
