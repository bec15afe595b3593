use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::files::dtos::FilesUpdatedEvent;
use crate::features::realtime::handlers::ws_handler;
use crate::modules::realtime::Broadcaster;

/// Create routes for the realtime feature
pub fn routes(events: Arc<Broadcaster<FilesUpdatedEvent>>) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .with_state(events)
}
