use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::features::files::dtos::FilesUpdatedEvent;
use crate::features::realtime::dtos::RealtimeMessage;
use crate::modules::realtime::Broadcaster;

/// Upgrade to a WebSocket that receives a `files_updated` frame after every
/// create or delete. Anything the client sends is ignored.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(events): State<Arc<Broadcaster<FilesUpdatedEvent>>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, events))
}

async fn handle_socket(socket: WebSocket, events: Arc<Broadcaster<FilesUpdatedEvent>>) {
    let mut subscription = events.subscribe();
    info!(
        "Realtime client connected ({} online)",
        subscription.live_at_connect()
    );

    let (mut sender, mut receiver) = socket.split();

    loop {
        tokio::select! {
            event = subscription.next() => {
                let Some(event) = event else { break };
                match RealtimeMessage::from(event).to_json() {
                    Ok(json) => {
                        if sender.send(Message::Text(json.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => warn!("Failed to serialize realtime message: {e}"),
                }
            }
            incoming = receiver.next() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => debug!("Ignoring realtime client message"),
                }
            }
        }
    }

    drop(subscription);
    info!(
        "Realtime client disconnected ({} online)",
        events.connected()
    );
}
