use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::broadcast;
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use tracing::warn;

/// Fire-and-forget fan-out of events to every live subscriber.
///
/// Owned by `main` and shared with the services that publish and the
/// WebSocket handler that subscribes.
pub struct Broadcaster<T> {
    tx: broadcast::Sender<T>,
    connected: Arc<AtomicUsize>,
}

impl<T> Broadcaster<T>
where
    T: Clone + Send + 'static,
{
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self {
            tx,
            connected: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Send `event` to everyone subscribed right now.
    ///
    /// Returns the number of subscribers reached; zero when nobody is listening.
    pub fn publish(&self, event: T) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Register a new connection. It receives only events published after this call.
    pub fn subscribe(&self) -> Subscription<T> {
        let live = self.connected.fetch_add(1, Ordering::Relaxed) + 1;
        Subscription {
            events: BroadcastStream::new(self.tx.subscribe()),
            connected: Arc::clone(&self.connected),
            live_at_connect: live,
        }
    }

    /// Number of subscriptions currently alive
    pub fn connected(&self) -> usize {
        self.connected.load(Ordering::Relaxed)
    }
}

/// One client's view of the broadcast. Dropping it unregisters the client.
pub struct Subscription<T> {
    events: BroadcastStream<T>,
    connected: Arc<AtomicUsize>,
    live_at_connect: usize,
}

impl<T> Subscription<T>
where
    T: Clone + Send + 'static,
{
    /// Next event, or `None` once the broadcaster is gone.
    ///
    /// A subscriber that falls more than the channel capacity behind loses the
    /// overflowed events and continues from the oldest one still buffered.
    pub async fn next(&mut self) -> Option<T> {
        loop {
            match self.events.next().await? {
                Ok(event) => return Some(event),
                Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                    warn!("Realtime subscriber lagged, {} events dropped", skipped);
                }
            }
        }
    }

    /// Live connection count observed when this subscription was created
    pub fn live_at_connect(&self) -> usize {
        self.live_at_connect
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.connected.fetch_sub(1, Ordering::Relaxed);
    }
}
