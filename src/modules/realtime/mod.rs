//! Real-time fan-out
//!
//! Best-effort broadcast to every connected client. Events published while a
//! client is disconnected are never replayed to it.

mod broadcaster;

pub use broadcaster::{Broadcaster, Subscription};
