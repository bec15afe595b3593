//! Modules layer - Infrastructure components shared by features
//!
//! Contains the in-process fan-out used for real-time change notifications.

pub mod realtime;
