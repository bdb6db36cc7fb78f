//! Infrastructure layer for actuator-bridge.
//!
//! Handles all I/O: the UDP socket commands arrive on, the short-lived TCP
//! connections frames leave on, and the config file.
//!
//! # What does NOT belong here?
//!
//! - Command translation or the drop/reject policy (application layer)
//! - CLI parsing (done in `main.rs`)

pub mod actuator_conn;
pub mod storage;
pub mod udp_listener;

pub use actuator_conn::ActuatorClient;
pub use udp_listener::{DatagramListener, ListenerError};
