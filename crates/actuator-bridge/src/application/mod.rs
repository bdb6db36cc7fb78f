//! Application layer for actuator-bridge.
//!
//! The application layer decides *what* happens to a command; the
//! infrastructure layer decides *how* bytes move.
//!
//! # Responsibilities
//!
//! - Translating raw tokens and forwarding them to a [`CommandSink`]
//! - Absorbing delivery failures so ingress loops keep running
//! - Driving the operator console
//!
//! # What does NOT belong here?
//!
//! - Binding sockets or opening TCP connections (that is infrastructure)
//! - Reading the process's real stdin (main.rs wires that in)

pub mod console;
pub mod dispatch;

pub use console::{run_console, ConsoleSummary, EXIT_KEYWORD};
pub use dispatch::{dispatch, CommandSink, DispatchOutcome, SendError};
