//! actuator-bridge library crate.
//!
//! This crate relays short text commands to an actuator controller that speaks
//! a one-character-per-connection TCP protocol.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Game / simulation (UDP text)      Operator (stdin lines)
//!              ↓                              ↓
//! [actuator-bridge]
//!   ├── domain/           BridgeConfig (immutable, built once at startup)
//!   ├── application/
//!   │     ├── dispatch/   translate → send → absorb failures
//!   │     └── console/    line-oriented operator driver
//!   └── infrastructure/
//!         ├── udp_listener/  datagram receive loop
//!         ├── actuator_conn/ one TCP connection per command
//!         └── storage/       optional TOML config file
//!              ↓
//! Actuator controller  (`<code>\n` over TCP)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O and no async.
//! - `application` depends on `domain`, `actuator-core`, and the
//!   [`CommandSink`](application::CommandSink) trait only.  It is generic
//!   over its input and output streams so it can be tested from memory.
//! - `infrastructure` owns every socket and file.

/// Domain layer: runtime configuration (no I/O).
pub mod domain;

/// Application layer: dispatch policy and console driver.
pub mod application;

/// Infrastructure layer: UDP listener, actuator TCP client, config file.
pub mod infrastructure;
