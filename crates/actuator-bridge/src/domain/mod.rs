//! Domain layer for actuator-bridge.
//!
//! Holds the pure configuration value shared by every component.  Nothing in
//! here opens a socket, reads a file, or looks at the environment; the binary
//! and the storage adapter are responsible for filling it in.

pub mod config;

pub use config::BridgeConfig;
