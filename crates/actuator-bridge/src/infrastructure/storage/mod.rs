//! Storage infrastructure: the optional TOML configuration file.
//!
//! Only settings live on disk.  Commands are never persisted.

pub mod config;
