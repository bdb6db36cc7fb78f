//! TOML configuration file for the bridge.
//!
//! The file is optional.  When `--config <path>` is given, every setting it
//! contains becomes the new default, and CLI flags or environment variables
//! still win over it.  Any field left out of the file keeps the built-in
//! default, so a one-line file is perfectly valid:
//!
//! ```toml
//! [bridge]
//! alphabet = "motion"     # or "color"
//! console = true
//! log_level = "info"
//!
//! [network]
//! listen_host = "0.0.0.0"
//! listen_port = 5005
//! actuator_host = "192.168.31.185"
//! actuator_port = 80
//! connect_timeout_ms = 3000
//! write_timeout_ms = 3000
//! max_datagram_len = 1024
//! ```

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use actuator_core::Alphabet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::config::{
    BridgeConfig, DEFAULT_ACTUATOR_IP, DEFAULT_ACTUATOR_PORT, DEFAULT_IO_TIMEOUT,
    DEFAULT_LISTEN_PORT, DEFAULT_MAX_DATAGRAM_LEN, MAX_DATAGRAM_LEN,
};

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A host setting is not an IP address.
    #[error("invalid {field} '{value}': expected an IPv4 or IPv6 address")]
    InvalidAddress { field: &'static str, value: String },

    /// The receive buffer is empty or larger than any UDP payload.
    #[error("invalid max_datagram_len {0}: expected 1 to 65535 bytes")]
    InvalidDatagramLen(usize),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level layout of the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BridgeFile {
    #[serde(default)]
    pub bridge: BridgeSection,
    #[serde(default)]
    pub network: NetworkSection,
}

/// Behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BridgeSection {
    #[serde(default)]
    pub alphabet: Alphabet,
    /// Whether the operator console reads stdin.
    #[serde(default = "default_true")]
    pub console: bool,
    /// `tracing` level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Addresses, ports and I/O bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkSection {
    #[serde(default = "default_listen_host")]
    pub listen_host: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
    #[serde(default = "default_actuator_host")]
    pub actuator_host: String,
    #[serde(default = "default_actuator_port")]
    pub actuator_port: u16,
    #[serde(default = "default_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_timeout_ms")]
    pub write_timeout_ms: u64,
    #[serde(default = "default_max_datagram_len")]
    pub max_datagram_len: usize,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_listen_host() -> String {
    "0.0.0.0".to_string()
}
fn default_listen_port() -> u16 {
    DEFAULT_LISTEN_PORT
}
fn default_actuator_host() -> String {
    IpAddr::from(DEFAULT_ACTUATOR_IP).to_string()
}
fn default_actuator_port() -> u16 {
    DEFAULT_ACTUATOR_PORT
}
fn default_timeout_ms() -> u64 {
    DEFAULT_IO_TIMEOUT.as_millis() as u64
}
fn default_max_datagram_len() -> usize {
    DEFAULT_MAX_DATAGRAM_LEN
}

impl Default for BridgeSection {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            console: default_true(),
            log_level: default_log_level(),
        }
    }
}

impl Default for NetworkSection {
    fn default() -> Self {
        Self {
            listen_host: default_listen_host(),
            listen_port: default_listen_port(),
            actuator_host: default_actuator_host(),
            actuator_port: default_actuator_port(),
            connect_timeout_ms: default_timeout_ms(),
            write_timeout_ms: default_timeout_ms(),
            max_datagram_len: default_max_datagram_len(),
        }
    }
}

impl BridgeFile {
    /// Resolves the file's settings into a runtime [`BridgeConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddress`] if a host is not an IP address
    /// and [`ConfigError::InvalidDatagramLen`] if the receive buffer size is
    /// outside `1..=65535`.
    pub fn to_bridge_config(&self) -> Result<BridgeConfig, ConfigError> {
        let net = &self.network;
        if !(1..=MAX_DATAGRAM_LEN).contains(&net.max_datagram_len) {
            return Err(ConfigError::InvalidDatagramLen(net.max_datagram_len));
        }
        Ok(BridgeConfig {
            alphabet: self.bridge.alphabet,
            listen_addr: socket_addr("listen_host", &net.listen_host, net.listen_port)?,
            actuator_addr: socket_addr("actuator_host", &net.actuator_host, net.actuator_port)?,
            connect_timeout: Duration::from_millis(net.connect_timeout_ms),
            write_timeout: Duration::from_millis(net.write_timeout_ms),
            max_datagram_len: net.max_datagram_len,
            console: self.bridge.console,
        })
    }
}

fn socket_addr(field: &'static str, host: &str, port: u16) -> Result<SocketAddr, ConfigError> {
    let ip: IpAddr = host.trim().parse().map_err(|_| ConfigError::InvalidAddress {
        field,
        value: host.to_string(),
    })?;
    Ok(SocketAddr::new(ip, port))
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Parses config TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed or a value has the
/// wrong type.
pub fn parse_config(content: &str) -> Result<BridgeFile, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Reads and parses the config file at `path`.
///
/// A missing file is an error here: the caller only asks for a file the
/// operator named explicitly.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if it is not valid.
pub fn load_config_file(path: &Path) -> Result<BridgeFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
