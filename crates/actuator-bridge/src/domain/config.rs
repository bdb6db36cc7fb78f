//! Bridge configuration types.
//!
//! [`BridgeConfig`] is the single source of truth for all runtime settings.
//! It is built once at startup from CLI arguments, environment variables and
//! an optional config file, then handed by value (or behind an `Arc`) to the
//! listener, the sender and the console.  There is no global state and no
//! reload: tests simply construct a config pointing at loopback sockets.

use std::net::SocketAddr;
use std::time::Duration;

use actuator_core::Alphabet;

/// Default UDP port for inbound command datagrams.
pub const DEFAULT_LISTEN_PORT: u16 = 5005;

/// Default TCP port of the actuator controller.
pub const DEFAULT_ACTUATOR_PORT: u16 = 80;

/// Default actuator IP address, the controller on the original bench setup.
pub const DEFAULT_ACTUATOR_IP: [u8; 4] = [192, 168, 31, 185];

/// Default receive buffer size.  Longer datagrams are truncated by the OS.
pub const DEFAULT_MAX_DATAGRAM_LEN: usize = 1024;

/// Largest payload a UDP datagram can carry, and so the largest useful
/// receive buffer.
pub const MAX_DATAGRAM_LEN: usize = 65_535;

/// Default bound on both the TCP connect and the frame write.
pub const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(3);

/// All runtime configuration for one bridge instance.
///
/// # Example
///
/// ```rust
/// use actuator_bridge::domain::BridgeConfig;
///
/// let cfg = BridgeConfig::default();
/// assert_eq!(cfg.listen_addr.port(), 5005);
/// assert!(cfg.listener_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Which command vocabulary this instance accepts.
    pub alphabet: Alphabet,

    /// Local address the UDP listener binds to.
    ///
    /// `0.0.0.0` accepts datagrams on every interface.
    pub listen_addr: SocketAddr,

    /// TCP address of the actuator controller.
    pub actuator_addr: SocketAddr,

    /// Upper bound on establishing the per-command TCP connection.
    ///
    /// Bounds how long one unreachable actuator can hold up the listener
    /// loop, which otherwise waits out the OS connect timeout per command.
    pub connect_timeout: Duration,

    /// Upper bound on writing the frame once connected.
    pub write_timeout: Duration,

    /// Size of the datagram receive buffer in bytes, `1..=MAX_DATAGRAM_LEN`.
    pub max_datagram_len: usize,

    /// Whether the operator console reads commands from stdin.
    pub console: bool,
}

impl BridgeConfig {
    /// Returns `true` when this instance should run the UDP listener.
    ///
    /// Only the motion bridge has datagram ingress; the color bridge is driven
    /// from the console alone.
    pub fn listener_enabled(&self) -> bool {
        self.alphabet == Alphabet::Motion
    }
}

impl Default for BridgeConfig {
    /// | Field            | Default               |
    /// |------------------|-----------------------|
    /// | alphabet         | motion                |
    /// | listen_addr      | `0.0.0.0:5005`        |
    /// | actuator_addr    | `192.168.31.185:80`   |
    /// | connect_timeout  | 3 seconds             |
    /// | write_timeout    | 3 seconds             |
    /// | max_datagram_len | 1024                  |
    /// | console          | enabled               |
    fn default() -> Self {
        Self {
            alphabet: Alphabet::Motion,
            listen_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_LISTEN_PORT)),
            actuator_addr: SocketAddr::from((DEFAULT_ACTUATOR_IP, DEFAULT_ACTUATOR_PORT)),
            connect_timeout: DEFAULT_IO_TIMEOUT,
            write_timeout: DEFAULT_IO_TIMEOUT,
            max_datagram_len: DEFAULT_MAX_DATAGRAM_LEN,
            console: true,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
