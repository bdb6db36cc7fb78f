//! UDP command ingress.
//!
//! A game engine or simulation sends each command as a small UTF-8 datagram
//! (`"up"`, `"CCW"`, `"3"` …).  [`DatagramListener`] binds the configured port
//! and feeds every payload through [`dispatch`], one datagram at a time and in
//! arrival order.
//!
//! # Failure handling
//!
//! | Where                     | Effect                                      |
//! |---------------------------|---------------------------------------------|
//! | [`DatagramListener::bind`] | fatal: returned as [`ListenerError`]       |
//! | buffer size out of range  | fatal: rejected by `bind` before binding    |
//! | `recv_from`               | logged, short pause, loop continues         |
//! | UTF-8 decode              | logged, datagram dropped, loop continues    |
//! | actuator delivery         | logged by `dispatch`, loop continues        |
//!
//! Nothing is ever sent back to the datagram's source.
//!
//! # Lifetime
//!
//! [`DatagramListener::run`] never returns.  Run it in its own task; it stops
//! when that task is aborted or the process exits.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use actuator_core::{trim_token, Alphabet};
use thiserror::Error;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

use crate::application::dispatch::{dispatch, CommandSink, DispatchOutcome};
use crate::domain::config::MAX_DATAGRAM_LEN;

/// Pause after a receive error so a persistently failing socket does not spin.
const RECV_ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// Error type for the datagram listener.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The UDP socket could not be bound (port in use, address not local,
    /// insufficient permission).
    #[error("failed to bind datagram listener on {addr}: {source}")]
    BindFailed {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The receive buffer is empty or larger than any UDP payload.
    #[error("invalid datagram buffer length {len}: expected 1 to 65535 bytes")]
    InvalidBufferLen { len: usize },
}

/// A bound UDP socket ready to receive commands.
#[derive(Debug)]
pub struct DatagramListener {
    socket: UdpSocket,
    local_addr: SocketAddr,
    max_datagram_len: usize,
}

impl DatagramListener {
    /// Binds `addr`.  Datagrams longer than `max_datagram_len` bytes are
    /// truncated to that length.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::InvalidBufferLen`] if `max_datagram_len` is
    /// outside `1..=MAX_DATAGRAM_LEN`, and [`ListenerError::BindFailed`] if
    /// the socket cannot be bound.  Once bound, the listener reports nothing.
    pub async fn bind(addr: SocketAddr, max_datagram_len: usize) -> Result<Self, ListenerError> {
        if !(1..=MAX_DATAGRAM_LEN).contains(&max_datagram_len) {
            return Err(ListenerError::InvalidBufferLen {
                len: max_datagram_len,
            });
        }
        let bind_failed = |source| ListenerError::BindFailed { addr, source };
        let socket = UdpSocket::bind(addr).await.map_err(bind_failed)?;
        let local_addr = socket.local_addr().map_err(bind_failed)?;

        Ok(Self {
            socket,
            local_addr,
            max_datagram_len,
        })
    }

    /// The address actually bound.  Differs from the requested address when
    /// port 0 was requested.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Receives and dispatches datagrams forever.
    pub async fn run(self, alphabet: Alphabet, sink: Arc<dyn CommandSink>) {
        info!(
            "datagram listener accepting {alphabet} commands on UDP {}",
            self.local_addr
        );
        let mut buf = vec![0u8; self.max_datagram_len];

        loop {
            let (len, src) = match self.socket.recv_from(&mut buf).await {
                Ok(pair) => pair,
                Err(e) => {
                    warn!("datagram receive error: {e}");
                    tokio::time::sleep(RECV_ERROR_BACKOFF).await;
                    continue;
                }
            };

            handle_datagram(&buf[..len], src, alphabet, sink.as_ref()).await;
        }
    }
}

/// Decodes one datagram and dispatches it.
///
/// Returns `None` if the payload is not valid UTF-8, otherwise the dispatch
/// outcome.  The outcome is informational only: failures have already been
/// logged and the listener carries on regardless.
pub async fn handle_datagram(
    payload: &[u8],
    src: SocketAddr,
    alphabet: Alphabet,
    sink: &dyn CommandSink,
) -> Option<DispatchOutcome> {
    let text = match std::str::from_utf8(payload) {
        Ok(text) => trim_token(text),
        Err(e) => {
            warn!("dropping {}-byte datagram from {src}: {e}", payload.len());
            return None;
        }
    };

    debug!("received command {text:?} from {src}");
    let outcome = dispatch(alphabet, text, sink).await;
    match outcome.code() {
        Some(code) if outcome.is_sent() => debug!("datagram from {src} delivered as {code}"),
        Some(code) => debug!("datagram from {src} translated to {code} but not delivered"),
        None => {}
    }
    Some(outcome)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
