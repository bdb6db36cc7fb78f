//! TCP delivery of single command frames to the actuator.
//!
//! The actuator firmware accepts a connection, reads one line, acts on it and
//! goes back to accepting.  [`ActuatorClient`] matches that model: every
//! [`send`](CommandSink::send) opens a brand new [`TcpStream`], writes
//! `<code>\n`, and closes it.  Nothing is pooled, nothing is read back, and
//! nothing is retried.
//!
//! Because each call owns its own stream, the listener task and the console
//! can share one client behind an `Arc` without any locking.

use std::net::SocketAddr;
use std::time::Duration;

use actuator_core::{encode_frame, Code};
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use crate::application::dispatch::{CommandSink, SendError};
use crate::domain::BridgeConfig;

/// Sends command frames to one fixed actuator endpoint.
#[derive(Debug, Clone)]
pub struct ActuatorClient {
    addr: SocketAddr,
    connect_timeout: Duration,
    write_timeout: Duration,
}

impl ActuatorClient {
    /// Creates a client for `addr` with explicit I/O bounds.
    pub fn new(addr: SocketAddr, connect_timeout: Duration, write_timeout: Duration) -> Self {
        Self {
            addr,
            connect_timeout,
            write_timeout,
        }
    }

    /// Creates a client from the actuator settings in `config`.
    pub fn from_config(config: &BridgeConfig) -> Self {
        Self::new(
            config.actuator_addr,
            config.connect_timeout,
            config.write_timeout,
        )
    }

    /// The endpoint every frame is sent to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    async fn connect(&self) -> Result<TcpStream, SendError> {
        match timeout(self.connect_timeout, TcpStream::connect(self.addr)).await {
            Ok(Ok(stream)) => Ok(stream),
            Ok(Err(source)) => Err(SendError::Connect {
                addr: self.addr,
                source,
            }),
            Err(_) => Err(SendError::ConnectTimeout {
                addr: self.addr,
                timeout: self.connect_timeout,
            }),
        }
    }
}

#[async_trait]
impl CommandSink for ActuatorClient {
    async fn send(&self, code: Code) -> Result<(), SendError> {
        debug!("connecting to actuator at {}", self.addr);
        let mut stream = self.connect().await?;

        debug!("sending command {code}");
        let frame = encode_frame(code);
        match timeout(self.write_timeout, stream.write_all(&frame)).await {
            Ok(Ok(())) => {}
            Ok(Err(source)) => {
                return Err(SendError::Write {
                    addr: self.addr,
                    source,
                })
            }
            Err(_) => {
                return Err(SendError::WriteTimeout {
                    addr: self.addr,
                    timeout: self.write_timeout,
                })
            }
        }

        // The frame is already in the kernel's send buffer; a failed FIN does
        // not un-send it.  The stream is closed when it is dropped either way.
        if let Err(e) = stream.shutdown().await {
            debug!("shutdown after sending {code} failed: {e}");
        }

        debug!("command {code} sent to {}", self.addr);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
