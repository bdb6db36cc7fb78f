//! Translate-then-send policy shared by every ingress path.
//!
//! Both the UDP listener and the operator console call [`dispatch`] with the
//! raw text they received.  It performs the whole pipeline for one command:
//!
//! ```text
//! raw token ──translate──► Code ──CommandSink::send──► actuator
//!              │                        │
//!              └─ color: Rejected        └─ failure: logged, Dropped
//! ```
//!
//! # Failure policy
//!
//! Delivery is best-effort.  A failed send is logged at `warn` and reported
//! back as [`DispatchOutcome::Dropped`]; it is never turned into an error that
//! could stop the caller's loop.  The next command simply opens a new
//! connection.

use std::net::SocketAddr;
use std::time::Duration;

use actuator_core::{trim_token, Alphabet, Code, CommandError};
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Reasons a single frame could not be delivered to the actuator.
#[derive(Debug, Error)]
pub enum SendError {
    /// The TCP connection was refused or otherwise failed.
    #[error("failed to connect to actuator at {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The TCP connection did not complete within the configured bound.
    #[error("timed out after {timeout:?} connecting to actuator at {addr}")]
    ConnectTimeout { addr: SocketAddr, timeout: Duration },

    /// The connection was established but the frame could not be written.
    #[error("failed to write frame to actuator at {addr}: {source}")]
    Write {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Writing the frame did not complete within the configured bound.
    #[error("timed out after {timeout:?} writing frame to actuator at {addr}")]
    WriteTimeout { addr: SocketAddr, timeout: Duration },
}

/// Destination for translated commands.
///
/// The production implementation is
/// [`ActuatorClient`](crate::infrastructure::actuator_conn::ActuatorClient),
/// which opens one TCP connection per call.  Tests substitute recording or
/// mock sinks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandSink: Send + Sync {
    /// Delivers exactly one code.  Each call is independent: no retry, no
    /// shared connection.
    async fn send(&self, code: Code) -> Result<(), SendError>;
}

/// What happened to one raw command.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The frame was written to the actuator.
    Sent(Code),
    /// The command translated but delivery failed.  The failure has already
    /// been logged.
    Dropped { code: Code, reason: SendError },
    /// The token is not part of the alphabet and nothing was sent.  Only the
    /// color alphabet produces this.
    Rejected(CommandError),
}

impl DispatchOutcome {
    /// The code that was (or would have been) sent, if translation succeeded.
    pub fn code(&self) -> Option<Code> {
        match self {
            DispatchOutcome::Sent(code) | DispatchOutcome::Dropped { code, .. } => Some(*code),
            DispatchOutcome::Rejected(_) => None,
        }
    }

    /// Returns `true` if the frame reached the actuator.
    pub fn is_sent(&self) -> bool {
        matches!(self, DispatchOutcome::Sent(_))
    }
}

/// Translates `raw` with `alphabet` and forwards the resulting code to `sink`.
///
/// This function never fails.  Delivery errors are logged and folded into
/// [`DispatchOutcome::Dropped`]; validation errors (color alphabet only)
/// become [`DispatchOutcome::Rejected`] without touching the sink.
pub async fn dispatch(alphabet: Alphabet, raw: &str, sink: &dyn CommandSink) -> DispatchOutcome {
    let code = match alphabet.translate(raw) {
        Ok(code) => code,
        Err(e) => {
            info!("rejected {alphabet} command: {e}");
            return DispatchOutcome::Rejected(e);
        }
    };

    debug!("translated {:?} → {code}", trim_token(raw));

    match sink.send(code).await {
        Ok(()) => DispatchOutcome::Sent(code),
        Err(reason) => {
            warn!("command {code} dropped: {reason}");
            DispatchOutcome::Dropped { code, reason }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn code(alphabet: Alphabet, byte: u8) -> Code {
        alphabet.code(byte).unwrap()
    }

    fn refused() -> SendError {
        SendError::Connect {
            addr: "127.0.0.1:9".parse().unwrap(),
            source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        }
    }

    #[tokio::test]
    async fn test_motion_up_sends_code_one() {
        // Arrange
        let mut sink = MockCommandSink::new();
        sink.expect_send()
            .with(eq(code(Alphabet::Motion, b'1')))
            .times(1)
            .returning(|_| Ok(()));

        // Act
        let outcome = dispatch(Alphabet::Motion, "up", &sink).await;

        // Assert
        assert!(outcome.is_sent());
        assert_eq!(outcome.code().map(Code::as_char), Some('1'));
    }

    #[tokio::test]
    async fn test_motion_unknown_sends_cancel() {
        let mut sink = MockCommandSink::new();
        sink.expect_send()
            .with(eq(code(Alphabet::Motion, b'0')))
            .times(1)
            .returning(|_| Ok(()));

        let outcome = dispatch(Alphabet::Motion, "spin", &sink).await;

        assert!(outcome.is_sent());
    }

    #[tokio::test]
    async fn test_send_failure_is_absorbed_as_dropped() {
        // Arrange: the sink always fails
        let mut sink = MockCommandSink::new();
        sink.expect_send().times(1).returning(|_| Err(refused()));

        // Act
        let outcome = dispatch(Alphabet::Motion, "ccw", &sink).await;

        // Assert: no panic, no error, the code is still reported
        match outcome {
            DispatchOutcome::Dropped { code, reason } => {
                assert_eq!(code.as_char(), '6');
                assert!(matches!(reason, SendError::Connect { .. }));
            }
            other => panic!("expected Dropped, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_color_valid_token_is_sent_uppercase() {
        let mut sink = MockCommandSink::new();
        sink.expect_send()
            .with(eq(code(Alphabet::Color, b'G')))
            .times(1)
            .returning(|_| Ok(()));

        let outcome = dispatch(Alphabet::Color, "g", &sink).await;

        assert!(outcome.is_sent());
    }

    #[tokio::test]
    async fn test_color_invalid_token_never_reaches_sink() {
        // Arrange: any call to send fails the test
        let mut sink = MockCommandSink::new();
        sink.expect_send().never();

        // Act
        let outcome = dispatch(Alphabet::Color, "X", &sink).await;

        // Assert
        assert!(matches!(
            outcome,
            DispatchOutcome::Rejected(CommandError::UnknownColor(_))
        ));
        assert!(outcome.code().is_none());
    }

    #[test]
    fn test_send_error_messages_name_the_endpoint() {
        let e = SendError::ConnectTimeout {
            addr: "10.0.0.9:80".parse().unwrap(),
            timeout: Duration::from_millis(250),
        };
        let msg = e.to_string();
        assert!(msg.contains("10.0.0.9:80"), "{msg}");
        assert!(msg.contains("250ms"), "{msg}");
    }
}
