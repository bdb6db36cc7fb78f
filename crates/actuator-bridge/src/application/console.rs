//! Line-oriented operator console.
//!
//! Reads one command per line and pushes it through [`dispatch`], exactly
//! like a datagram.  Typing `exit` (any case) ends the console only; a UDP
//! listener running next to it is unaffected.
//!
//! The driver is generic over its input and output streams so tests can feed
//! it from a byte slice and capture what the operator would have seen.

use actuator_core::{trim_token, Alphabet};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use super::dispatch::{dispatch, CommandSink, DispatchOutcome};

/// Input that ends the console loop (compared case-insensitively).
pub const EXIT_KEYWORD: &str = "exit";

/// Counters describing one console session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleSummary {
    /// Lines dispatched (the exit line is not counted).
    pub lines: usize,
    pub sent: usize,
    pub dropped: usize,
    pub rejected: usize,
    /// `true` if the operator typed the exit keyword, `false` on end of input.
    pub exited: bool,
}

/// Operator-facing text for one alphabet.
struct Texts {
    banner: &'static [&'static str],
    prompt: &'static str,
    farewell: &'static str,
}

fn texts(alphabet: Alphabet) -> Texts {
    match alphabet {
        Alphabet::Motion => Texts {
            banner: &[
                "Motion controller console. Enter a command to test motion functions.",
                "Commands: UP, RIGHT, LEFT, DOWN, CW, CCW (or numeric 1-6). Anything else stops motion. Type 'exit' to quit.",
            ],
            prompt: "Command: ",
            farewell: "Exiting motion controller console...",
        },
        Alphabet::Color => Texts {
            banner: &["Enter R, G, or B to set the LED color. Type 'exit' to quit."],
            prompt: "Command (R/G/B): ",
            farewell: "Exiting...",
        },
    }
}

/// Runs the console until the exit keyword or end of input.
///
/// # Errors
///
/// Returns an error only if reading `input` or writing `output` fails.
/// Command delivery failures are reported to the operator and counted, never
/// returned.
pub async fn run_console<R, W>(
    alphabet: Alphabet,
    mut input: R,
    mut output: W,
    sink: &dyn CommandSink,
) -> std::io::Result<ConsoleSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let texts = texts(alphabet);
    let mut summary = ConsoleSummary::default();

    for line in texts.banner {
        output.write_all(line.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }

    let mut line = String::new();
    loop {
        output.write_all(texts.prompt.as_bytes()).await?;
        output.flush().await?;

        line.clear();
        if input.read_line(&mut line).await? == 0 {
            debug!("console input closed");
            output.write_all(b"\n").await?;
            break;
        }

        if trim_token(&line).eq_ignore_ascii_case(EXIT_KEYWORD) {
            output.write_all(texts.farewell.as_bytes()).await?;
            output.write_all(b"\n").await?;
            summary.exited = true;
            break;
        }

        summary.lines += 1;
        match dispatch(alphabet, &line, sink).await {
            DispatchOutcome::Sent(_) => summary.sent += 1,
            DispatchOutcome::Dropped { code, reason } => {
                summary.dropped += 1;
                let msg = format!("Command {code} was not delivered: {reason}\n");
                output.write_all(msg.as_bytes()).await?;
            }
            DispatchOutcome::Rejected(_) => {
                summary.rejected += 1;
                output
                    .write_all(b"Invalid command. Please enter R, G, or B.\n")
                    .await?;
            }
        }
    }

    output.flush().await?;
    info!(
        "console finished: {} lines, {} sent, {} dropped, {} rejected",
        summary.lines, summary.sent, summary.dropped, summary.rejected
    );
    Ok(summary)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dispatch::{MockCommandSink, SendError};
    use actuator_core::Code;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every code it is asked to send.
    #[derive(Default)]
    struct RecordingSink {
        sent: Mutex<Vec<char>>,
        should_fail: bool,
    }

    #[async_trait]
    impl CommandSink for RecordingSink {
        async fn send(&self, code: Code) -> Result<(), SendError> {
            if self.should_fail {
                return Err(SendError::Connect {
                    addr: "127.0.0.1:9".parse().unwrap(),
                    source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
                });
            }
            self.sent.lock().unwrap().push(code.as_char());
            Ok(())
        }
    }

    async fn run(alphabet: Alphabet, input: &str, sink: &dyn CommandSink) -> (ConsoleSummary, String) {
        let mut output = Vec::new();
        let summary = run_console(alphabet, input.as_bytes(), &mut output, sink)
            .await
            .expect("in-memory I/O cannot fail");
        (summary, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_motion_ccw_then_exit() {
        // Arrange
        let sink = RecordingSink::default();

        // Act
        let (summary, output) = run(Alphabet::Motion, "CCW\nexit\nup\n", &sink).await;

        // Assert: only CCW was sent, the line after exit was never read
        assert_eq!(*sink.sent.lock().unwrap(), vec!['6']);
        assert!(summary.exited);
        assert_eq!(summary.lines, 1);
        assert_eq!(summary.sent, 1);
        assert!(output.contains("Exiting"));
    }

    #[tokio::test]
    async fn test_exit_keyword_is_case_insensitive() {
        for keyword in ["EXIT", "Exit", "  exit  "] {
            let sink = RecordingSink::default();
            let input = format!("{keyword}\n");
            let (summary, _) = run(Alphabet::Motion, &input, &sink).await;
            assert!(summary.exited, "{keyword:?} must exit");
            assert!(sink.sent.lock().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_end_of_input_stops_without_exit() {
        let sink = RecordingSink::default();

        let (summary, _) = run(Alphabet::Motion, "left\nright", &sink).await;

        assert!(!summary.exited);
        assert_eq!(*sink.sent.lock().unwrap(), vec!['3', '2']);
    }

    #[tokio::test]
    async fn test_motion_blank_line_sends_cancel() {
        let sink = RecordingSink::default();

        let (summary, _) = run(Alphabet::Motion, "\nexit\n", &sink).await;

        assert_eq!(*sink.sent.lock().unwrap(), vec!['0']);
        assert_eq!(summary.sent, 1);
    }

    #[tokio::test]
    async fn test_prompt_is_printed_before_each_line() {
        let sink = RecordingSink::default();

        let (_, output) = run(Alphabet::Motion, "up\ndown\nexit\n", &sink).await;

        assert_eq!(output.matches("Command: ").count(), 3);
    }

    #[tokio::test]
    async fn test_color_accepts_valid_and_rejects_invalid() {
        // Arrange
        let sink = RecordingSink::default();

        // Act
        let (summary, output) = run(Alphabet::Color, "g\nX\nb\nexit\n", &sink).await;

        // Assert
        assert_eq!(*sink.sent.lock().unwrap(), vec!['G', 'B']);
        assert_eq!(summary.rejected, 1);
        assert!(output.contains("Invalid command. Please enter R, G, or B."));
        assert!(output.contains("Command (R/G/B): "));
    }

    #[tokio::test]
    async fn test_color_rejection_never_calls_sink() {
        let mut sink = MockCommandSink::new();
        sink.expect_send().never();

        let (summary, _) = run(Alphabet::Color, "purple\n7\nexit\n", &sink).await;

        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.sent, 0);
    }

    #[tokio::test]
    async fn test_delivery_failure_is_reported_and_console_continues() {
        // Arrange: a sink that always fails
        let sink = RecordingSink {
            should_fail: true,
            ..RecordingSink::default()
        };

        // Act
        let (summary, output) = run(Alphabet::Motion, "up\ndown\nexit\n", &sink).await;

        // Assert: both commands were attempted and the loop reached exit
        assert_eq!(summary.dropped, 2);
        assert!(summary.exited);
        assert!(output.contains("was not delivered"));
    }
}
