//! Wire framing for the actuator link.
//!
//! The actuator reads one line per TCP connection.  A frame is therefore just
//! the code byte followed by a newline:
//!
//! ```text
//! +------+------+
//! | code | 0x0A |
//! +------+------+
//! ```
//!
//! Nothing is ever read back from the actuator.

use crate::command::Code;

/// Byte that terminates every frame.
pub const FRAME_TERMINATOR: u8 = b'\n';

/// Length in bytes of an encoded frame.
pub const FRAME_LEN: usize = 2;

/// Encodes `code` as the bytes written to the actuator.
pub fn encode_frame(code: Code) -> [u8; FRAME_LEN] {
    [code.as_byte(), FRAME_TERMINATOR]
}
