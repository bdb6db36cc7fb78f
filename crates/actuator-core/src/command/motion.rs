//! The motion vocabulary.
//!
//! Each command drives one or more of the four motors on the actuator:
//!
//! | Token   | Code | Effect                                           |
//! |---------|------|--------------------------------------------------|
//! | `UP`    | `1`  | pulse motor 1                                    |
//! | `RIGHT` | `2`  | pulse motor 2                                    |
//! | `LEFT`  | `3`  | pulse motor 3                                    |
//! | `DOWN`  | `4`  | pulse motor 4                                    |
//! | `CW`    | `5`  | clockwise sequence, motors 1 → 2 → 4 → 3         |
//! | `CCW`   | `6`  | counter-clockwise sequence, motors 1 → 3 → 4 → 2 |
//! | other   | `0`  | cancel any active motion                         |

use super::{normalize, Code};

/// A motion command understood by the actuator firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MotionCommand {
    /// Halt all active motion.  Also the fallback for anything unrecognised.
    Cancel = b'0',
    Up = b'1',
    Right = b'2',
    Left = b'3',
    Down = b'4',
    /// Clockwise rotation sequence.
    Cw = b'5',
    /// Counter-clockwise rotation sequence.
    Ccw = b'6',
}

impl MotionCommand {
    /// All commands with a symbolic name, in code order.
    pub const NAMED: [MotionCommand; 6] = [
        MotionCommand::Up,
        MotionCommand::Right,
        MotionCommand::Left,
        MotionCommand::Down,
        MotionCommand::Cw,
        MotionCommand::Ccw,
    ];

    /// Translates a raw token into a motion command.
    ///
    /// The token is trimmed and upper-cased, then matched against the symbolic
    /// names and after that against the digits `1`–`6`.  Anything else,
    /// including `"0"` and the empty string, becomes [`MotionCommand::Cancel`].
    ///
    /// This function is total: it never fails and never panics.
    pub fn translate(raw: &str) -> MotionCommand {
        let token = normalize(raw);
        Self::from_name(&token)
            .or_else(|| Self::from_digit(&token))
            .unwrap_or(MotionCommand::Cancel)
    }

    /// Looks up an already-normalized symbolic name.
    fn from_name(token: &str) -> Option<MotionCommand> {
        Self::NAMED.into_iter().find(|cmd| cmd.name() == token)
    }

    /// Looks up a passthrough digit.  `0` is not a passthrough: it is only
    /// ever produced as the fallback.
    fn from_digit(token: &str) -> Option<MotionCommand> {
        match token.as_bytes() {
            [byte] => Self::NAMED.into_iter().find(|cmd| *cmd as u8 == *byte),
            _ => None,
        }
    }

    /// The symbolic name, or `"CANCEL"` for the fallback.
    pub fn name(self) -> &'static str {
        match self {
            MotionCommand::Cancel => "CANCEL",
            MotionCommand::Up => "UP",
            MotionCommand::Right => "RIGHT",
            MotionCommand::Left => "LEFT",
            MotionCommand::Down => "DOWN",
            MotionCommand::Cw => "CW",
            MotionCommand::Ccw => "CCW",
        }
    }

    /// The wire code for this command.
    pub fn code(self) -> Code {
        Code::new_unchecked(self as u8)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
