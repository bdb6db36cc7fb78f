//! Command vocabularies and token translation.
//!
//! A *token* is whatever text arrives at the bridge: a UDP payload or a line
//! typed at the console.  A [`Code`] is the single ASCII character that is
//! actually written to the actuator.  The [`Alphabet`] decides how one becomes
//! the other.
//!
//! # The two alphabets
//!
//! | Alphabet | Accepted tokens                                   | Codes           | Unknown token        |
//! |----------|---------------------------------------------------|-----------------|----------------------|
//! | Motion   | `UP RIGHT LEFT DOWN CW CCW`, or the digits `1`–`6` | `0`–`6`         | mapped to `0` (stop) |
//! | Color    | `R G B`                                           | `R`, `G`, `B`   | rejected             |
//!
//! The difference in the last column is intentional.  A motion controller
//! must always be able to fall back to "stop", so it never reports a bad
//! command.  The color controller has no safe default, so an unknown token is
//! a validation error and nothing is sent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod color;
pub mod motion;

pub use color::ColorCommand;
pub use motion::MotionCommand;

/// Errors produced while interpreting operator or configuration input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A token was not one of `R`, `G` or `B`.
    #[error("invalid color command '{0}': expected R, G, or B")]
    UnknownColor(String),

    /// An alphabet name was not recognised.
    #[error("unknown alphabet '{0}': expected 'motion' or 'color'")]
    UnknownAlphabet(String),
}

/// Trims surrounding whitespace and upper-cases a raw token.
///
/// This is the first step of every translation, so `" up\n"`, `"Up"` and
/// `"UP"` are all the same command.  Upper-casing follows the full Unicode
/// rules, so `"rıght"` (dotless i) is `"RIGHT"`.
pub fn normalize(raw: &str) -> String {
    trim_token(raw).to_uppercase()
}

/// Strips Unicode whitespace and the ASCII information separators
/// `\x1c`..=`\x1f` from both ends of a token.
pub fn trim_token(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// The command vocabulary a bridge instance speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// Directional pulses and rotation sequences, encoded as `0`–`6`.
    #[default]
    Motion,
    /// LED color selection, encoded as `R`, `G` or `B`.
    #[serde(alias = "colour")]
    Color,
}

impl Alphabet {
    /// Translates a raw token into a wire code for this alphabet.
    ///
    /// # Errors
    ///
    /// Never fails for [`Alphabet::Motion`]: unknown tokens become the cancel
    /// code `0`.  For [`Alphabet::Color`], returns
    /// [`CommandError::UnknownColor`] when the token is not `R`, `G` or `B`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use actuator_core::Alphabet;
    ///
    /// assert_eq!(Alphabet::Motion.translate("spin").unwrap().as_char(), '0');
    /// assert_eq!(Alphabet::Color.translate("g").unwrap().as_char(), 'G');
    /// assert!(Alphabet::Color.translate("X").is_err());
    /// ```
    pub fn translate(self, raw: &str) -> Result<Code, CommandError> {
        match self {
            Alphabet::Motion => Ok(MotionCommand::translate(raw).code()),
            Alphabet::Color => ColorCommand::parse(raw).map(ColorCommand::code),
        }
    }

    /// Every code this alphabet can put on the wire, in ascending order.
    pub fn codes(self) -> &'static [u8] {
        match self {
            Alphabet::Motion => b"0123456",
            Alphabet::Color => b"BGR",
        }
    }

    /// Wraps `byte` in a [`Code`] if it belongs to this alphabet.
    pub fn code(self, byte: u8) -> Option<Code> {
        self.codes().contains(&byte).then_some(Code(byte))
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Alphabet::Motion => "motion",
            Alphabet::Color => "color",
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Alphabet {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "motion" => Ok(Alphabet::Motion),
            "color" | "colour" => Ok(Alphabet::Color),
            _ => Err(CommandError::UnknownAlphabet(s.to_string())),
        }
    }
}

/// A single-character wire code.
///
/// A `Code` can only be obtained from an [`Alphabet`] (or from the command
/// enums), so it always holds exactly one ASCII byte that some alphabet
/// defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(u8);

impl Code {
    pub(crate) const fn new_unchecked(byte: u8) -> Self {
        Code(byte)
    }

    /// The raw ASCII byte.
    pub fn as_byte(self) -> u8 {
        self.0
    }

    /// The code as a `char`.
    pub fn as_char(self) -> char {
        char::from(self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
