//! The color vocabulary used by the LED variant of the actuator.

use super::{normalize, trim_token, Code, CommandError};

/// An LED color selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorCommand {
    Red = b'R',
    Green = b'G',
    Blue = b'B',
}

impl ColorCommand {
    /// Parses a raw token.  Only `R`, `G` and `B` (any case, any surrounding
    /// whitespace) are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownColor`] carrying the trimmed token for
    /// everything else.  There is no fallback color.
    pub fn parse(raw: &str) -> Result<ColorCommand, CommandError> {
        match normalize(raw).as_str() {
            "R" => Ok(ColorCommand::Red),
            "G" => Ok(ColorCommand::Green),
            "B" => Ok(ColorCommand::Blue),
            _ => Err(CommandError::UnknownColor(trim_token(raw).to_string())),
        }
    }

    /// The wire code for this color.
    pub fn code(self) -> Code {
        Code::new_unchecked(self as u8)
    }
}
