//! # actuator-core
//!
//! Shared library for the actuator bridge containing the command vocabularies,
//! the token translator, and the one-line wire frame sent to the actuator.
//!
//! It has zero dependencies on sockets, async runtimes, or the terminal, so
//! everything here is a pure function of its input.
//!
//! # Overview
//!
//! An external controller (a game engine, a simulation, or a person at a
//! keyboard) produces free-text tokens such as `"up"`, `" CCW "` or `"g"`.
//! The actuator firmware only understands a single ASCII character followed
//! by a newline.  This crate sits between the two:
//!
//! - **`command`** – The two vocabularies ([`Alphabet::Motion`] and
//!   [`Alphabet::Color`]) and the translation of raw tokens into a [`Code`].
//!
//! - **`frame`** – Encodes a [`Code`] into the `<code>\n` bytes written to the
//!   actuator.
//!
//! ```rust
//! use actuator_core::{encode_frame, Alphabet};
//!
//! let code = Alphabet::Motion.translate("  up ").unwrap();
//! assert_eq!(&encode_frame(code), b"1\n");
//! ```

pub mod command;
pub mod frame;

pub use command::{
    normalize, trim_token, Alphabet, Code, ColorCommand, CommandError, MotionCommand,
};
pub use frame::{encode_frame, FRAME_LEN, FRAME_TERMINATOR};
