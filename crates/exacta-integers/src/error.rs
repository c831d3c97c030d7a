//! Parse errors for integer string conversion.

use thiserror::Error;

/// The reasons an integer literal can fail to parse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no digits.
    #[error("no digits in input")]
    Empty,

    /// A character was not a valid digit for the requested base.
    #[error("invalid digit {digit:?} for base {base}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The base the literal was parsed in.
        base: u32,
    },

    /// The base was outside the supported range.
    #[error("unsupported base {0}, expected 2..=36 or 0 for autodetection")]
    UnsupportedBase(u32),
}
