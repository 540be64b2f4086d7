//! Error types for the DraftKit core model.
//!
//! The model API is mostly infallible by construction; parsing user input
//! is the main fallible surface. All error types use `thiserror`.

use thiserror::Error;

/// Color string parse error
///
/// Raised when a `#AARRGGBB` color literal cannot be parsed, for example
/// from a style sheet or a serialized document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The literal does not start with `#` or has the wrong length
    #[error("Invalid color format '{value}': expected #AARRGGBB")]
    InvalidFormat {
        /// The offending literal.
        value: String,
    },

    /// A channel is not valid hexadecimal
    #[error("Invalid hex digit in color '{value}'")]
    InvalidDigit {
        /// The offending literal.
        value: String,
    },
}
