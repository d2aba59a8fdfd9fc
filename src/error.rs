//! Errors returned when a color can not be created from text.

use thiserror::Error;

/// Error returned by `HsvColor::from_str` for text that is not a hex color.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    /// The text does not have 3 or 6 hex digits after the optional `#`.
    #[error("expected 3 or 6 hex digits, found {0}")]
    InvalidLength(usize),
    /// The text contains a character that is not a hex digit.
    #[error("invalid hex digit {0:?}")]
    InvalidCharacter(char),
}
