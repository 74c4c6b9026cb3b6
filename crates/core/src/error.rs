//! Error types for huewheel.

use thiserror::Error;

/// Errors produced by color parsing and handle operations.
#[derive(Debug, Error, PartialEq)]
pub enum PaletteError {
    /// The input was not empty, not a valid component triple/quad, not a hex
    /// string, not a color-function string and not a known color name.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A format name did not match any of `hex`, `rgba`, `hsla`.
    #[error("unknown color format: {0}")]
    InvalidFormat(String),

    /// Render options could not be decoded from JSON.
    #[error("invalid render options: {0}")]
    InvalidOptions(String),
}
