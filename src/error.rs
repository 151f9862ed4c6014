//! Error types for colourkit.

use thiserror::Error;

/// Errors produced when text cannot be turned into a colour.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Text is not a 3- or 6-digit hex colour
    #[error("invalid hex colour: {0:?}")]
    InvalidHex(String),

    /// Shade input kept fewer than three hex digits after stripping
    #[error("shade input {input:?} has {digits} hex digit(s), need at least 3")]
    ShadeInputTooShort { input: String, digits: usize },
}

/// Result alias for colourkit operations
pub type Result<T> = std::result::Result<T, ColorError>;
