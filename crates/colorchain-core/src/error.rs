//! Error types for colorchain

use std::fmt;

use thiserror::Error;

/// Result type for colorchain operations
pub type Result<T> = std::result::Result<T, Error>;

/// RGB channel named in range errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Red channel
    Red,
    /// Green channel
    Green,
    /// Blue channel
    Blue,
}

impl Channel {
    /// Channels in evaluation order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
        }
    }
}

/// Errors that can occur in colorchain operations
///
/// Scalar conversions are total; only the hex codec and the batch helpers fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Malformed hex color string
    #[error("Invalid hex color {0:?}: expected '#' followed by 6 hex digits")]
    Format(String),

    /// Integer channel outside 0..=255
    #[error("{channel} channel out of range: {value} is not in 0..=255")]
    Range { channel: Channel, value: i32 },

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
