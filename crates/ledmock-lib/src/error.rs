//! Unified error type for the ledmock-lib crate.
//!
//! Color and pattern operations are total; the only domain failures are
//! strip addressing, strip construction, and configuration. I/O errors from
//! the output sink are wrapped so `?` propagates them alongside the rest.

use std::fmt;

/// Unified error type for ledmock-lib operations.
#[derive(Debug)]
pub enum LedmockError {
    /// Strip index outside `[0, len)`.
    OutOfRange { index: isize, len: usize },
    /// Strip constructed with a size of zero.
    InvalidSize(usize),
    /// Output sink or filesystem error.
    Io(std::io::Error),
    /// Configuration or argument validation error.
    Config(String),
    /// Pattern name that matches no known pattern.
    UnknownPattern(String),
    /// Color string that is not `#RRGGBB`.
    InvalidColor(String),
}

impl fmt::Display for LedmockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedmockError::OutOfRange { index, len } => {
                write!(f, "led[{index}] outside of range [0...{len}]")
            }
            LedmockError::InvalidSize(size) => {
                write!(f, "Invalid strip size: {size} (must be at least 1)")
            }
            LedmockError::Io(e) => write!(f, "I/O error: {e}"),
            LedmockError::Config(e) => write!(f, "Config error: {e}"),
            LedmockError::UnknownPattern(name) => write!(f, "Unknown pattern: {name}"),
            LedmockError::InvalidColor(text) => {
                write!(f, "Invalid color: {text} (expected #RRGGBB)")
            }
        }
    }
}

impl std::error::Error for LedmockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LedmockError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LedmockError {
    fn from(e: std::io::Error) -> Self {
        LedmockError::Io(e)
    }
}

/// Crate-level Result alias using [`LedmockError`].
pub type Result<T> = std::result::Result<T, LedmockError>;
