//! Error types for georouter
//!
//! A failed search is not an error: it is reported as a single-element
//! sentinel path (see `GeoPath::is_trivial`). Errors here cover parameter
//! validation and plotting I/O only.

use std::fmt;

/// Main error type for routing operations
#[derive(Debug)]
pub enum RouterError {
    /// Invalid tunable or strategy name
    InvalidParameter(String),
    /// Plot rendering failed
    Visualization(String),
    /// I/O error
    Io(std::io::Error),
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            RouterError::Visualization(msg) => write!(f, "Visualization error: {}", msg),
            RouterError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for RouterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouterError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RouterError {
    fn from(e: std::io::Error) -> Self {
        RouterError::Io(e)
    }
}

/// Result type alias for routing operations
pub type RouterResult<T> = Result<T, RouterError>;
