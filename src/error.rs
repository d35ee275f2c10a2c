//! Error types for strict path parsing
//!
//! The grammar operations themselves are total and never fail. Errors only
//! come out of [`validate_path`](crate::validate_path) and the `FromStr`
//! implementation of [`Path`](crate::Path).

use thiserror::Error;

/// The error type for strict path validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Empty path text
    #[error("Empty paths are not allowed")]
    EmptyPath,

    /// Path does not start at the root
    #[error("Path is not absolute: {path}")]
    NotAbsolute { path: String },

    /// Escape marker followed by a character that cannot be escaped
    #[error("Invalid escape sequence at byte {index} in path: {path}")]
    InvalidEscape { path: String, index: usize },

    /// Escape marker at the very end of the path
    #[error("Dangling escape marker at end of path: {path}")]
    DanglingEscape { path: String },

    /// Doubled or trailing separator
    #[error("Empty segment in path: {path}")]
    EmptySegment { path: String },
}

/// Result type for path validation
pub type Result<T> = std::result::Result<T, PathError>;
