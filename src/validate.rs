//! Path validation utilities
//!
//! The grammar accepts any text. These checks are for callers that want to
//! reject text that is not already a well formed absolute path, for
//! example when parsing paths typed by a user.

use crate::error::{PathError, Result};
use crate::grammar::{ESC, SEP};

/// Check if a path is well formed
///
/// # Examples
/// ```
/// use path_grammar::is_valid_path;
///
/// assert!(is_valid_path("/hw/washu-chan/cpu-temp"));
/// assert!(is_valid_path(r"/a\/b"));
/// assert!(!is_valid_path("hw/washu-chan"));
/// assert!(!is_valid_path(""));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    validate_path(path).is_ok()
}

/// Validate a path and return detailed error information
///
/// A valid path is absolute, has no empty segments and uses the escape
/// marker only in front of `/` or `\`. The root is valid.
///
/// # Examples
/// ```
/// use path_grammar::{validate_path, PathError};
///
/// assert!(validate_path("/foo/bar").is_ok());
/// assert_eq!(validate_path(""), Err(PathError::EmptyPath));
/// assert!(validate_path("/foo//bar").is_err());
/// ```
pub fn validate_path(path: &str) -> Result<()> {
    let result = check(path);
    if let Err(e) = &result {
        log::debug!("rejected path {path:?}: {e}");
    }
    result
}

fn check(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PathError::EmptyPath);
    }

    if !path.starts_with(SEP) {
        return Err(PathError::NotAbsolute {
            path: path.to_string(),
        });
    }

    let mut escaped = false;
    let mut segment_len = 0usize;
    for (i, c) in path.char_indices().skip(1) {
        if escaped {
            if c != SEP && c != ESC {
                return Err(PathError::InvalidEscape {
                    path: path.to_string(),
                    index: i - 1,
                });
            }
            escaped = false;
            segment_len += 1;
        } else if c == ESC {
            escaped = true;
        } else if c == SEP {
            if segment_len == 0 {
                return Err(PathError::EmptySegment {
                    path: path.to_string(),
                });
            }
            segment_len = 0;
        } else {
            segment_len += 1;
        }
    }

    if escaped {
        return Err(PathError::DanglingEscape {
            path: path.to_string(),
        });
    }

    // Trailing separator, the root excepted
    if segment_len == 0 && path.len() > 1 {
        return Err(PathError::EmptySegment {
            path: path.to_string(),
        });
    }

    Ok(())
}
