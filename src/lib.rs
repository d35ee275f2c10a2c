//! # path-grammar
//!
//! Escape-aware hierarchical resource paths for publish/subscribe
//! namespaces.
//!
//! A path such as `/hw/washu-chan/cpu-temp` names a value that can be
//! published and subscribed to. This crate holds the grammar for those
//! names: parsing, comparing, composing and decomposing them, with an
//! escaping scheme that lets a segment contain the separator itself.
//!
//! ## Features
//!
//! - **Ancestry**: `is_parent`, `is_immediate_parent`, `strip_prefix`, `lcp`
//!   always respect segment boundaries
//! - **Decomposition**: `parts`, `dirnames`, `levels`, `dirname`, `basename`
//! - **Escaping**: `\/` and `\\` inside a segment are literal content
//! - **Total**: malformed input never panics, absence is `None`
//! - **Path type**: [`Path`] is an immutable, canonical, `Arc`-backed key
//!
//! Every free function borrows from its input where it can; only
//! [`escape`], [`unescape`], [`append`] and [`canonicalize`] may allocate.
//!
//! ## Examples
//!
//! ### Ancestry
//!
//! ```rust
//! use path_grammar::{is_parent, is_immediate_parent, strip_prefix, lcp};
//!
//! assert!(is_parent("/foo/bar", "/foo/bar/baz"));
//! assert!(!is_parent("/foo/bar", "/foo/bareth/bazeth"));
//! assert!(is_immediate_parent("/foo/bar", "/foo/bar/baz"));
//! assert_eq!(strip_prefix("/foo", "/foo/bar"), Some("bar"));
//! assert_eq!(lcp("/hw/a/temp", "/hw/b/temp"), "/hw");
//! ```
//!
//! ### Segments containing separators
//!
//! ```rust
//! use path_grammar::{append, escape, parts, levels};
//!
//! let path = append("/sensors", &escape("rack-1/slot-4"));
//! assert_eq!(path, r"/sensors/rack-1\/slot-4");
//! assert_eq!(levels(&path), 2);
//!
//! let segments: Vec<String> = parts(&path).map(|s| s.into_owned()).collect();
//! assert_eq!(segments, vec!["sensors", "rack-1/slot-4"]);
//! ```
//!
//! ### Strict parsing
//!
//! ```rust
//! use path_grammar::{Path, PathError};
//!
//! let lenient = Path::from("/foo//bar/");
//! assert_eq!(lenient.as_str(), "/foo/bar");
//!
//! assert!(matches!(
//!     "/foo//bar/".parse::<Path>(),
//!     Err(PathError::EmptySegment { .. })
//! ));
//! ```

mod error;
mod grammar;
mod path;
mod validate;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use error::{PathError, Result};
pub use grammar::{
    append, basename, canonicalize, dirname, dirname_with_sep, dirnames, escape, find_sep,
    is_absolute, is_canonical, is_immediate_parent, is_parent, lcp, levels, parts, rfind_sep,
    root, segments, strip_prefix, unescape, Dirnames, Parts, Segments, ESC, SEP,
};
pub use path::Path;
pub use validate::{is_valid_path, validate_path};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
