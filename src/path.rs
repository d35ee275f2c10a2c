//! Canonical path value type
//!
//! [`Path`] is the key type handed to publishers and subscribers. It is
//! immutable, cheap to clone and always canonical: building one from text
//! drops empty segments, so `"/foo//bar/"` and `"/foo/bar"` name the same
//! value.

use crate::error::PathError;
use crate::grammar;
use crate::validate::validate_path;
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

/// An immutable, canonical resource path
///
/// # Examples
/// ```
/// use path_grammar::Path;
///
/// let base = Path::from("/hw/washu-chan");
/// let temp = base.append("cpu-temp");
/// assert_eq!(&*temp, "/hw/washu-chan/cpu-temp");
/// assert!(base.is_immediate_parent_of(&temp));
/// assert_eq!(temp.basename().as_deref(), Some("cpu-temp"));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(Arc<str>);

impl Path {
    /// The root path `/`
    pub fn root() -> Path {
        Path(Arc::from(grammar::root()))
    }

    /// Borrow the path text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a path or relative path onto this one
    ///
    /// The text is taken as already escaped, so separators in `other` add
    /// levels. Use [`Path::append_segment`] for arbitrary text.
    pub fn append<T: AsRef<str>>(&self, other: T) -> Path {
        let other = other.as_ref();
        if other.is_empty() {
            return self.clone();
        }
        Path::from(grammar::append(&self.0, other))
    }

    /// Join one segment of raw text onto this path
    ///
    /// Separators and escape markers in `segment` are escaped, so the
    /// result is always exactly one level deeper.
    ///
    /// # Examples
    /// ```
    /// use path_grammar::Path;
    ///
    /// let p = Path::from("/sensors").append_segment("a/b");
    /// assert_eq!(p.as_str(), r"/sensors/a\/b");
    /// assert_eq!(p.levels(), 2);
    /// ```
    pub fn append_segment(&self, segment: &str) -> Path {
        if segment.is_empty() {
            return self.clone();
        }
        self.append(grammar::escape(segment))
    }

    pub fn is_absolute(&self) -> bool {
        grammar::is_absolute(&self.0)
    }

    pub fn is_root(&self) -> bool {
        &*self.0 == grammar::root()
    }

    /// True when `self` is `other` or one of its ancestors
    pub fn is_parent_of(&self, other: &str) -> bool {
        grammar::is_parent(&self.0, other)
    }

    /// True when `self` is exactly one level above `other`
    pub fn is_immediate_parent_of(&self, other: &str) -> bool {
        grammar::is_immediate_parent(&self.0, other)
    }

    /// The part of this path below `prefix`
    pub fn strip_prefix(&self, prefix: &str) -> Option<&str> {
        grammar::strip_prefix(prefix, &self.0)
    }

    pub fn parts(&self) -> grammar::Parts<'_> {
        grammar::parts(&self.0)
    }

    pub fn dirnames(&self) -> grammar::Dirnames<'_> {
        grammar::dirnames(&self.0)
    }

    pub fn levels(&self) -> usize {
        grammar::levels(&self.0)
    }

    /// The parent path, `None` for the root
    pub fn dirname(&self) -> Option<Path> {
        grammar::dirname(&self.0).map(Path::from)
    }

    pub fn basename(&self) -> Option<Cow<'_, str>> {
        grammar::basename(&self.0)
    }

    /// Longest common ancestor with another path
    pub fn lcp(&self, other: &str) -> Path {
        Path::from(grammar::lcp(&self.0, other))
    }
}

impl Default for Path {
    fn default() -> Self {
        Path::root()
    }
}

impl Deref for Path {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Path {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Path {
        match grammar::canonicalize(s) {
            Cow::Borrowed(s) => Path(Arc::from(s)),
            Cow::Owned(c) => {
                log::trace!("canonicalized path {s:?} to {c:?}");
                Path(Arc::from(c))
            }
        }
    }
}

impl From<String> for Path {
    fn from(s: String) -> Path {
        if grammar::is_canonical(&s) {
            Path(Arc::from(s))
        } else {
            Path::from(s.as_str())
        }
    }
}

impl From<&String> for Path {
    fn from(s: &String) -> Path {
        Path::from(s.as_str())
    }
}

impl FromStr for Path {
    type Err = PathError;

    /// Strict parsing: the text must already be a valid absolute path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_path(s)?;
        Ok(Path(Arc::from(s)))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Path {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <Cow<'de, str>>::deserialize(deserializer)?;
        Ok(Path::from(&*s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_root() {
        let root = Path::root();
        assert_eq!(root.as_str(), "/");
        assert!(root.is_root());
        assert!(root.is_absolute());
        assert_eq!(root.levels(), 0);
        assert_eq!(root.dirname(), None);
        assert_eq!(root.basename(), None);
        assert_eq!(Path::default(), root);
    }

    #[test]
    fn test_from_canonicalizes() {
        assert_eq!(Path::from("/foo//bar/").as_str(), "/foo/bar");
        assert_eq!(Path::from(String::from("/foo/")).as_str(), "/foo");
        assert_eq!(Path::from("///").as_str(), "/");
        assert_eq!(Path::from("/foo/bar"), Path::from("/foo//bar"));
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("/foo/bar".parse::<Path>().unwrap().as_str(), "/foo/bar");
        assert!(matches!("".parse::<Path>(), Err(PathError::EmptyPath)));
        assert!(matches!(
            "foo".parse::<Path>(),
            Err(PathError::NotAbsolute { .. })
        ));
        assert!(matches!(
            "/foo//bar".parse::<Path>(),
            Err(PathError::EmptySegment { .. })
        ));
    }

    #[test]
    fn test_append() {
        let p = Path::root().append("foo").append("bar");
        assert_eq!(p.as_str(), "/foo/bar");
        assert_eq!(Path::from("/foo").append("/bar/").as_str(), "/foo/bar");
        assert_eq!(Path::from("/foo").append(""), Path::from("/foo"));
        assert_eq!(Path::from("/foo").append("a/b").levels(), 3);
    }

    #[test]
    fn test_append_segment() {
        let p = Path::root().append_segment("a/b").append_segment(r"c\d");
        assert_eq!(p.as_str(), r"/a\/b/c\\d");
        let parts: Vec<_> = p.parts().collect();
        assert_eq!(parts, vec!["a/b", r"c\d"]);
        assert_eq!(p.basename().as_deref(), Some(r"c\d"));
    }

    #[test]
    fn test_append_segment_after_dangling_escape() {
        let base = Path::from(r"/foo\");
        assert_eq!(base.levels(), 1);
        let p = base.append_segment("bar");
        assert_eq!(p.as_str(), r"/foo\\/bar");
        assert_eq!(p.levels(), base.levels() + 1);
        assert_eq!(p.basename().as_deref(), Some("bar"));
    }

    #[test]
    fn test_relationships() {
        let parent = Path::from("/foo/bar");
        assert!(parent.is_parent_of("/foo/bar/baz"));
        assert!(!parent.is_parent_of("/foo/bareth/bazeth"));
        assert!(parent.is_immediate_parent_of("/foo/bar/baz"));
        assert!(!parent.is_immediate_parent_of("/foo/bar/baz/qux"));

        let child = Path::from("/foo/bar/baz");
        assert_eq!(child.strip_prefix("/foo"), Some("bar/baz"));
        assert_eq!(child.strip_prefix("/qux"), None);
        assert_eq!(child.dirname(), Some(parent.clone()));
        assert_eq!(child.lcp("/foo/bar/qux"), parent);

        let d: Vec<_> = child.dirnames().collect();
        assert_eq!(d, vec!["/", "/foo", "/foo/bar", "/foo/bar/baz"]);
    }

    #[test]
    fn test_borrow_as_map_key() {
        let mut values = HashMap::new();
        values.insert(Path::from("/hw/washu-chan/cpu-temp"), 42);
        assert_eq!(values.get("/hw/washu-chan/cpu-temp"), Some(&42));
    }

    #[test]
    fn test_display_and_debug() {
        let p = Path::from("/foo/bar");
        assert_eq!(p.to_string(), "/foo/bar");
        assert_eq!(format!("{:?}", p), "\"/foo/bar\"");
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Path>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let p = Path::from("/foo/bar");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"/foo/bar\"");
        let back: Path = serde_json::from_str("\"/foo//bar/\"").unwrap();
        assert_eq!(back, p);
    }
}
