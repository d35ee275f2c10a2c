//! Escape-aware path grammar
//!
//! Free functions over `&str` that parse, compare, compose and decompose
//! hierarchical resource paths such as `/hw/washu-chan/cpu-temp`.
//!
//! `/` separates segments. A segment may carry a literal `/` or `\` when it
//! is preceded by the escape marker `\`. Every operation that cares about
//! segment boundaries goes through one scanner, `Separators`, which yields
//! the byte offsets of unescaped separators only.
//!
//! All functions are total: malformed input (a dangling `\`, doubled
//! separators, the empty string) produces a well defined result and never
//! panics. Absence is reported with `None`.

use std::borrow::Cow;
use std::iter::FusedIterator;

/// The segment separator
pub const SEP: char = '/';

/// The escape marker
pub const ESC: char = '\\';

const ROOT: &str = "/";

// Both markers are ASCII, so byte scanning never lands inside a multi-byte
// character.
const SEP_BYTE: u8 = b'/';
const ESC_BYTE: u8 = b'\\';

/// Byte offsets of the unescaped separators in a path, left to right.
#[derive(Debug, Clone)]
pub(crate) struct Separators<'a> {
    bytes: std::iter::Enumerate<std::str::Bytes<'a>>,
    escaped: bool,
}

impl<'a> Separators<'a> {
    pub(crate) fn new(path: &'a str) -> Self {
        Self {
            bytes: path.bytes().enumerate(),
            escaped: false,
        }
    }
}

impl Iterator for Separators<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        for (i, b) in self.bytes.by_ref() {
            if self.escaped {
                self.escaped = false;
            } else if b == ESC_BYTE {
                self.escaped = true;
            } else if b == SEP_BYTE {
                return Some(i);
            }
        }
        None
    }
}

impl FusedIterator for Separators<'_> {}

/// True when `s` ends in an escape marker that has nothing left to escape.
fn ends_in_escape(s: &str) -> bool {
    s.bytes().rev().take_while(|b| *b == ESC_BYTE).count() % 2 == 1
}

/// True when the last character of `s` is an unescaped separator.
fn ends_with_sep(s: &str) -> bool {
    match s.strip_suffix(SEP) {
        Some(head) => !ends_in_escape(head),
        None => false,
    }
}

/// Remove trailing unescaped separators, never shrinking past the root.
fn trim_trailing_seps(mut s: &str) -> &str {
    while s.len() > 1 && ends_with_sep(s) {
        s = &s[..s.len() - 1];
    }
    s
}

/// Byte length of the longest common prefix, on a char boundary of both.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| a.len().min(b.len()))
}

/// The root path
///
/// # Examples
/// ```
/// assert_eq!(path_grammar::root(), "/");
/// ```
pub fn root() -> &'static str {
    ROOT
}

/// Check whether a path starts at the root
///
/// # Examples
/// ```
/// use path_grammar::is_absolute;
///
/// assert!(is_absolute("/"));
/// assert!(is_absolute("/foo/bar"));
/// assert!(!is_absolute(""));
/// assert!(!is_absolute("foo/bar"));
/// ```
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEP)
}

/// Check whether `parent` is `other` or one of its ancestors
///
/// The match must end on a segment boundary, so a parent never matches part
/// of a segment. Ancestry is reflexive.
///
/// # Examples
/// ```
/// use path_grammar::is_parent;
///
/// assert!(is_parent("/", "/foo/bar/baz"));
/// assert!(is_parent("/foo/bar", "/foo/bar/baz"));
/// assert!(is_parent("/foo/bar", "/foo/bar"));
/// assert!(!is_parent("/foo/bar", "/foo/bareth/bazeth"));
/// ```
pub fn is_parent(parent: &str, other: &str) -> bool {
    if parent.is_empty() {
        return other.is_empty();
    }
    match other.strip_prefix(parent) {
        None => false,
        Some("") => true,
        Some(rest) => {
            ends_with_sep(parent) || (rest.starts_with(SEP) && !ends_in_escape(parent))
        }
    }
}

/// Check whether `parent` is exactly one level above `other`
///
/// Empty runs from doubled separators do not count as levels.
///
/// # Examples
/// ```
/// use path_grammar::is_immediate_parent;
///
/// assert!(is_immediate_parent("/foo/bar", "/foo/bar/baz"));
/// assert!(!is_immediate_parent("/", "/foo/bar/baz"));
/// assert!(!is_immediate_parent("/", "/"));
/// assert!(is_immediate_parent("/foo", "/foo//bar"));
/// ```
pub fn is_immediate_parent(parent: &str, other: &str) -> bool {
    match strip_prefix(parent, other) {
        Some(rest) => segments(rest).take(2).count() == 1,
        None => false,
    }
}

/// Remove `prefix` and the separator after it from `path`
///
/// Returns `None` unless `prefix` is a parent of `path`, and `Some("")` when
/// the two are equal.
///
/// # Examples
/// ```
/// use path_grammar::strip_prefix;
///
/// assert_eq!(strip_prefix("/", "/"), Some(""));
/// assert_eq!(strip_prefix("/", "/foo"), Some("foo"));
/// assert_eq!(strip_prefix("/", "foo"), None);
/// assert_eq!(strip_prefix("/foo", "/foo/bar"), Some("bar"));
/// ```
pub fn strip_prefix<'a>(prefix: &str, path: &'a str) -> Option<&'a str> {
    if !is_parent(prefix, path) {
        return None;
    }
    let rest = &path[prefix.len()..];
    if ends_with_sep(prefix) {
        Some(rest)
    } else {
        Some(rest.strip_prefix(SEP).unwrap_or(rest))
    }
}

/// Longest common ancestor of two paths
///
/// The result never splits a segment and carries no trailing separator
/// (other than the root itself). Relative paths with nothing in common
/// yield the empty string.
///
/// # Examples
/// ```
/// use path_grammar::lcp;
///
/// assert_eq!(lcp("/foo/bar/baz", "/foo/bar/qux"), "/foo/bar");
/// assert_eq!(lcp("/foo/bar", "/foo/bareth"), "/foo");
/// assert_eq!(lcp("/foo", "/bar"), "/");
/// ```
pub fn lcp<'a>(path0: &'a str, path1: &str) -> &'a str {
    if path0 == path1 {
        return path0;
    }
    let shared = &path0[..common_prefix_len(path0, path1)];
    if is_parent(shared, path0) && is_parent(shared, path1) {
        return trim_trailing_seps(shared);
    }
    match rfind_sep(shared) {
        Some(0) => &shared[..1],
        Some(i) => trim_trailing_seps(&shared[..i]),
        None => "",
    }
}

/// Escape text so that it can be used as a single segment
///
/// Every `/` and `\` gets an escape marker in front of it. This is not
/// idempotent: escaping twice escapes the markers added the first time.
///
/// `unescape(escape(s)) == s` for any text. The reverse only holds for
/// text whose escapes are well formed, see [`parts`].
///
/// # Examples
/// ```
/// use path_grammar::escape;
///
/// assert_eq!(escape("plain"), "plain");
/// assert_eq!(escape("a/b"), r"a\/b");
/// assert_eq!(escape(r"a\b"), r"a\\b");
/// ```
pub fn escape(segment: &str) -> Cow<'_, str> {
    if !segment.contains([SEP, ESC]) {
        return Cow::Borrowed(segment);
    }
    let mut out = String::with_capacity(segment.len() + 4);
    for c in segment.chars() {
        if c == SEP || c == ESC {
            out.push(ESC);
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// Undo [`escape`]
///
/// `\/` and `\\` collapse to the literal character. Any other escape marker,
/// including a trailing one, is kept as is.
///
/// # Examples
/// ```
/// use path_grammar::unescape;
///
/// assert_eq!(unescape(r"a\/b"), "a/b");
/// assert_eq!(unescape(r"a\\b"), r"a\b");
/// assert_eq!(unescape(r"a\x"), r"a\x");
/// assert_eq!(unescape(r"a\"), r"a\");
/// ```
pub fn unescape(segment: &str) -> Cow<'_, str> {
    if !segment.contains(ESC) {
        return Cow::Borrowed(segment);
    }
    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ESC {
            if let Some(&next) = chars.peek() {
                if next == SEP || next == ESC {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// Join two paths with exactly one separator between them
///
/// A dangling escape marker at the end of `path` becomes a literal `\\`
/// so that it cannot swallow the separator added here.
///
/// # Examples
/// ```
/// use path_grammar::append;
///
/// assert_eq!(append("/", "foo"), "/foo");
/// assert_eq!(append("/foo", "bar"), "/foo/bar");
/// assert_eq!(append("/foo/", "/bar"), "/foo/bar");
/// assert_eq!(append(r"/foo\", "bar"), r"/foo\\/bar");
/// ```
pub fn append(path: &str, other: &str) -> String {
    if other.is_empty() {
        return path.to_owned();
    }
    if path.is_empty() {
        return other.to_owned();
    }
    let head = trim_trailing_seps(path);
    let tail = other.trim_start_matches(SEP);
    let mut out = String::with_capacity(head.len() + tail.len() + 2);
    out.push_str(head);
    if !tail.is_empty() {
        if ends_in_escape(head) {
            out.push(ESC);
        }
        if !ends_with_sep(head) {
            out.push(SEP);
        }
        out.push_str(tail);
    }
    out
}

/// Raw segments of a path, still escaped.
///
/// Empty runs between doubled or trailing separators are skipped.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    path: &'a str,
    seps: Separators<'a>,
    start: usize,
    done: bool,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while !self.done {
            let end = match self.seps.next() {
                Some(i) => i,
                None => {
                    self.done = true;
                    self.path.len()
                }
            };
            let segment = &self.path[self.start..end];
            self.start = end + 1;
            if !segment.is_empty() {
                return Some(segment);
            }
        }
        None
    }
}

impl FusedIterator for Segments<'_> {}

/// Iterate over the raw (escaped) segments of a path
///
/// # Examples
/// ```
/// use path_grammar::segments;
///
/// let segs: Vec<&str> = segments(r"/foo/a\/b").collect();
/// assert_eq!(segs, vec!["foo", r"a\/b"]);
/// ```
pub fn segments(path: &str) -> Segments<'_> {
    Segments {
        path,
        seps: Separators::new(path),
        start: 0,
        done: false,
    }
}

/// Unescaped segments of a path, see [`parts`].
#[derive(Debug, Clone)]
pub struct Parts<'a>(Segments<'a>);

impl<'a> Iterator for Parts<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Cow<'a, str>> {
        self.0.next().map(unescape)
    }
}

impl FusedIterator for Parts<'_> {}

/// Iterate over the unescaped segments of a path
///
/// The root has no segments. Calling `parts` again restarts from the
/// beginning.
///
/// Escaping the parts and joining them rebuilds the path only when every
/// escape marker in it is well formed (`\/` or `\\`). A marker in front of
/// any other character is kept literally by [`unescape`], so escaping it
/// again doubles it: `r"/a\x"` comes back as `r"/a\\x"`.
///
/// # Examples
/// ```
/// use path_grammar::parts;
///
/// assert_eq!(parts("/").count(), 0);
/// let p: Vec<String> = parts(r"/hw/a\/b").map(|s| s.into_owned()).collect();
/// assert_eq!(p, vec!["hw", "a/b"]);
/// ```
pub fn parts(path: &str) -> Parts<'_> {
    Parts(segments(path))
}

/// Ancestors of a path, see [`dirnames`].
#[derive(Debug, Clone)]
pub struct Dirnames<'a> {
    path: &'a str,
    seps: Separators<'a>,
    prev: Option<usize>,
    root_pending: bool,
    done: bool,
}

impl<'a> Iterator for Dirnames<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }
        if self.root_pending {
            self.root_pending = false;
            self.done = self.path == ROOT;
            return Some(&self.path[..1]);
        }
        loop {
            match self.seps.next() {
                Some(i) => {
                    let empty = i == 0 || self.prev == Some(i - 1);
                    self.prev = Some(i);
                    if !empty {
                        return Some(&self.path[..i]);
                    }
                }
                None => {
                    self.done = true;
                    return Some(self.path);
                }
            }
        }
    }
}

impl FusedIterator for Dirnames<'_> {}

/// Iterate over every ancestor of a path, from the root down to and
/// including the path itself
///
/// Relative paths start at their first segment. The empty string yields
/// nothing.
///
/// # Examples
/// ```
/// use path_grammar::dirnames;
///
/// let d: Vec<&str> = dirnames("/foo/bar/baz").collect();
/// assert_eq!(d, vec!["/", "/foo", "/foo/bar", "/foo/bar/baz"]);
/// assert_eq!(dirnames("/").collect::<Vec<_>>(), vec!["/"]);
/// ```
pub fn dirnames(path: &str) -> Dirnames<'_> {
    let path = trim_trailing_seps(path);
    Dirnames {
        path,
        seps: Separators::new(path),
        prev: None,
        root_pending: is_absolute(path),
        done: path.is_empty(),
    }
}

/// Number of segments in a path
///
/// # Examples
/// ```
/// use path_grammar::levels;
///
/// assert_eq!(levels("/"), 0);
/// assert_eq!(levels("/foo/bar"), 2);
/// assert_eq!(levels(r"/foo\/bar"), 1);
/// ```
pub fn levels(path: &str) -> usize {
    segments(path).count()
}

/// Parent of a path, without a trailing separator
///
/// # Examples
/// ```
/// use path_grammar::dirname;
///
/// assert_eq!(dirname("/foo/bar"), Some("/foo"));
/// assert_eq!(dirname("/foo"), Some("/"));
/// assert_eq!(dirname("/"), None);
/// ```
pub fn dirname(path: &str) -> Option<&str> {
    dirname_with_sep(path).map(trim_trailing_seps)
}

/// Parent of a path, keeping the trailing separator
///
/// # Examples
/// ```
/// use path_grammar::dirname_with_sep;
///
/// assert_eq!(dirname_with_sep("/foo/bar"), Some("/foo/"));
/// assert_eq!(dirname_with_sep("/foo"), Some("/"));
/// assert_eq!(dirname_with_sep("/"), None);
/// ```
pub fn dirname_with_sep(path: &str) -> Option<&str> {
    let path = trim_trailing_seps(path);
    if path == ROOT {
        return None;
    }
    rfind_sep(path).map(|i| &path[..=i])
}

/// Last segment of a path, unescaped
///
/// # Examples
/// ```
/// use path_grammar::basename;
///
/// assert_eq!(basename("/foo/bar").as_deref(), Some("bar"));
/// assert_eq!(basename(r"/foo/a\/b").as_deref(), Some("a/b"));
/// assert_eq!(basename("/"), None);
/// ```
pub fn basename(path: &str) -> Option<Cow<'_, str>> {
    let path = trim_trailing_seps(path);
    let last = match rfind_sep(path) {
        Some(i) => &path[i + 1..],
        None => path,
    };
    if last.is_empty() {
        None
    } else {
        Some(unescape(last))
    }
}

/// Byte offset of the first unescaped separator
///
/// # Examples
/// ```
/// use path_grammar::find_sep;
///
/// assert_eq!(find_sep("foo/bar"), Some(3));
/// assert_eq!(find_sep(r"a\/b/c"), Some(4));
/// assert_eq!(find_sep("foo"), None);
/// ```
pub fn find_sep(path: &str) -> Option<usize> {
    Separators::new(path).next()
}

/// Byte offset of the last unescaped separator
///
/// # Examples
/// ```
/// use path_grammar::rfind_sep;
///
/// assert_eq!(rfind_sep("/foo/bar"), Some(4));
/// assert_eq!(rfind_sep(r"/foo\/bar"), Some(0));
/// assert_eq!(rfind_sep("foo"), None);
/// ```
pub fn rfind_sep(path: &str) -> Option<usize> {
    Separators::new(path).last()
}

/// Check whether a path has no empty segments
///
/// The root is canonical. So is the empty string.
pub fn is_canonical(path: &str) -> bool {
    if path == ROOT {
        return true;
    }
    let mut prev: Option<usize> = None;
    for i in Separators::new(path) {
        if prev.is_some_and(|p| p + 1 == i) {
            return false;
        }
        prev = Some(i);
    }
    !prev.is_some_and(|p| p + 1 == path.len())
}

/// Drop empty segments, keeping a leading separator
///
/// # Examples
/// ```
/// use path_grammar::canonicalize;
///
/// assert_eq!(canonicalize("/foo//bar/"), "/foo/bar");
/// assert_eq!(canonicalize("///"), "/");
/// assert_eq!(canonicalize("foo/bar"), "foo/bar");
/// ```
pub fn canonicalize(path: &str) -> Cow<'_, str> {
    if is_canonical(path) {
        return Cow::Borrowed(path);
    }
    let mut out = String::with_capacity(path.len());
    if is_absolute(path) {
        out.push(SEP);
    }
    for (i, segment) in segments(path).enumerate() {
        if i > 0 {
            out.push(SEP);
        }
        out.push_str(segment);
    }
    Cow::Owned(out)
}
