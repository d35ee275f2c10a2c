//! Property test generators for resource paths
//!
//! Strategies producing segment text, canonical paths and malformed input
//! for the grammar's property tests.

use crate::grammar::{escape, SEP};
use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Plain segment text without separators or escape markers
    pub fn plain_segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_.-]{1,12}"
    }

    /// Raw segment text that may contain `/` and `\`
    pub fn raw_segment() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => Self::plain_segment(),
            1 => "[a-z/\\\\]{1,8}",
            1 => "[a-zé温/]{1,6}",
        ]
    }

    /// Absolute canonical path built from escaped raw segments
    pub fn canonical_path() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::raw_segment(), 0..=5).prop_map(|segments| {
            if segments.is_empty() {
                return SEP.to_string();
            }
            segments
                .iter()
                .map(|s| format!("{}{}", SEP, escape(s)))
                .collect()
        })
    }

    /// Pair of paths sharing a generated ancestor
    pub fn related_pair() -> impl Strategy<Value = (String, String)> {
        (
            Self::canonical_path(),
            prop::collection::vec(Self::plain_segment(), 0..=3),
            prop::collection::vec(Self::plain_segment(), 0..=3),
        )
            .prop_map(|(base, a, b)| {
                let extend = |tail: &[String]| {
                    tail.iter()
                        .fold(base.clone(), |acc, s| crate::grammar::append(&acc, s))
                };
                (extend(&a[..]), extend(&b[..]))
            })
    }

    /// Arbitrary text, including malformed escapes and doubled separators
    pub fn any_text() -> impl Strategy<Value = String> {
        prop_oneof![
            2 => Self::canonical_path(),
            1 => "[a/\\\\]{0,10}",
            1 => any::<String>(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::is_valid_path;

    proptest! {
        #[test]
        fn canonical_paths_are_valid(path in PathGenerators::canonical_path()) {
            prop_assert!(is_valid_path(&path), "generated invalid path: {}", path);
        }

        #[test]
        fn related_pairs_are_absolute((a, b) in PathGenerators::related_pair()) {
            prop_assert!(a.starts_with('/'));
            prop_assert!(b.starts_with('/'));
        }

        #[test]
        fn generators_dont_panic(_text in PathGenerators::any_text()) {}
    }
}
