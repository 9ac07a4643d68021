//! Scope names emitted by the grammar back-end.
//!
//! The grammar back-end classifies spans with TextMate-style scope names:
//! dotted paths like `keyword.control` or `comment.block.tsx`, most specific
//! segment last. Unlike the other two back-ends this vocabulary is open -
//! the grammar can emit any well-formed scope name - so there is no enum to
//! enumerate. What the contract fixes is the shape, checked by
//! [`is_well_formed`], and theme construction validates its keys against
//! that shape.

/// Check that a scope name is well-formed.
///
/// A well-formed scope name is one or more non-empty segments separated by
/// `.`, each segment built from ASCII lowercase letters, digits, `-` and `_`.
///
/// # Example
/// ```
/// use madder_tokens::scope;
///
/// assert!(scope::is_well_formed("keyword.control"));
/// assert!(scope::is_well_formed("entity.name.function"));
/// assert!(!scope::is_well_formed("keyword..control"));
/// assert!(!scope::is_well_formed("Keyword"));
/// assert!(!scope::is_well_formed(""));
/// ```
pub fn is_well_formed(scope: &str) -> bool {
    !scope.is_empty()
        && scope.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
        })
}
