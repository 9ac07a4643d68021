//! Madder - syntax theme tables for code-block rendering.
//!
//! A code block is tokenized by one of three back-ends, and each back-end
//! has its own category vocabulary and its own theme table:
//!
//! | back-end | categories | theme |
//! |----------|------------|-------|
//! | semantic classifier | [`SemanticClass`] | [`builtin::light_semantic`] |
//! | grammar (TextMate scopes) | dotted strings, see [`scope`] | [`builtin::light_scopes`] |
//! | lexer | [`LexTokenKind`] | [`builtin::light_lexer`] |
//!
//! A renderer picks the theme matching the tokenizer that produced its
//! spans. The closed vocabularies make a mismatched pairing a type error;
//! scope themes simply miss on foreign keys and fall back to default
//! styling - lookups never fail.
//!
//! # Example
//!
//! ```
//! use madder::{SemanticClass, builtin};
//!
//! let theme = builtin::light_semantic();
//! let style = theme.style_for(&SemanticClass::Keyword);
//! assert_eq!(style.color.unwrap().css_hex(), "#0000ff");
//! ```
//!
//! Themes carry data, not rendering: the widget reads a span's style record
//! (or emits classes against [`stylesheet`]) and paints however it likes.

pub use madder_theme::{Color, CssDeclaration, Style, SyntaxColor, Theme, ThemeError,
    TokenCategory, builtin, css};
pub use madder_tokens::{LexTokenKind, SemanticClass, lexer, scope, semantic};

/// The full widget stylesheet: the shared block rule plus the rules of all
/// three built-in themes.
///
/// Each vocabulary gets its own namespace under `prefix` (`{prefix}-sem-…`,
/// `{prefix}-scope-…`, `{prefix}-lex-…`) so categories that happen to share
/// a name across back-ends cannot collide in CSS.
pub fn stylesheet(prefix: &str) -> String {
    let mut rules = String::new();
    rules.push_str(&css::block_rule(&builtin::common_block_style(), prefix));
    rules.push_str(&css::theme_rules(
        builtin::light_semantic(),
        &format!("{prefix}-sem"),
    ));
    rules.push_str(&css::theme_rules(
        builtin::light_scopes(),
        &format!("{prefix}-scope"),
    ));
    rules.push_str(&css::theme_rules(
        builtin::light_lexer(),
        &format!("{prefix}-lex"),
    ));
    rules
}
