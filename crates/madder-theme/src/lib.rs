//! Theme support for madder code-block rendering.
//!
//! This crate provides:
//! - The shared semantic color palette ([`SyntaxColor`])
//! - Style records and the generic theme table ([`Style`], [`Theme`])
//! - Built-in themes, one per tokenizer back-end ([`builtin`])
//! - CSS rule generation ([`css`])
//! - Theme parsing from TOML files (behind the `toml` feature)
//!
//! # Architecture
//!
//! The theming system has three layers:
//!
//! 1. **Token categories** - the vocabulary a tokenizer back-end emits
//!    (defined in `madder-tokens`; each back-end owns its own key type)
//!
//! 2. **Palette slots** - a fixed set of semantic colors ([`SyntaxColor`])
//!    shared by every theme, so that "the comment color" is one value no
//!    matter which back-end produced the span
//!
//! 3. **Theme tables** - an immutable mapping from category to style record,
//!    plus one style record for the enclosing block
//!
//! Lookups never fail: a category with no entry styles as [`Style::EMPTY`],
//! which means "inherit the surrounding style". That is the fallback policy,
//! not an error path.

pub mod builtin;
pub mod css;
pub mod palette;
pub mod style;
pub mod theme;

pub use palette::SyntaxColor;
pub use style::{Color, CssDeclaration, Style};
pub use theme::{Theme, ThemeError, TokenCategory};
