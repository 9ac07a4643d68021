//! Tokenizer category vocabularies for madder.
//!
//! This crate defines the category sets the supported tokenizer back-ends can
//! emit. Each back-end owns its own vocabulary, and the vocabularies are
//! deliberately disjoint types: a category from one back-end cannot index a
//! theme built for another.
//!
//! The three back-ends:
//!
//! 1. **Semantic classifier** ([`SemanticClass`]) - a type-aware classifier
//!    with a closed set of classifications (`className`, `jsxAttribute`, …)
//!
//! 2. **Grammar scopes** ([`scope`]) - a TextMate-style grammar emitting open,
//!    dotted scope names (`keyword.control`, `comment.block.tsx`, …)
//!
//! 3. **Lexer** ([`LexTokenKind`]) - a lightweight lexer with a closed set of
//!    token kinds (`keyword`, `string`, `class-name`, …)

pub mod lexer;
pub mod scope;
pub mod semantic;

pub use lexer::LexTokenKind;
pub use semantic::SemanticClass;
