//! Built-in themes, one per tokenizer back-end.
//!
//! All three tables express the same light editor palette over their own
//! vocabulary. Entries reference [`SyntaxColor`] slots, never raw hex, so a
//! semantic concept keeps one color across back-ends.
//!
//! Each theme's own block record is empty: the shared block chrome lives in
//! [`common_block_style`] and is applied by the embedder regardless of which
//! back-end tokenized the content.

use madder_tokens::{LexTokenKind, SemanticClass};

use crate::palette::SyntaxColor;
use crate::style::Style;
use crate::theme::Theme;

/// Block chrome shared by every code block, whatever theme styles its spans.
pub const fn common_block_style() -> Style {
    Style {
        color: None,
        extra: &[
            ("font-family", "monospace"),
            ("font-size", "90%"),
            ("border", "1px solid rgba(0, 0, 0, 0.1)"),
            ("border-radius", "3px"),
            ("overflow", "auto"),
            ("white-space", "nowrap"),
        ],
    }
}

static LIGHT_SEMANTIC: Theme<SemanticClass> = Theme::new(
    &[
        (SemanticClass::BigintLiteral, Style::of(SyntaxColor::Numeric)),
        (SemanticClass::ClassName, Style::of(SyntaxColor::Types)),
        (SemanticClass::Comment, Style::of(SyntaxColor::Comment)),
        (
            SemanticClass::DocCommentTagName,
            Style::of(SyntaxColor::Keyword),
        ),
        (SemanticClass::EnumName, Style::of(SyntaxColor::Types)),
        (
            SemanticClass::Identifier,
            Style::of(SyntaxColor::VariableName),
        ),
        (SemanticClass::InterfaceName, Style::of(SyntaxColor::Types)),
        (SemanticClass::JsxAttribute, Style::of(SyntaxColor::Property)),
        (
            SemanticClass::JsxAttributeStringLiteralValue,
            Style::of(SyntaxColor::String),
        ),
        (SemanticClass::JsxCloseTagName, Style::of(SyntaxColor::Types)),
        (SemanticClass::JsxOpenTagName, Style::of(SyntaxColor::Types)),
        (
            SemanticClass::JsxSelfClosingTagName,
            Style::of(SyntaxColor::Types),
        ),
        // JSX text and plain text render with the block's own styling.
        (SemanticClass::JsxText, Style::EMPTY),
        (SemanticClass::Keyword, Style::of(SyntaxColor::Keyword)),
        (SemanticClass::ModuleName, Style::EMPTY),
        (
            SemanticClass::NumericLiteral,
            Style::of(SyntaxColor::Numeric),
        ),
        // The classifier's `operator` covers brackets and separators too, so
        // it takes the punctuation slot rather than `Operator`.
        (SemanticClass::Operator, Style::of(SyntaxColor::Punctuation)),
        (
            SemanticClass::ParameterName,
            Style::of(SyntaxColor::VariableName),
        ),
        (
            SemanticClass::Punctuation,
            Style::of(SyntaxColor::Punctuation),
        ),
        (SemanticClass::StringLiteral, Style::of(SyntaxColor::String)),
        (SemanticClass::Text, Style::EMPTY),
        (SemanticClass::TypeAliasName, Style::of(SyntaxColor::Types)),
        (
            SemanticClass::TypeParameterName,
            Style::of(SyntaxColor::Types),
        ),
        (SemanticClass::WhiteSpace, Style::EMPTY),
    ],
    Style::EMPTY,
);

static LIGHT_SCOPES: Theme<&'static str> = Theme::new(
    &[
        ("storage.modifier", Style::of(SyntaxColor::Keyword)),
        ("storage.type", Style::of(SyntaxColor::Keyword)),
        ("keyword.control", Style::of(SyntaxColor::Keyword)),
        ("keyword.other", Style::of(SyntaxColor::Keyword)),
        ("keyword.operator.expression", Style::of(SyntaxColor::Keyword)),
        ("keyword.operator.new", Style::of(SyntaxColor::Keyword)),
        ("keyword.generator.asterisk", Style::of(SyntaxColor::Keyword)),
        (
            "punctuation.definition.template-expression",
            Style::of(SyntaxColor::Keyword),
        ),
        ("support.type", Style::of(SyntaxColor::Keyword)),
        ("constant.language", Style::of(SyntaxColor::Keyword)),
        ("variable.language", Style::of(SyntaxColor::Keyword)),
        ("string", Style::of(SyntaxColor::String)),
        (
            "punctuation.definition.string",
            Style::of(SyntaxColor::String),
        ),
        ("constant.character", Style::of(SyntaxColor::String)),
        (
            "keyword.control.anchor.regexp",
            Style::of(SyntaxColor::Regexp),
        ),
        (
            "keyword.other.back-reference.regexp",
            Style::of(SyntaxColor::Regexp),
        ),
        (
            "keyword.operator.quantifier.regexp",
            Style::of(SyntaxColor::Regexp),
        ),
        ("keyword.operator.or.regexp", Style::of(SyntaxColor::Regexp)),
        (
            "keyword.operator.negation.regexp",
            Style::of(SyntaxColor::Regexp),
        ),
        (
            "punctuation.definition.group.regexp",
            Style::of(SyntaxColor::Regexp),
        ),
        (
            "punctuation.definition.group.assertion.regexp",
            Style::of(SyntaxColor::Regexp),
        ),
        (
            "meta.assertion.look-ahead.regexp",
            Style::of(SyntaxColor::Regexp),
        ),
        (
            "meta.assertion.negative-look-ahead.regexp",
            Style::of(SyntaxColor::Regexp),
        ),
        (
            "punctuation.definition.group.capture.regexp",
            Style::of(SyntaxColor::Regexp),
        ),
        (
            "punctuation.definition.character-class.regexp",
            Style::of(SyntaxColor::Regexp),
        ),
        (
            "constant.other.character-class.range.regexp",
            Style::of(SyntaxColor::Regexp),
        ),
        ("constant.numeric", Style::of(SyntaxColor::Numeric)),
        (
            "meta.delimiter.decimal.period.tsx",
            Style::of(SyntaxColor::Numeric),
        ),
        ("constant.language.nan.tsx", Style::of(SyntaxColor::Numeric)),
        (
            "constant.language.infinity.tsx",
            Style::of(SyntaxColor::Numeric),
        ),
        ("keyword.operator", Style::of(SyntaxColor::Operator)),
        (
            "storage.type.function.arrow.tsx",
            Style::of(SyntaxColor::Operator),
        ),
        ("meta.brace.angle.tsx", Style::of(SyntaxColor::Punctuation)),
        ("meta.brace.round.tsx", Style::of(SyntaxColor::Punctuation)),
        ("meta.brace.square.tsx", Style::of(SyntaxColor::Punctuation)),
        ("punctuation", Style::of(SyntaxColor::Punctuation)),
        (
            "constant.language.import-export-all.tsx",
            Style::of(SyntaxColor::Punctuation),
        ),
        (
            "meta.delimiter.object.comma.tsx",
            Style::of(SyntaxColor::Punctuation),
        ),
        ("comment", Style::of(SyntaxColor::Comment)),
        ("comment.block.tsx", Style::of(SyntaxColor::Comment)),
        (
            "comment.line.double-slash.tsx",
            Style::of(SyntaxColor::Comment),
        ),
        (
            "punctuation.definition.comment.tsx",
            Style::of(SyntaxColor::Comment),
        ),
        (
            "comment.block.documentation.tsx",
            Style::of(SyntaxColor::Comment),
        ),
        ("other.meta.jsdoc", Style::of(SyntaxColor::Comment)),
        ("other.description.jsdoc", Style::of(SyntaxColor::Comment)),
        (
            "entity.name.type.instance.jsdoc",
            Style::of(SyntaxColor::VariableName),
        ),
        ("variable.other.jsdoc", Style::of(SyntaxColor::VariableName)),
        ("storage.type.class.jsdoc", Style::of(SyntaxColor::Types)),
        ("entity.name.type.class.tsx", Style::of(SyntaxColor::Types)),
        (
            "entity.name.type.module.tsx",
            Style::of(SyntaxColor::ControlFlow),
        ),
        ("entity.name.type.enum.tsx", Style::of(SyntaxColor::Types)),
        ("entity.name.function", Style::of(SyntaxColor::Function)),
        ("entity.name.type", Style::of(SyntaxColor::Types)),
        (
            "meta.template.expression.tsx",
            Style::of(SyntaxColor::Types),
        ),
        ("variable", Style::of(SyntaxColor::VariableName)),
        (
            "entity.other.inherited-class.tsx",
            Style::of(SyntaxColor::Types),
        ),
        (
            "constant.language.undefined.tsx",
            Style::of(SyntaxColor::Keyword),
        ),
        (
            "variable.language.arguments.tsx",
            Style::of(SyntaxColor::VariableName),
        ),
        ("support.type.object", Style::of(SyntaxColor::VariableName)),
        ("entity.name.tag", Style::of(SyntaxColor::Types)),
        (
            "entity.other.attribute-name",
            Style::of(SyntaxColor::VariableName),
        ),
    ],
    Style::EMPTY,
);

static LIGHT_LEXER: Theme<LexTokenKind> = Theme::new(
    &[
        (LexTokenKind::Boolean, Style::of(SyntaxColor::Keyword)),
        (LexTokenKind::Builtin, Style::of(SyntaxColor::VariableName)),
        (LexTokenKind::ClassName, Style::of(SyntaxColor::Types)),
        (LexTokenKind::Comment, Style::of(SyntaxColor::Comment)),
        (LexTokenKind::Constant, Style::of(SyntaxColor::VariableName)),
        (LexTokenKind::Function, Style::of(SyntaxColor::Function)),
        (
            LexTokenKind::FunctionVariable,
            Style::of(SyntaxColor::Function),
        ),
        (LexTokenKind::Keyword, Style::of(SyntaxColor::Keyword)),
        (LexTokenKind::Number, Style::of(SyntaxColor::Numeric)),
        (LexTokenKind::Operator, Style::of(SyntaxColor::Operator)),
        (
            LexTokenKind::Punctuation,
            Style::of(SyntaxColor::Punctuation),
        ),
        (LexTokenKind::Regex, Style::of(SyntaxColor::Regexp)),
        (LexTokenKind::String, Style::of(SyntaxColor::String)),
        // The lexer cannot see type positions, so its `keyword-type` kind
        // approximates them with the keyword slot.
        (LexTokenKind::Type, Style::of(SyntaxColor::Keyword)),
    ],
    Style::EMPTY,
);

/// The light theme for the semantic classifier back-end.
pub fn light_semantic() -> &'static Theme<SemanticClass> {
    &LIGHT_SEMANTIC
}

/// The light theme for the grammar back-end.
pub fn light_scopes() -> &'static Theme<&'static str> {
    &LIGHT_SCOPES
}

/// The light theme for the lexer back-end.
pub fn light_lexer() -> &'static Theme<LexTokenKind> {
    &LIGHT_LEXER
}

#[cfg(test)]
mod tests {
    use super::*;
    use madder_tokens::{lexer, scope, semantic};

    #[test]
    fn semantic_theme_covers_the_whole_vocabulary() {
        for class in semantic::ALL {
            assert!(
                LIGHT_SEMANTIC.entries().any(|(key, _)| key == class),
                "no entry for {class:?}"
            );
        }
        assert_eq!(LIGHT_SEMANTIC.len(), semantic::ALL.len());
    }

    #[test]
    fn lexer_theme_covers_the_whole_vocabulary() {
        for kind in lexer::ALL {
            assert!(
                LIGHT_LEXER.entries().any(|(key, _)| key == kind),
                "no entry for {kind:?}"
            );
        }
        assert_eq!(LIGHT_LEXER.len(), lexer::ALL.len());
    }

    #[test]
    fn scope_theme_keys_are_well_formed() {
        for (key, _) in LIGHT_SCOPES.entries() {
            assert!(scope::is_well_formed(key), "malformed scope key `{key}`");
        }
    }

    #[test]
    fn no_builtin_table_maps_a_category_twice() {
        assert!(LIGHT_SEMANTIC.find_duplicate().is_none());
        assert!(LIGHT_SCOPES.find_duplicate().is_none());
        assert!(LIGHT_LEXER.find_duplicate().is_none());
    }

    #[test]
    fn block_records_are_empty_chrome_is_shared() {
        assert!(LIGHT_SEMANTIC.block_style().is_empty());
        assert!(LIGHT_SCOPES.block_style().is_empty());
        assert!(LIGHT_LEXER.block_style().is_empty());
        assert!(!common_block_style().is_empty());
        assert!(
            common_block_style()
                .extra
                .iter()
                .any(|(property, value)| *property == "font-family" && *value == "monospace")
        );
    }
}
