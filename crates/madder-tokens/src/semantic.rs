//! Categories emitted by the semantic classifier back-end.
//!
//! The semantic classifier walks a typed syntax tree, so its vocabulary can
//! distinguish things a plain lexer cannot: class names from interface names,
//! parameter names from free identifiers, JSX tag positions from ordinary
//! punctuation. The set is closed - the classifier emits exactly these
//! categories and nothing else.

/// A classification assigned to a span by the semantic classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticClass {
    BigintLiteral,
    ClassName,
    Comment,
    DocCommentTagName,
    EnumName,
    Identifier,
    InterfaceName,
    JsxAttribute,
    JsxAttributeStringLiteralValue,
    JsxCloseTagName,
    JsxOpenTagName,
    JsxSelfClosingTagName,
    JsxText,
    Keyword,
    ModuleName,
    NumericLiteral,
    Operator,
    ParameterName,
    Punctuation,
    StringLiteral,
    Text,
    TypeAliasName,
    TypeParameterName,
    WhiteSpace,
}

/// Every classification, in order. The single source of truth for the
/// vocabulary - themes and tests iterate this rather than keeping their own
/// lists.
pub const ALL: &[SemanticClass] = &[
    SemanticClass::BigintLiteral,
    SemanticClass::ClassName,
    SemanticClass::Comment,
    SemanticClass::DocCommentTagName,
    SemanticClass::EnumName,
    SemanticClass::Identifier,
    SemanticClass::InterfaceName,
    SemanticClass::JsxAttribute,
    SemanticClass::JsxAttributeStringLiteralValue,
    SemanticClass::JsxCloseTagName,
    SemanticClass::JsxOpenTagName,
    SemanticClass::JsxSelfClosingTagName,
    SemanticClass::JsxText,
    SemanticClass::Keyword,
    SemanticClass::ModuleName,
    SemanticClass::NumericLiteral,
    SemanticClass::Operator,
    SemanticClass::ParameterName,
    SemanticClass::Punctuation,
    SemanticClass::StringLiteral,
    SemanticClass::Text,
    SemanticClass::TypeAliasName,
    SemanticClass::TypeParameterName,
    SemanticClass::WhiteSpace,
];

impl SemanticClass {
    /// The wire name the classifier uses for this category.
    pub const fn name(self) -> &'static str {
        match self {
            SemanticClass::BigintLiteral => "bigintLiteral",
            SemanticClass::ClassName => "className",
            SemanticClass::Comment => "comment",
            SemanticClass::DocCommentTagName => "docCommentTagName",
            SemanticClass::EnumName => "enumName",
            SemanticClass::Identifier => "identifier",
            SemanticClass::InterfaceName => "interfaceName",
            SemanticClass::JsxAttribute => "jsxAttribute",
            SemanticClass::JsxAttributeStringLiteralValue => "jsxAttributeStringLiteralValue",
            SemanticClass::JsxCloseTagName => "jsxCloseTagName",
            SemanticClass::JsxOpenTagName => "jsxOpenTagName",
            SemanticClass::JsxSelfClosingTagName => "jsxSelfClosingTagName",
            SemanticClass::JsxText => "jsxText",
            SemanticClass::Keyword => "keyword",
            SemanticClass::ModuleName => "moduleName",
            SemanticClass::NumericLiteral => "numericLiteral",
            SemanticClass::Operator => "operator",
            SemanticClass::ParameterName => "parameterName",
            SemanticClass::Punctuation => "punctuation",
            SemanticClass::StringLiteral => "stringLiteral",
            SemanticClass::Text => "text",
            SemanticClass::TypeAliasName => "typeAliasName",
            SemanticClass::TypeParameterName => "typeParameterName",
            SemanticClass::WhiteSpace => "whiteSpace",
        }
    }

    /// Parse a wire name back into its classification.
    ///
    /// Returns `None` for names outside the vocabulary.
    pub fn parse(name: &str) -> Option<Self> {
        ALL.iter().copied().find(|c| c.name() == name)
    }
}
