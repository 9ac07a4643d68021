//! The shared semantic color palette.
//!
//! Theme tables never spell out raw hex values; each entry names the palette
//! slot it means. That keeps the meaning of a color stable across the three
//! tokenizer back-ends - a span that is "a comment" gets the same green
//! whether the grammar, the lexer, or the semantic classifier said so.

use crate::style::Color;

/// A palette slot: the semantic role a color plays in a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxColor {
    Function,
    Types,
    ControlFlow,
    VariableName,
    Regexp,
    Comment,
    Keyword,
    Numeric,
    String,
    Property,
    Punctuation,
    Operator,
}

impl SyntaxColor {
    /// The color assigned to this slot.
    pub const fn color(self) -> Color {
        match self {
            SyntaxColor::Function => Color::new(0x79, 0x5e, 0x26),
            SyntaxColor::Types => Color::new(0x26, 0x7f, 0x99),
            SyntaxColor::ControlFlow => Color::new(0xaf, 0x00, 0xdb),
            SyntaxColor::VariableName => Color::new(0x00, 0x10, 0x80),
            SyntaxColor::Regexp => Color::new(0xd1, 0x69, 0x69),
            SyntaxColor::Comment => Color::new(0x00, 0x80, 0x00),
            SyntaxColor::Keyword => Color::new(0x00, 0x00, 0xff),
            SyntaxColor::Numeric => Color::new(0x09, 0x88, 0x5a),
            SyntaxColor::String => Color::new(0xa3, 0x15, 0x15),
            SyntaxColor::Property => Color::new(0x04, 0x51, 0xa5),
            SyntaxColor::Punctuation => Color::new(0x00, 0x00, 0x00),
            SyntaxColor::Operator => Color::new(0x00, 0x00, 0x00),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_resolve_to_documented_values() {
        assert_eq!(SyntaxColor::Function.color().css_hex(), "#795e26");
        assert_eq!(SyntaxColor::Types.color().css_hex(), "#267f99");
        assert_eq!(SyntaxColor::ControlFlow.color().css_hex(), "#af00db");
        assert_eq!(SyntaxColor::VariableName.color().css_hex(), "#001080");
        assert_eq!(SyntaxColor::Regexp.color().css_hex(), "#d16969");
        assert_eq!(SyntaxColor::Comment.color().css_hex(), "#008000");
        assert_eq!(SyntaxColor::Keyword.color().css_hex(), "#0000ff");
        assert_eq!(SyntaxColor::Numeric.color().css_hex(), "#09885a");
        assert_eq!(SyntaxColor::String.color().css_hex(), "#a31515");
        assert_eq!(SyntaxColor::Property.color().css_hex(), "#0451a5");
        assert_eq!(SyntaxColor::Punctuation.color().css_hex(), "#000000");
        assert_eq!(SyntaxColor::Operator.color().css_hex(), "#000000");
    }
}
