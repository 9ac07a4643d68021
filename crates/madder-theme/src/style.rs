//! Colors and style records.

use crate::palette::SyntaxColor;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like "#ff0000" or "ff0000".
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Format as a lowercase CSS hex value (`#rrggbb`).
    pub fn css_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A single CSS declaration: (property, value).
pub type CssDeclaration = (&'static str, &'static str);

/// A style record: the presentational attributes applied to a span of a
/// given category, or to the enclosing block.
///
/// The empty record means "no override, inherit the surrounding style" -
/// it is what lookups return for categories a theme leaves unstyled and for
/// categories a theme does not know at all.
///
/// The foreground color always serializes under the CSS property name
/// `color`; there is no alternate spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color. `None` means no override.
    pub color: Option<Color>,
    /// Extra CSS declarations beyond the color (block chrome: fonts,
    /// borders, overflow behavior).
    pub extra: &'static [CssDeclaration],
}

impl Style {
    /// The empty record: no override at all.
    pub const EMPTY: Style = Style {
        color: None,
        extra: &[],
    };

    /// A record that applies one palette slot as the foreground color.
    pub const fn of(slot: SyntaxColor) -> Style {
        Style {
            color: Some(slot.color()),
            extra: &[],
        }
    }

    /// A record with an arbitrary foreground color.
    pub const fn with_color(color: Color) -> Style {
        Style {
            color: Some(color),
            extra: &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.extra.is_empty()
    }
}
