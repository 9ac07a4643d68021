//! The theme table: an immutable mapping from token category to style record.

use std::borrow::{Borrow, Cow};
use std::fmt;

use madder_tokens::{LexTokenKind, SemanticClass, scope};

use crate::style::Style;

#[cfg(feature = "toml")]
use crate::style::Color;

/// A token category key, as one of the tokenizer vocabularies defines it.
///
/// Implemented by the two closed vocabularies (`SemanticClass`,
/// `LexTokenKind`) and by `&'static str` for grammar scope names. The trait
/// is what lets [`Theme`] construction validate keys against the vocabulary
/// they claim to belong to.
pub trait TokenCategory: Clone + 'static {
    /// The category's wire name.
    fn name(&self) -> &str;

    /// Parse a wire name into a category of this vocabulary.
    ///
    /// Returns `None` for names outside the vocabulary (for scope names,
    /// anything that is not a well-formed dotted scope).
    fn parse(name: &str) -> Option<Self>
    where
        Self: Sized;
}

impl TokenCategory for SemanticClass {
    fn name(&self) -> &str {
        SemanticClass::name(*self)
    }

    fn parse(name: &str) -> Option<Self> {
        SemanticClass::parse(name)
    }
}

impl TokenCategory for LexTokenKind {
    fn name(&self) -> &str {
        LexTokenKind::name(*self)
    }

    fn parse(name: &str) -> Option<Self> {
        LexTokenKind::parse(name)
    }
}

impl TokenCategory for &'static str {
    fn name(&self) -> &str {
        self
    }

    fn parse(name: &str) -> Option<Self> {
        // Scope names are a small finite set in practice; leaking interns
        // them for the 'static key type.
        scope::is_well_formed(name).then(|| &*Box::leak(name.to_owned().into_boxed_str()))
    }
}

/// An immutable theme table for one tokenizer vocabulary.
///
/// Pairs a category-to-style mapping with one style record for the enclosing
/// block. Built-in themes are `'static` data; custom themes can be built at
/// runtime from entries or (with the `toml` feature) parsed from a file.
///
/// A renderer must pair a theme with the tokenizer whose vocabulary it is
/// keyed by. The closed vocabularies make a mismatch a type error; for scope
/// themes a mismatched category simply never matches and styles as
/// [`Style::EMPTY`].
#[derive(Debug, Clone)]
pub struct Theme<K: TokenCategory> {
    tokens: Cow<'static, [(K, Style)]>,
    block: Style,
}

impl<K: TokenCategory> Theme<K> {
    /// Build a theme from static entries.
    pub const fn new(tokens: &'static [(K, Style)], block: Style) -> Self {
        Self {
            tokens: Cow::Borrowed(tokens),
            block,
        }
    }

    /// Build a theme from owned entries, validating them.
    ///
    /// Rejects tables that map the same category twice; a duplicate would
    /// make lookup order-dependent.
    pub fn from_entries(tokens: Vec<(K, Style)>, block: Style) -> Result<Self, ThemeError> {
        let theme = Self {
            tokens: Cow::Owned(tokens),
            block,
        };
        if let Some(duplicate) = theme.find_duplicate() {
            return Err(ThemeError::DuplicateCategory(duplicate.name().to_owned()));
        }
        Ok(theme)
    }

    /// The style record for a token category.
    ///
    /// Returns the declared record verbatim, or [`Style::EMPTY`] when the
    /// category has no entry. Unknown categories are not an error: they
    /// degrade to default styling.
    ///
    /// # Example
    /// ```
    /// use madder_theme::{Style, builtin};
    /// use madder_tokens::SemanticClass;
    ///
    /// let theme = builtin::light_semantic();
    /// assert!(theme.style_for(&SemanticClass::Comment).color.is_some());
    ///
    /// let scopes = builtin::light_scopes();
    /// assert!(scopes.style_for("comment").color.is_some());
    /// assert_eq!(scopes.style_for("no.such.scope"), Style::EMPTY);
    /// ```
    pub fn style_for<Q>(&self, category: &Q) -> Style
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.tokens
            .iter()
            .find(|(key, _)| key.borrow() == category)
            .map(|(_, style)| *style)
            .unwrap_or(Style::EMPTY)
    }

    /// The style record for the enclosing block. Always defined; may be the
    /// empty record, meaning the caller's defaults apply.
    pub fn block_style(&self) -> Style {
        self.block
    }

    /// The (category, style) entries, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &(K, Style)> {
        self.tokens.iter()
    }

    /// Number of categories the theme maps.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Find a category that appears more than once, if any.
    pub fn find_duplicate(&self) -> Option<&K> {
        self.tokens.iter().enumerate().find_map(|(i, (key, _))| {
            self.tokens[..i]
                .iter()
                .any(|(prev, _)| prev.name() == key.name())
                .then_some(key)
        })
    }
}

#[cfg(feature = "toml")]
impl<K: TokenCategory> Theme<K> {
    /// Parse a custom theme from TOML.
    ///
    /// The file maps category names to `#rrggbb` color strings, with an
    /// optional `[block]` table that supports only `color` (block chrome
    /// such as fonts and borders stays with
    /// [`builtin::common_block_style`](crate::builtin::common_block_style)):
    ///
    /// ```toml
    /// [tokens]
    /// comment = "#008000"
    /// "keyword.control" = "#0000ff"
    ///
    /// [block]
    /// color = "#000000"
    /// ```
    ///
    /// Every key under `[tokens]` must belong to the theme's vocabulary;
    /// unknown categories are construction-time errors, unlike lookups,
    /// which silently default. That split is deliberate: a theme author
    /// misspelling a category wants to hear about it, a renderer hitting an
    /// unthemed span does not.
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        let table: toml::Table = source.parse().map_err(ThemeError::Toml)?;

        for key in table.keys() {
            if key != "tokens" && key != "block" {
                return Err(ThemeError::Malformed(format!(
                    "unexpected top-level key `{key}`"
                )));
            }
        }

        let mut tokens = Vec::new();
        if let Some(value) = table.get("tokens") {
            let entries = value
                .as_table()
                .ok_or_else(|| ThemeError::Malformed("`tokens` must be a table".to_owned()))?;
            for (name, value) in entries {
                let category = K::parse(name)
                    .ok_or_else(|| ThemeError::UnknownCategory(name.clone()))?;
                tokens.push((category, Style::with_color(parse_color(name, value)?)));
            }
        }

        let mut block = Style::EMPTY;
        if let Some(value) = table.get("block") {
            let entries = value
                .as_table()
                .ok_or_else(|| ThemeError::Malformed("`block` must be a table".to_owned()))?;
            for (key, value) in entries {
                if key != "color" {
                    return Err(ThemeError::Malformed(format!(
                        "`block` supports only `color`, got `{key}`"
                    )));
                }
                block = Style::with_color(parse_color("block", value)?);
            }
        }

        Self::from_entries(tokens, block)
    }
}

#[cfg(feature = "toml")]
fn parse_color(category: &str, value: &toml::Value) -> Result<Color, ThemeError> {
    let hex = value.as_str().ok_or_else(|| {
        ThemeError::Malformed(format!("value for `{category}` must be a color string"))
    })?;
    Color::parse_hex(hex).ok_or_else(|| ThemeError::InvalidColor {
        category: category.to_owned(),
        value: hex.to_owned(),
    })
}

/// Errors from explicit theme construction.
///
/// Lookups never produce these; only building a theme from untrusted entries
/// or a TOML file can fail.
#[derive(Debug)]
pub enum ThemeError {
    /// A color value did not parse as `#rrggbb`.
    InvalidColor { category: String, value: String },
    /// A category name outside the theme's vocabulary.
    UnknownCategory(String),
    /// A category mapped more than once.
    DuplicateCategory(String),
    /// A structurally invalid theme file.
    Malformed(String),
    /// The TOML source did not parse.
    #[cfg(feature = "toml")]
    Toml(toml::de::Error),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::InvalidColor { category, value } => {
                write!(f, "invalid color `{value}` for category `{category}`")
            }
            ThemeError::UnknownCategory(name) => {
                write!(f, "unknown token category `{name}`")
            }
            ThemeError::DuplicateCategory(name) => {
                write!(f, "token category `{name}` is mapped more than once")
            }
            ThemeError::Malformed(message) => write!(f, "malformed theme: {message}"),
            #[cfg(feature = "toml")]
            ThemeError::Toml(err) => write!(f, "failed to parse theme TOML: {err}"),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "toml")]
            ThemeError::Toml(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::SyntaxColor;

    static TINY: Theme<LexTokenKind> = Theme::new(
        &[
            (LexTokenKind::Comment, Style::of(SyntaxColor::Comment)),
            (LexTokenKind::Keyword, Style::of(SyntaxColor::Keyword)),
        ],
        Style::EMPTY,
    );

    #[test]
    fn lookup_returns_declared_record() {
        assert_eq!(
            TINY.style_for(&LexTokenKind::Comment),
            Style::of(SyntaxColor::Comment)
        );
    }

    #[test]
    fn lookup_misses_degrade_to_empty() {
        assert_eq!(TINY.style_for(&LexTokenKind::Regex), Style::EMPTY);
    }

    #[test]
    fn block_style_is_always_defined() {
        assert_eq!(TINY.block_style(), Style::EMPTY);
    }

    #[test]
    fn scope_theme_looks_up_by_str() {
        static SCOPES: Theme<&'static str> = Theme::new(
            &[("keyword.control", Style::of(SyntaxColor::Keyword))],
            Style::EMPTY,
        );
        assert_eq!(
            SCOPES.style_for("keyword.control"),
            Style::of(SyntaxColor::Keyword)
        );
        assert_eq!(SCOPES.style_for("keyword.other"), Style::EMPTY);
        assert_eq!(SCOPES.style_for("definitely invented"), Style::EMPTY);
    }

    #[test]
    fn from_entries_rejects_duplicates() {
        let result = Theme::from_entries(
            vec![
                (LexTokenKind::Comment, Style::of(SyntaxColor::Comment)),
                (LexTokenKind::Comment, Style::of(SyntaxColor::Keyword)),
            ],
            Style::EMPTY,
        );
        assert!(matches!(result, Err(ThemeError::DuplicateCategory(name)) if name == "comment"));
    }

    #[test]
    fn scope_parse_validates_shape() {
        assert!(<&'static str as TokenCategory>::parse("entity.name.function").is_some());
        assert!(<&'static str as TokenCategory>::parse("Not A Scope").is_none());
    }

    #[cfg(feature = "toml")]
    mod toml_themes {
        use super::*;

        #[test]
        fn parses_a_custom_theme() {
            let theme: Theme<LexTokenKind> = Theme::from_toml_str(
                r##"
                [tokens]
                comment = "#93a1a1"
                keyword = "#859900"

                [block]
                color = "#657b83"
                "##,
            )
            .unwrap();

            assert_eq!(
                theme.style_for(&LexTokenKind::Comment).color,
                Color::parse_hex("#93a1a1")
            );
            assert_eq!(theme.style_for(&LexTokenKind::String), Style::EMPTY);
            assert_eq!(
                theme.block_style().color,
                Color::parse_hex("#657b83")
            );
        }

        #[test]
        fn parses_scope_keys() {
            let theme: Theme<&'static str> = Theme::from_toml_str(
                r##"
                [tokens]
                "keyword.control" = "#859900"
                "##,
            )
            .unwrap();
            assert_eq!(
                theme.style_for("keyword.control").color,
                Color::parse_hex("#859900")
            );
        }

        #[test]
        fn rejects_unknown_categories() {
            let result: Result<Theme<LexTokenKind>, _> = Theme::from_toml_str(
                r##"
                [tokens]
                keywrod = "#859900"
                "##,
            );
            assert!(matches!(result, Err(ThemeError::UnknownCategory(name)) if name == "keywrod"));
        }

        #[test]
        fn rejects_bad_colors() {
            let result: Result<Theme<LexTokenKind>, _> = Theme::from_toml_str(
                r##"
                [tokens]
                keyword = "blue"
                "##,
            );
            assert!(matches!(
                result,
                Err(ThemeError::InvalidColor { value, .. }) if value == "blue"
            ));
        }

        #[test]
        fn rejects_unknown_block_keys() {
            let result: Result<Theme<LexTokenKind>, _> = Theme::from_toml_str(
                r##"
                [block]
                font-family = "monospace"
                "##,
            );
            assert!(matches!(result, Err(ThemeError::Malformed(_))));
        }

        #[test]
        fn rejects_invalid_toml() {
            let result: Result<Theme<LexTokenKind>, _> = Theme::from_toml_str("tokens = [");
            assert!(matches!(result, Err(ThemeError::Toml(_))));
        }
    }
}
