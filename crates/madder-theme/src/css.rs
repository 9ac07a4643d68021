//! CSS rule generation from themes.
//!
//! Rendering the widget is out of this crate's hands; what it does own is
//! turning a theme into the stylesheet the widget's markup references. Each
//! token category becomes one class rule, and the foreground always goes out
//! under the `color` property.

use std::fmt::Write;

use crate::style::Style;
use crate::theme::{Theme, TokenCategory};

/// Build a CSS class name for a category: `prefix-` plus the category name
/// with every non-alphanumeric character folded to `-`.
///
/// # Example
/// ```
/// use madder_theme::css;
///
/// assert_eq!(css::class_name("mdr", "comment.block.tsx"), "mdr-comment-block-tsx");
/// assert_eq!(css::class_name("mdr", "jsxAttribute"), "mdr-jsxAttribute");
/// ```
pub fn class_name(prefix: &str, category: &str) -> String {
    let mut class = String::with_capacity(prefix.len() + 1 + category.len());
    class.push_str(prefix);
    class.push('-');
    for c in category.chars() {
        class.push(if c.is_ascii_alphanumeric() { c } else { '-' });
    }
    class
}

/// Emit one rule per non-empty token record, in declaration order.
///
/// Empty records mean "inherit" and produce no rule at all.
pub fn theme_rules<K: TokenCategory>(theme: &Theme<K>, prefix: &str) -> String {
    let mut css = String::new();
    for (category, style) in theme.entries() {
        if style.is_empty() {
            continue;
        }
        writeln!(
            css,
            ".{} {{ {} }}",
            class_name(prefix, category.name()),
            declarations(style)
        )
        .unwrap();
    }
    css
}

/// Emit the rule for a block record, or nothing for an empty record.
pub fn block_rule(style: &Style, prefix: &str) -> String {
    if style.is_empty() {
        return String::new();
    }
    format!(".{} {{ {} }}\n", class_name(prefix, "block"), declarations(style))
}

fn declarations(style: &Style) -> String {
    let mut parts = Vec::new();
    if let Some(color) = style.color {
        parts.push(format!("color: {};", color.css_hex()));
    }
    for (property, value) in style.extra {
        parts.push(format!("{property}: {value};"));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use crate::palette::SyntaxColor;
    use madder_tokens::LexTokenKind;

    #[test]
    fn rules_use_the_canonical_color_property() {
        for rules in [
            theme_rules(builtin::light_semantic(), "mdr"),
            theme_rules(builtin::light_scopes(), "mdr"),
            theme_rules(builtin::light_lexer(), "mdr"),
        ] {
            for line in rules.lines() {
                assert!(
                    line.contains("color: #"),
                    "rule without a color declaration: {line}"
                );
                assert!(
                    !line.contains("colors"),
                    "rule with a non-canonical property: {line}"
                );
            }
        }
    }

    #[test]
    fn empty_records_emit_no_rule() {
        let rules = theme_rules(builtin::light_semantic(), "mdr");
        assert!(!rules.contains("jsxText"));
        assert!(!rules.contains("whiteSpace"));
        assert!(rules.contains(".mdr-comment { color: #008000; }"));
    }

    #[test]
    fn scope_dots_fold_to_dashes() {
        let rules = theme_rules(builtin::light_scopes(), "mdr");
        assert!(rules.contains(".mdr-keyword-control { color: #0000ff; }"));
        assert!(rules.contains(".mdr-comment-line-double-slash-tsx { color: #008000; }"));
    }

    #[test]
    fn block_rule_carries_the_chrome() {
        let rule = block_rule(&builtin::common_block_style(), "mdr");
        assert!(rule.starts_with(".mdr-block { "));
        assert!(rule.contains("font-family: monospace;"));
        assert!(rule.contains("border-radius: 3px;"));
        assert!(!rule.contains("color: #"));
    }

    #[test]
    fn empty_block_record_emits_nothing() {
        assert_eq!(block_rule(&Style::EMPTY, "mdr"), "");
    }

    #[test]
    fn rule_shape_matches_declared_record() {
        static THEME: Theme<LexTokenKind> = Theme::new(
            &[(LexTokenKind::Regex, Style::of(SyntaxColor::Regexp))],
            Style::EMPTY,
        );
        assert_eq!(
            theme_rules(&THEME, "mdr"),
            ".mdr-regex { color: #d16969; }\n"
        );
    }
}
