//! The combined widget stylesheet.

use indoc::indoc;
use madder::stylesheet;

#[test]
fn starts_with_block_chrome_then_theme_rules() {
    let sheet = stylesheet("mdr");
    assert!(sheet.starts_with(indoc! {"
        .mdr-block { font-family: monospace; font-size: 90%; border: 1px solid rgba(0, 0, 0, 0.1); border-radius: 3px; overflow: auto; white-space: nowrap; }
        .mdr-sem-bigintLiteral { color: #09885a; }
    "}));
}

#[test]
fn namespaces_keep_shared_names_apart() {
    let sheet = stylesheet("mdr");
    // `comment` exists in all three vocabularies; each lands in its own
    // namespace with the same color.
    assert!(sheet.contains(".mdr-sem-comment { color: #008000; }"));
    assert!(sheet.contains(".mdr-scope-comment { color: #008000; }"));
    assert!(sheet.contains(".mdr-lex-comment { color: #008000; }"));
}

#[test]
fn one_rule_per_styled_entry() {
    // 1 block rule, 20 styled semantic entries (24 minus the 4 intentional
    // inherit-default records), 61 scope entries, 14 lexer entries.
    let sheet = stylesheet("mdr");
    assert_eq!(sheet.lines().count(), 1 + 20 + 61 + 14);
}

#[test]
fn every_rule_uses_the_canonical_color_property() {
    let sheet = stylesheet("mdr");
    for line in sheet.lines().skip(1) {
        assert!(line.contains("color: #"), "rule without color: {line}");
        assert!(!line.contains("colors"), "non-canonical property: {line}");
    }
}
