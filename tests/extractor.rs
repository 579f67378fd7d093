use depmap::core::extract;
use depmap::languages::{LanguageId, LanguageRegistry};

fn tokens(lang: LanguageId, text: &str) -> Vec<String> {
    let registry = LanguageRegistry::new();
    extract(text, registry.patterns(lang))
        .map(|t| t.text)
        .collect()
}

#[test]
fn extractor_yields_tokens_in_textual_order() {
    let src = "import os\nx = 1\nfrom sys import path\nimport json\n";
    assert_eq!(tokens(LanguageId::Python, src), vec!["os", "sys", "json"]);
}

#[test]
fn extractor_is_deterministic_and_restartable() {
    let registry = LanguageRegistry::new();
    let src = "use foo;\nmod bar;\nuse baz::qux;\n";
    let patterns = registry.patterns(LanguageId::Rust);

    let first: Vec<_> = extract(src, patterns).map(|t| t.text).collect();
    let second: Vec<_> = extract(src, patterns).map(|t| t.text).collect();

    assert_eq!(first, vec!["foo", "bar", "baz::qux"]);
    assert_eq!(first, second);
}

#[test]
fn extractor_handles_multiple_matches_on_one_line() {
    let src = "const a = require('x'); const b = require('y');\n";
    assert_eq!(tokens(LanguageId::JavaScript, src), vec!["x", "y"]);
}

#[test]
fn extractor_returns_nothing_for_empty_text() {
    assert!(tokens(LanguageId::Python, "").is_empty());
}

#[test]
fn extractor_tolerates_irregular_whitespace() {
    let src = "   import     collections\n\t#include\t\"x.h\"\n";
    assert_eq!(tokens(LanguageId::Python, src), vec!["collections"]);
    assert_eq!(tokens(LanguageId::C, src), vec!["x.h"]);
}
