use depmap::core::extract;
use depmap::languages::{LanguageId, LanguageRegistry, TokenHint};

fn with_hints(lang: LanguageId, text: &str) -> Vec<(String, TokenHint)> {
    let registry = LanguageRegistry::new();
    extract(text, registry.patterns(lang))
        .map(|t| (t.text, t.hint))
        .collect()
}

#[test]
fn c_quoted_include_is_a_relative_path() {
    let src = "#include \"util.h\"\n#include <stdio.h>\n";
    assert_eq!(
        with_hints(LanguageId::C, src),
        vec![
            ("util.h".to_string(), TokenHint::RelativePath),
            ("stdio.h".to_string(), TokenHint::ModuleName),
        ]
    );
}

#[test]
fn c_include_tolerates_spacing_variants() {
    let src = "  #  include   \"a.h\"\n#include<vector>\n";
    assert_eq!(
        with_hints(LanguageId::Cpp, src),
        vec![
            ("a.h".to_string(), TokenHint::RelativePath),
            ("vector".to_string(), TokenHint::ModuleName),
        ]
    );
}

#[test]
fn cpp_module_imports() {
    let src = "export import my.module;\nimport other.part;\n";
    assert_eq!(
        with_hints(LanguageId::Cpp, src),
        vec![
            ("my.module".to_string(), TokenHint::PackagePath),
            ("other.part".to_string(), TokenHint::PackagePath),
        ]
    );
}
