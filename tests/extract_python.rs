use depmap::core::extract;
use depmap::languages::{LanguageId, LanguageRegistry, TokenHint};

fn tokens(text: &str) -> Vec<String> {
    let registry = LanguageRegistry::new();
    extract(text, registry.patterns(LanguageId::Python))
        .map(|t| t.text)
        .collect()
}

#[test]
fn python_plain_and_from_imports() {
    let src = "import os\nfrom collections import OrderedDict\nimport os.path\n";
    assert_eq!(tokens(src), vec!["os", "collections", "os.path"]);
}

#[test]
fn python_comma_list_yields_one_token_per_name() {
    assert_eq!(tokens("import a, b , c\n"), vec!["a", "b", "c"]);
}

#[test]
fn python_alias_keeps_the_module_name() {
    assert_eq!(tokens("import numpy as np\n"), vec!["numpy"]);
}

#[test]
fn python_relative_imports_keep_leading_dots() {
    let src = "from . import siblings\nfrom ..pkg.mod import thing\n";
    assert_eq!(tokens(src), vec![".", "..pkg.mod"]);
}

#[test]
fn python_tokens_carry_package_hint() {
    let registry = LanguageRegistry::new();
    let hints: Vec<_> = extract("import os\n", registry.patterns(LanguageId::Python))
        .map(|t| t.hint)
        .collect();
    assert_eq!(hints, vec![TokenHint::PackagePath]);
}
