use super::{CaptureMode, ImportPattern, TokenHint};

/// CommonJS `require()`, ES `import ... from`, dynamic `import()`, and bare
/// side-effect imports. Tokens starting with `./` or `../` are resolved
/// against the tree; everything else is treated as an npm package.
pub(crate) fn patterns() -> Vec<ImportPattern> {
    vec![
        ImportPattern::new(
            r#"require\([ \t]*['"]([^'"]+)['"][ \t]*\)"#,
            TokenHint::ModuleName,
            CaptureMode::Single,
        ),
        ImportPattern::new(
            r#"\bfrom[ \t]+['"]([^'"]+)['"]"#,
            TokenHint::ModuleName,
            CaptureMode::Single,
        ),
        ImportPattern::new(
            r#"\bimport[ \t]*\([ \t]*['"]([^'"]+)['"][ \t]*\)"#,
            TokenHint::ModuleName,
            CaptureMode::Single,
        ),
        ImportPattern::new(
            r#"(?m)^[ \t]*import[ \t]+['"]([^'"]+)['"]"#,
            TokenHint::ModuleName,
            CaptureMode::Single,
        ),
    ]
}
