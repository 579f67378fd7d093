use super::{CaptureMode, ImportPattern, TokenHint};

/// Single-line imports (with optional alias) and `import ( ... )` blocks.
/// The block form is matched as one statement whose quoted entries each
/// become a token.
pub(crate) fn patterns() -> Vec<ImportPattern> {
    vec![
        ImportPattern::new(
            r#"(?m)^[ \t]*import[ \t]+(?:[\w.]+[ \t]+)?"([^"]+)""#,
            TokenHint::PackagePath,
            CaptureMode::Single,
        ),
        ImportPattern::new(
            r"(?s)\bimport[ \t]*\(([^)]*)\)",
            TokenHint::PackagePath,
            CaptureMode::QuotedList,
        ),
    ]
}
