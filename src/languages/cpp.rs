use super::{CaptureMode, ImportPattern, TokenHint};

/// C includes plus C++20 module imports. `module foo;` declarations are not
/// dependencies and are deliberately not matched.
pub(crate) fn patterns() -> Vec<ImportPattern> {
    vec![
        ImportPattern::new(
            r#"(?m)^[ \t]*#[ \t]*include[ \t]*"([^"]+)""#,
            TokenHint::RelativePath,
            CaptureMode::Single,
        ),
        ImportPattern::new(
            r"(?m)^[ \t]*#[ \t]*include[ \t]*<([^>]+)>",
            TokenHint::ModuleName,
            CaptureMode::Single,
        ),
        ImportPattern::new(
            r"(?m)^[ \t]*(?:export[ \t]+)?import[ \t]+([\w.:]+)[ \t]*;",
            TokenHint::PackagePath,
            CaptureMode::Single,
        ),
    ]
}
