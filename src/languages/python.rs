use super::{CaptureMode, ImportPattern, TokenHint};

/// `from x import y` captures the module part only; `import a, b` yields one
/// token per name. Leading dots (`from .sibling import x`) survive the
/// capture and are handled by the resolver's relative-path step.
pub(crate) fn patterns() -> Vec<ImportPattern> {
    vec![
        ImportPattern::new(
            r"(?m)^[ \t]*from[ \t]+([.\w]+)[ \t]+import\b",
            TokenHint::PackagePath,
            CaptureMode::Single,
        ),
        ImportPattern::new(
            r"(?m)^[ \t]*import[ \t]+([\w.]+(?:[ \t]*,[ \t]*[\w.]+)*)",
            TokenHint::PackagePath,
            CaptureMode::CommaList,
        ),
    ]
}
