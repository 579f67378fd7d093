use super::{CaptureMode, ImportPattern, TokenHint};

/// `import` and `import static` declarations; wildcard `.*` suffixes are
/// dropped by the lazy capture.
pub(crate) fn patterns() -> Vec<ImportPattern> {
    vec![ImportPattern::new(
        r"(?m)^[ \t]*import[ \t]+(?:static[ \t]+)?([\w.]+?)(?:\.\*)?[ \t]*;",
        TokenHint::PackagePath,
        CaptureMode::Single,
    )]
}
