use super::{CaptureMode, ImportPattern, TokenHint};

/// Like Java but without the mandatory semicolon, and with optional
/// `as` aliases.
pub(crate) fn patterns() -> Vec<ImportPattern> {
    vec![ImportPattern::new(
        r"(?m)^[ \t]*import[ \t]+([\w.]+?)(?:\.\*)?(?:[ \t]+as[ \t]+\w+)?[ \t\r]*$",
        TokenHint::PackagePath,
        CaptureMode::Single,
    )]
}
