use super::{CaptureMode, ImportPattern, TokenHint};

/// `use` paths (the part before any `{` group), `mod` declarations, and
/// legacy `extern crate`. `use util::{a, b}` captures `util`; the resolver
/// strips leading `crate`/`self`/`super` segments.
pub(crate) fn patterns() -> Vec<ImportPattern> {
    vec![
        ImportPattern::new(
            r"(?m)^[ \t]*(?:pub(?:\([\w: ]*\))?[ \t]+)?use[ \t]+(?:::)?(\w+(?:::\w+)*)",
            TokenHint::PackagePath,
            CaptureMode::Single,
        ),
        ImportPattern::new(
            r"(?m)^[ \t]*(?:pub(?:\([\w: ]*\))?[ \t]+)?mod[ \t]+(\w+)[ \t]*;",
            TokenHint::RelativePath,
            CaptureMode::Single,
        ),
        ImportPattern::new(
            r"(?m)^[ \t]*extern[ \t]+crate[ \t]+(\w+)",
            TokenHint::PackagePath,
            CaptureMode::Single,
        ),
    ]
}
