use super::{CaptureMode, ImportPattern, TokenHint};

/// `using` directives, including `global using` and `using static`. The
/// trailing `;` keeps `using var f = ...` statements and `using Foo = ...`
/// aliases from matching.
pub(crate) fn patterns() -> Vec<ImportPattern> {
    vec![ImportPattern::new(
        r"(?m)^[ \t]*(?:global[ \t]+)?using[ \t]+(?:static[ \t]+)?([\w.]+)[ \t]*;",
        TokenHint::PackagePath,
        CaptureMode::Single,
    )]
}
