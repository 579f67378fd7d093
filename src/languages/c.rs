use super::{CaptureMode, ImportPattern, TokenHint};

/// `#include "local.h"` resolves against the tree; `#include <stdio.h>` is a
/// system header and always ends up as an external node.
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
    ]
}
