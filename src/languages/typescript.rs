use super::ImportPattern;

/// TypeScript import syntax is a superset of JavaScript's for our purposes:
/// `import type { X } from 'y'` and `type T = import('y')` are both caught by
/// the shared `from`/`import()` rules.
pub(crate) fn patterns() -> Vec<ImportPattern> {
    super::javascript::patterns()
}
