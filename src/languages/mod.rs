pub mod c;
pub mod cpp;
pub mod csharp;
pub mod go;
pub mod java;
pub mod javascript;
pub mod kotlin;
pub mod python;
pub mod rust;
pub mod typescript;

use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Identifier for every language the scanner understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    C,
    Cpp,
    CSharp,
    Python,
    JavaScript,
    TypeScript,
    Rust,
    Go,
    Java,
    Kotlin,
}

impl LanguageId {
    pub const ALL: [LanguageId; 10] = [
        LanguageId::C,
        LanguageId::Cpp,
        LanguageId::CSharp,
        LanguageId::Python,
        LanguageId::JavaScript,
        LanguageId::TypeScript,
        LanguageId::Rust,
        LanguageId::Go,
        LanguageId::Java,
        LanguageId::Kotlin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LanguageId::C => "c",
            LanguageId::Cpp => "cpp",
            LanguageId::CSharp => "csharp",
            LanguageId::Python => "python",
            LanguageId::JavaScript => "javascript",
            LanguageId::TypeScript => "typescript",
            LanguageId::Rust => "rust",
            LanguageId::Go => "go",
            LanguageId::Java => "java",
            LanguageId::Kotlin => "kotlin",
        }
    }

    /// File extensions (lowercase, without the dot) owned by this language.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            LanguageId::C => &["c", "h"],
            LanguageId::Cpp => &["cpp", "hpp", "cc", "hh", "cxx", "hxx"],
            LanguageId::CSharp => &["cs"],
            LanguageId::Python => &["py", "pyi", "pyw"],
            LanguageId::JavaScript => &["js", "jsx", "mjs", "cjs"],
            LanguageId::TypeScript => &["ts", "tsx"],
            LanguageId::Rust => &["rs"],
            LanguageId::Go => &["go"],
            LanguageId::Java => &["java"],
            LanguageId::Kotlin => &["kt"],
        }
    }

    /// Basename probed when an import points at a directory rather than a
    /// file (`require('./lib')` -> `lib/index.js`, `mod foo;` -> `foo/mod.rs`,
    /// `from . import x` -> `__init__.py`).
    pub fn index_basename(self) -> Option<&'static str> {
        match self {
            LanguageId::JavaScript | LanguageId::TypeScript => Some("index"),
            LanguageId::Rust => Some("mod"),
            LanguageId::Python => Some("__init__"),
            _ => None,
        }
    }

    /// How many leading segments of a dotted package name survive when the
    /// token falls back to an external-module key. `os.path` -> `os` for
    /// Python, `java.util.List` -> `java.util` for Java.
    pub fn external_prefix_segments(self) -> usize {
        match self {
            LanguageId::Java | LanguageId::Kotlin | LanguageId::CSharp => 2,
            _ => 1,
        }
    }

    /// Node color used by the HTML renderer, by GitHub linguist convention.
    pub fn color(self) -> &'static str {
        match self {
            LanguageId::C => "#555555",
            LanguageId::Cpp => "#f34b7d",
            LanguageId::CSharp => "#178600",
            LanguageId::Python => "#3572A5",
            LanguageId::JavaScript => "#f1e05a",
            LanguageId::TypeScript => "#3178c6",
            LanguageId::Rust => "#dea584",
            LanguageId::Go => "#00add8",
            LanguageId::Java => "#b07219",
            LanguageId::Kotlin => "#a97bff",
        }
    }
}

/// Map a file path to its language by extension, case-insensitive. Compound
/// suffixes fall out naturally: `foo_test.go` has extension `go`. Unknown
/// extensions return `None` and the file is excluded from scanning.
pub fn language_for_path(path: &Path) -> Option<LanguageId> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    LanguageId::ALL
        .iter()
        .copied()
        .find(|lang| lang.extensions().contains(&ext.as_str()))
}

/// Classification hint attached to each pattern, forwarded to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenHint {
    /// Token is a filesystem path relative to the importing file.
    RelativePath,
    /// Token is a dotted / `::` / slash package path that may map into the
    /// project tree by suffix matching.
    PackagePath,
    /// Opaque module name; never looked up in the project tree.
    ModuleName,
}

/// How captured text is turned into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// The capture group is one token.
    Single,
    /// The capture group is a comma-separated list (`import a, b`).
    CommaList,
    /// The capture group contains quoted entries, one token each
    /// (Go `import ( ... )` blocks).
    QuotedList,
}

/// One import-recognition rule: a compiled regex with exactly one capture
/// group, plus how to interpret what it captures.
pub struct ImportPattern {
    pub regex: Regex,
    pub hint: TokenHint,
    pub mode: CaptureMode,
}

impl ImportPattern {
    pub(crate) fn new(pattern: &str, hint: TokenHint, mode: CaptureMode) -> Self {
        Self {
            regex: Regex::new(pattern).expect("static import pattern must compile"),
            hint,
            mode,
        }
    }
}

/// Static table of languages and their ordered import patterns. Patterns are
/// compiled once at construction; lookups are cheap after that.
pub struct LanguageRegistry {
    patterns: HashMap<LanguageId, Vec<ImportPattern>>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        let mut patterns = HashMap::with_capacity(LanguageId::ALL.len());
        for lang in LanguageId::ALL {
            let rules = match lang {
                LanguageId::C => c::patterns(),
                LanguageId::Cpp => cpp::patterns(),
                LanguageId::CSharp => csharp::patterns(),
                LanguageId::Python => python::patterns(),
                LanguageId::JavaScript => javascript::patterns(),
                LanguageId::TypeScript => typescript::patterns(),
                LanguageId::Rust => rust::patterns(),
                LanguageId::Go => go::patterns(),
                LanguageId::Java => java::patterns(),
                LanguageId::Kotlin => kotlin::patterns(),
            };
            patterns.insert(lang, rules);
        }
        Self { patterns }
    }

    pub fn patterns(&self, lang: LanguageId) -> &[ImportPattern] {
        self.patterns
            .get(&lang)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
