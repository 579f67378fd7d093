use std::collections::{HashMap, HashSet};

use crate::core::extractor::ImportToken;
use crate::languages::{LanguageId, TokenHint};

/// Index over every discovered project file, built once after the discovery
/// pass. Resolution never touches the filesystem; everything is answered
/// from here.
#[derive(Debug, Default)]
pub struct ProjectIndex {
    paths: HashSet<String>,
    by_stem: HashMap<String, Vec<String>>,
}

impl ProjectIndex {
    pub fn new<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut index = Self::default();
        for path in paths {
            index.insert(path);
        }
        index
    }

    fn insert(&mut self, path: String) {
        self.by_stem
            .entry(stem_of(&path).to_string())
            .or_default()
            .push(path.clone());
        self.paths.insert(path);
    }

    /// Drop a file that failed to decode during extraction, so edges never
    /// point at files missing from the final node set.
    pub fn remove(&mut self, path: &str) {
        if self.paths.remove(path) {
            if let Some(entries) = self.by_stem.get_mut(stem_of(path)) {
                entries.retain(|p| p != path);
            }
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn with_stem(&self, stem: &str) -> &[String] {
        self.by_stem
            .get(stem)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Outcome of resolving one raw token against the project index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Token maps to a project file (tree-relative path).
    Local(String),
    /// Token did not match any project file; normalized external-module key.
    External(String),
    /// Token resolved back to the importing file; no edge is emitted.
    SelfImport,
}

pub struct ImportResolver<'a> {
    index: &'a ProjectIndex,
}

impl<'a> ImportResolver<'a> {
    pub fn new(index: &'a ProjectIndex) -> Self {
        Self { index }
    }

    /// Resolution policy, first success wins:
    /// 1. relative-path form, normalized against the importer's directory;
    /// 2. package-path suffix match against known files, shrinking the
    ///    window on zero matches and falling back to external on ambiguity;
    /// 3. external module with a per-language normalized key.
    pub fn resolve(&self, token: &ImportToken, importer: &str, lang: LanguageId) -> Resolution {
        let text = token.text.trim().trim_end_matches(';').trim();
        if text.is_empty() {
            return Resolution::SelfImport;
        }

        if let Some(path) = self.try_relative(text, token.hint, importer, lang) {
            return if path == importer {
                Resolution::SelfImport
            } else {
                Resolution::Local(path)
            };
        }

        if token.hint == TokenHint::PackagePath && !starts_relative(text) {
            if let Some(path) = self.try_package(text, importer, lang) {
                return if path == importer {
                    Resolution::SelfImport
                } else {
                    Resolution::Local(path)
                };
            }
        }

        Resolution::External(external_key(text, token.hint, lang))
    }

    fn try_relative(
        &self,
        text: &str,
        hint: TokenHint,
        importer: &str,
        lang: LanguageId,
    ) -> Option<String> {
        let rel = relative_form(text, hint, lang)?;
        let importer_dir = dir_of(importer);

        if let Some(base) = join_normalized(importer_dir, &rel) {
            if let Some(path) = self.probe(&base, lang) {
                return Some(path);
            }
        }

        // Quoted C/C++ includes are also commonly resolved against the
        // tree root (-I style include dirs).
        if hint == TokenHint::RelativePath && !text.starts_with('.') {
            if let Some(base) = join_normalized("", &rel) {
                if let Some(path) = self.probe(&base, lang) {
                    return Some(path);
                }
            }
        }

        None
    }

    /// Probe a normalized candidate path: as written, with each of the
    /// language's extensions appended, then as a directory index file.
    fn probe(&self, base: &str, lang: LanguageId) -> Option<String> {
        if !base.is_empty() {
            if self.index.contains(base) {
                return Some(base.to_string());
            }
            for ext in lang.extensions() {
                let candidate = format!("{base}.{ext}");
                if self.index.contains(&candidate) {
                    return Some(candidate);
                }
            }
        }
        if let Some(idx) = lang.index_basename() {
            for ext in lang.extensions() {
                let candidate = if base.is_empty() {
                    format!("{idx}.{ext}")
                } else {
                    format!("{base}/{idx}.{ext}")
                };
                if self.index.contains(&candidate) {
                    return Some(candidate);
                }
            }
        }
        None
    }

    fn try_package(&self, text: &str, importer: &str, lang: LanguageId) -> Option<String> {
        let segments = package_segments(text);
        if segments.is_empty() {
            return None;
        }
        let importer_dir = dir_of(importer);

        // Shrink the window from the full token down to one segment:
        // trailing segments are often items inside a module rather than
        // files (`use util::helper` -> util.rs).
        for window in (1..=segments.len()).rev() {
            let stem = segments[window - 1];
            let dirs = &segments[..window - 1];
            let matches: Vec<&String> = self
                .index
                .with_stem(stem)
                .iter()
                .filter(|path| has_language_extension(path, lang) && dir_suffix_matches(path, dirs))
                .collect();

            match matches.len() {
                0 => continue,
                1 => return Some(matches[0].clone()),
                _ => {
                    // Ambiguity tie-break: the candidate nearest to the
                    // importer wins; if two are equally near, resolution
                    // falls back to external rather than guessing.
                    return nearest_unique(&matches, importer_dir);
                }
            }
        }
        None
    }
}

fn starts_relative(text: &str) -> bool {
    text.starts_with("./") || text.starts_with("../")
}

/// Convert a token into a relative path when it has one, otherwise `None`.
fn relative_form(text: &str, hint: TokenHint, lang: LanguageId) -> Option<String> {
    let text = text.replace('\\', "/");

    // Python relative imports spell the parent hops with dots.
    if lang == LanguageId::Python && text.starts_with('.') {
        let dots = text.chars().take_while(|c| *c == '.').count();
        let rest = text[dots..].replace('.', "/");
        let mut parts: Vec<String> = vec!["..".to_string(); dots - 1];
        if !rest.is_empty() {
            parts.push(rest);
        }
        return Some(parts.join("/"));
    }

    if starts_relative(&text) {
        return Some(text);
    }
    if hint == TokenHint::RelativePath {
        return Some(text.trim_start_matches('/').to_string());
    }
    None
}

/// Join `rel` onto `dir` and normalize `.`/`..` segments. `None` when the
/// path climbs out of the project root.
fn join_normalized(dir: &str, rel: &str) -> Option<String> {
    let mut stack: Vec<&str> = if dir.is_empty() {
        Vec::new()
    } else {
        dir.split('/').collect()
    };
    for segment in rel.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop()?;
            }
            other => stack.push(other),
        }
    }
    Some(stack.join("/"))
}

fn package_segments(text: &str) -> Vec<&str> {
    let separator = if text.contains("::") {
        "::"
    } else if text.contains('/') {
        "/"
    } else {
        "."
    };
    let mut segments: Vec<&str> = text.split(separator).filter(|s| !s.is_empty()).collect();
    // Rust path qualifiers carry no directory information of their own.
    while matches!(segments.first(), Some(&"crate") | Some(&"self") | Some(&"super")) {
        segments.remove(0);
    }
    segments
}

fn has_language_extension(path: &str, lang: LanguageId) -> bool {
    match path.rsplit_once('.') {
        Some((_, ext)) => lang.extensions().contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// True when the candidate's directory path ends with `dirs`.
fn dir_suffix_matches(path: &str, dirs: &[&str]) -> bool {
    if dirs.is_empty() {
        return true;
    }
    let parent = dir_of(path);
    let parent_segments: Vec<&str> = if parent.is_empty() {
        Vec::new()
    } else {
        parent.split('/').collect()
    };
    if parent_segments.len() < dirs.len() {
        return false;
    }
    parent_segments[parent_segments.len() - dirs.len()..] == *dirs
}

fn nearest_unique(matches: &[&String], importer_dir: &str) -> Option<String> {
    let mut best: Option<(&String, usize)> = None;
    let mut tied = false;
    for path in matches {
        let distance = path_distance(importer_dir, dir_of(path));
        match best {
            Some((_, d)) if distance > d => {}
            Some((_, d)) if distance == d => tied = true,
            _ => {
                best = Some((path, distance));
                tied = false;
            }
        }
    }
    match (best, tied) {
        (Some((path, _)), false) => Some(path.clone()),
        _ => None,
    }
}

/// Number of directory hops between two directories.
fn path_distance(a: &str, b: &str) -> usize {
    let a: Vec<&str> = if a.is_empty() {
        Vec::new()
    } else {
        a.split('/').collect()
    };
    let b: Vec<&str> = if b.is_empty() {
        Vec::new()
    } else {
        b.split('/').collect()
    };
    let common = a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count();
    (a.len() - common) + (b.len() - common)
}

fn dir_of(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((dir, _)) => dir,
        None => "",
    }
}

fn stem_of(path: &str) -> &str {
    let name = match path.rsplit_once('/') {
        Some((_, name)) => name,
        None => path,
    };
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Canonical external-module key for a token that did not resolve locally.
fn external_key(text: &str, hint: TokenHint, lang: LanguageId) -> String {
    let text = text.trim();

    // Unresolved relative paths keep their path shape, minus the hops.
    if text.starts_with('.') || text.starts_with('/') {
        let mut rest = text;
        loop {
            let stripped = rest
                .strip_prefix("./")
                .or_else(|| rest.strip_prefix("../"))
                .or_else(|| rest.strip_prefix("/"));
            match stripped {
                Some(s) => rest = s,
                None => break,
            }
        }
        if !rest.is_empty() {
            return rest.to_string();
        }
        return text.to_string();
    }

    match lang {
        // Go module paths: trim a trailing major-version segment, then cut
        // hosted (domain-first) paths down to the module root.
        LanguageId::Go => {
            let mut segments: Vec<&str> = text.split('/').filter(|s| !s.is_empty()).collect();
            if let Some(last) = segments.last() {
                if last.len() > 1
                    && last.starts_with('v')
                    && last[1..].chars().all(|c| c.is_ascii_digit())
                {
                    segments.pop();
                }
            }
            if segments.first().is_some_and(|s| s.contains('.')) {
                segments.truncate(3);
            }
            segments.join("/")
        }
        // npm packages: scoped names keep two segments, otherwise the
        // package root before any subpath.
        LanguageId::JavaScript | LanguageId::TypeScript => {
            let mut parts = text.split('/');
            match (text.starts_with('@'), parts.next(), parts.next()) {
                (true, Some(scope), Some(name)) => format!("{scope}/{name}"),
                (_, Some(root), _) => root.to_string(),
                _ => text.to_string(),
            }
        }
        _ => {
            if text.contains("::") {
                return text
                    .split("::")
                    .find(|s| !s.is_empty())
                    .unwrap_or(text)
                    .to_string();
            }
            if hint == TokenHint::PackagePath && text.contains('.') {
                let keep = lang.external_prefix_segments();
                return text
                    .split('.')
                    .filter(|s| !s.is_empty())
                    .take(keep)
                    .collect::<Vec<_>>()
                    .join(".");
            }
            text.to_string()
        }
    }
}
