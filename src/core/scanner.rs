use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::analyzer::{FileStatus, ProgressSink, SkipReason};
use crate::languages::{language_for_path, LanguageId};

/// One file discovered during pass 1.
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Tree-relative path with `/` separators; the node identity.
    pub rel_path: String,
    pub abs_path: PathBuf,
    pub language: LanguageId,
}

/// Directory names the original tool always skips: build output, package
/// caches, VCS metadata.
pub fn default_excluded_dirs() -> HashSet<String> {
    [
        "bin",
        "obj",
        "node_modules",
        "venv",
        ".git",
        "__pycache__",
        "packages",
        ".vs",
        "build",
        "dist",
        "Debug",
        "Release",
        "lib",
        "cmake-build-debug",
        "cmake-build-release",
        "target",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub struct FileScanner {
    excluded: HashSet<String>,
}

impl FileScanner {
    pub fn new(extra_excluded: &[String]) -> Self {
        let mut excluded = default_excluded_dirs();
        excluded.extend(extra_excluded.iter().cloned());
        Self { excluded }
    }

    /// Pass 1: walk the tree, prune excluded directories at every depth, and
    /// collect every file with a recognized language, sorted by path so runs
    /// over an unchanged tree are identical. Files with unknown extensions
    /// are reported as skipped and never become nodes. Only an unreadable
    /// root is a hard error.
    pub fn discover(&self, root: &Path, sink: &dyn ProgressSink) -> Result<Vec<FileInfo>> {
        let meta = std::fs::metadata(root)
            .with_context(|| format!("project root {} is not readable", root.display()))?;
        anyhow::ensure!(
            meta.is_dir(),
            "project root {} is not a directory",
            root.display()
        );

        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| {
                // Keep the root itself; prune any excluded directory name.
                entry.depth() == 0 || !self.is_excluded(entry.file_name())
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // Unreadable subdirectory: skip it, the run continues.
                Err(_) => continue,
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = match entry.path().strip_prefix(root) {
                Ok(rel) => rel,
                Err(_) => continue,
            };
            let rel_path = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            match language_for_path(entry.path()) {
                Some(language) => files.push(FileInfo {
                    rel_path,
                    abs_path: entry.path().to_path_buf(),
                    language,
                }),
                None => {
                    sink.file_event(
                        &rel_path,
                        &FileStatus::Skipped(SkipReason::UnrecognizedLanguage),
                    );
                }
            }
        }

        files.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
        Ok(files)
    }

    fn is_excluded(&self, name: &std::ffi::OsStr) -> bool {
        name.to_str().is_some_and(|n| self.excluded.contains(n))
    }
}
