use anyhow::Result;
use rayon::prelude::*;
use std::path::Path;

use crate::core::extractor::{extract, ImportToken};
use crate::core::graph::{DependencyGraph, EdgeKind, GraphBuilder, Node};
use crate::core::resolver::{ImportResolver, ProjectIndex, Resolution};
use crate::core::scanner::FileScanner;
use crate::languages::{language_for_path, LanguageRegistry};

/// Why a discovered file did not make it into the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    UnrecognizedLanguage,
    Unreadable,
    NotUtf8,
}

impl SkipReason {
    pub fn describe(self) -> &'static str {
        match self {
            SkipReason::UnrecognizedLanguage => "unrecognized language",
            SkipReason::Unreadable => "unreadable",
            SkipReason::NotUtf8 => "not valid UTF-8",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Processed,
    Skipped(SkipReason),
}

/// Consumer of per-file progress events. The core's correctness never
/// depends on what a sink does with them.
pub trait ProgressSink: Sync {
    fn discovered(&self, _total: usize) {}
    fn file_event(&self, _path: &str, _status: &FileStatus) {}
}

/// Sink that drops everything.
pub struct NullSink;

impl ProgressSink for NullSink {}

#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Extra directory names to exclude on top of the built-in set.
    pub excluded_dirs: Vec<String>,
    /// Extract files in parallel during pass 2. Resolution and graph
    /// folding stay sequential either way.
    pub parallel: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            excluded_dirs: Vec::new(),
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanStats {
    pub files_discovered: usize,
    pub files_processed: usize,
    pub files_skipped: usize,
    pub local_edges: usize,
    pub external_edges: usize,
}

pub struct AnalysisReport {
    pub graph: DependencyGraph,
    pub stats: ScanStats,
}

/// Drives the whole run: discovery, extraction, resolution, graph folding.
///
/// The two passes are a hard ordering requirement: the project index must be
/// complete before any token is resolved, because local-path resolution
/// needs global knowledge of the tree.
pub struct ProjectAnalyzer {
    registry: LanguageRegistry,
    options: ScanOptions,
}

impl ProjectAnalyzer {
    pub fn new(options: ScanOptions) -> Self {
        Self {
            registry: LanguageRegistry::new(),
            options,
        }
    }

    pub fn analyze(&self, root: &Path, sink: &dyn ProgressSink) -> Result<AnalysisReport> {
        // Pass 1: discovery.
        let scanner = FileScanner::new(&self.options.excluded_dirs);
        let files = scanner.discover(root, sink)?;
        sink.discovered(files.len());

        let mut index = ProjectIndex::new(files.iter().map(|f| f.rel_path.clone()));
        let mut stats = ScanStats {
            files_discovered: files.len(),
            ..ScanStats::default()
        };

        // Pass 2a: read and extract every file. Threads only touch their own
        // file's text; the index stays immutable until the merge below.
        let extract_one = |file: &crate::core::scanner::FileInfo| {
            let outcome = match std::fs::read(&file.abs_path) {
                Ok(bytes) => match String::from_utf8(bytes) {
                    Ok(text) => {
                        let patterns = self.registry.patterns(file.language);
                        Ok(extract(&text, patterns).collect::<Vec<ImportToken>>())
                    }
                    Err(_) => Err(SkipReason::NotUtf8),
                },
                Err(_) => Err(SkipReason::Unreadable),
            };
            let status = match &outcome {
                Ok(_) => FileStatus::Processed,
                Err(reason) => FileStatus::Skipped(*reason),
            };
            sink.file_event(&file.rel_path, &status);
            outcome
        };

        let extracted: Vec<Result<Vec<ImportToken>, SkipReason>> = if self.options.parallel {
            files.par_iter().map(extract_one).collect()
        } else {
            files.iter().map(extract_one).collect()
        };

        // Files that failed to decode leave the index before any edge is
        // folded, so the local node set is exactly the decodable files.
        for (file, outcome) in files.iter().zip(&extracted) {
            if outcome.is_err() {
                index.remove(&file.rel_path);
            }
        }

        // Pass 2b: resolve and fold, sequentially and in path order.
        let resolver = ImportResolver::new(&index);
        let mut builder = GraphBuilder::new();

        for (file, outcome) in files.iter().zip(&extracted) {
            let tokens = match outcome {
                Ok(tokens) => tokens,
                Err(_) => {
                    stats.files_skipped += 1;
                    continue;
                }
            };
            stats.files_processed += 1;

            let from = builder.ensure_node(Node::local(&file.rel_path, file.language));
            for token in tokens {
                match resolver.resolve(token, &file.rel_path, file.language) {
                    Resolution::Local(target) => {
                        let target_lang =
                            language_for_path(Path::new(&target)).unwrap_or(file.language);
                        let to = builder.ensure_node(Node::local(&target, target_lang));
                        if builder.add_edge(from, to, EdgeKind::Local) {
                            stats.local_edges += 1;
                        }
                    }
                    Resolution::External(key) => {
                        let to = builder.ensure_node(Node::external(&key, file.language));
                        if builder.add_edge(from, to, EdgeKind::External) {
                            stats.external_edges += 1;
                        }
                    }
                    Resolution::SelfImport => {}
                }
            }
        }

        Ok(AnalysisReport {
            graph: builder.build(),
            stats,
        })
    }
}
