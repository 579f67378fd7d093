pub mod analyzer;
pub mod extractor;
pub mod graph;
pub mod resolver;
pub mod scanner;

pub use analyzer::{
    AnalysisReport, FileStatus, NullSink, ProgressSink, ProjectAnalyzer, ScanOptions, ScanStats,
    SkipReason,
};
pub use extractor::{extract, ImportToken};
pub use graph::{DependencyGraph, Edge, EdgeKind, GraphBuilder, Node, NodeKind};
pub use resolver::{ImportResolver, ProjectIndex, Resolution};
pub use scanner::{default_excluded_dirs, FileInfo, FileScanner};
