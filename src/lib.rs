//! # depmap
//!
//! Multi-language project dependency graph visualizer.
//!
//! depmap walks a source tree, extracts import/include statements with
//! per-language regex patterns, resolves each raw token to either a project
//! file or an external module, and builds a directed dependency graph for
//! rendering.
//!
//! ## Pipeline
//!
//! Discovery (pass 1) collects every file with a recognized language and
//! builds the project index; extraction and resolution (pass 2) turn each
//! file's import statements into de-duplicated graph edges. Resolution is
//! deliberately precision-over-recall: an ambiguous token becomes an
//! external-module node rather than a guessed local edge.
//!
//! ## Supported Languages
//!
//! C, C++, C#, Python, JavaScript, TypeScript, Rust, Go, Java, Kotlin

pub mod core;
pub mod languages;
pub mod render;
