use depmap::core::{
    DependencyGraph, EdgeKind, NodeKind, NullSink, ProjectAnalyzer, ScanOptions,
};
use petgraph::visit::EdgeRef;
use std::fs;
use std::path::Path;

fn analyze(root: &Path) -> depmap::core::AnalysisReport {
    let analyzer = ProjectAnalyzer::new(ScanOptions {
        excluded_dirs: Vec::new(),
        parallel: false,
    });
    analyzer.analyze(root, &NullSink).unwrap()
}

fn node_ids(graph: &DependencyGraph) -> Vec<String> {
    let mut ids: Vec<String> = graph
        .node_indices()
        .filter_map(|i| graph.node_weight(i))
        .map(|n| n.id.clone())
        .collect();
    ids.sort();
    ids
}

fn edges(graph: &DependencyGraph) -> Vec<(String, String, EdgeKind)> {
    let mut edges: Vec<_> = graph
        .edge_references()
        .map(|e| {
            (
                graph[e.source()].id.clone(),
                graph[e.target()].id.clone(),
                e.weight().kind,
            )
        })
        .collect();
    edges.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
    edges
}

#[test]
fn python_local_import_links_two_files() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("a.py"), "import b\n").unwrap();
    fs::write(dir.path().join("b.py"), "").unwrap();

    let report = analyze(dir.path());
    assert_eq!(node_ids(&report.graph), vec!["a.py", "b.py"]);
    assert_eq!(
        edges(&report.graph),
        vec![("a.py".to_string(), "b.py".to_string(), EdgeKind::Local)]
    );
}

#[test]
fn go_stdlib_import_becomes_external_node() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(
        dir.path().join("main.go"),
        "package main\n\nimport \"fmt\"\n",
    )
    .unwrap();

    let report = analyze(dir.path());
    assert_eq!(node_ids(&report.graph), vec!["external:fmt", "main.go"]);
    assert_eq!(
        edges(&report.graph),
        vec![(
            "main.go".to_string(),
            "external:fmt".to_string(),
            EdgeKind::External
        )]
    );
}

#[test]
fn c_include_links_header_with_no_out_edges() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("x.c"), "#include \"x.h\"\n").unwrap();
    fs::write(dir.path().join("x.h"), "int f(void);\n").unwrap();

    let report = analyze(dir.path());
    assert_eq!(
        edges(&report.graph),
        vec![("x.c".to_string(), "x.h".to_string(), EdgeKind::Local)]
    );

    let header = report
        .graph
        .node_indices()
        .find(|i| report.graph[*i].id == "x.h")
        .unwrap();
    assert_eq!(
        report
            .graph
            .edges_directed(header, petgraph::Direction::Outgoing)
            .count(),
        0
    );
}

#[test]
fn excluded_directories_never_contribute_nodes() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
    fs::write(
        dir.path().join("node_modules/pkg/index.js"),
        "require('fs');\n",
    )
    .unwrap();
    fs::write(dir.path().join("app.js"), "const x = 1;\n").unwrap();

    let report = analyze(dir.path());
    assert_eq!(node_ids(&report.graph), vec!["app.js"]);
    for id in node_ids(&report.graph) {
        assert!(!id.split('/').any(|seg| seg == "node_modules"));
    }
}

#[test]
fn repeated_imports_deduplicate_to_one_edge() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(
        dir.path().join("main.rs"),
        "use util;\nuse util::helper;\n\nfn main() {}\n",
    )
    .unwrap();
    fs::write(dir.path().join("util.rs"), "pub fn helper() {}\n").unwrap();

    let report = analyze(dir.path());
    assert_eq!(
        edges(&report.graph),
        vec![("main.rs".to_string(), "util.rs".to_string(), EdgeKind::Local)]
    );
}

#[test]
fn self_imports_never_become_edges() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("a.py"), "import a\n").unwrap();

    let report = analyze(dir.path());
    assert_eq!(node_ids(&report.graph), vec!["a.py"]);
    assert!(edges(&report.graph).is_empty());
}

#[test]
fn analysis_is_idempotent_on_an_unchanged_tree() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("a.py"), "import b\nimport os\n").unwrap();
    fs::write(dir.path().join("b.py"), "from a import thing\n").unwrap();

    let first = analyze(dir.path());
    let second = analyze(dir.path());
    assert_eq!(node_ids(&first.graph), node_ids(&second.graph));
    assert_eq!(edges(&first.graph), edges(&second.graph));
}

#[test]
fn undecodable_files_are_skipped_not_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("ok.py"), "import broken\n").unwrap();
    fs::write(dir.path().join("broken.py"), [0xff, 0xfe, 0x00, 0x41]).unwrap();

    let report = analyze(dir.path());
    assert_eq!(report.stats.files_processed, 1);
    assert_eq!(report.stats.files_skipped, 1);

    // The broken file is out of the node set; the import of it goes external.
    assert_eq!(node_ids(&report.graph), vec!["external:broken", "ok.py"]);
}

#[test]
fn local_node_set_matches_recognized_files() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("a.py"), "import json\n").unwrap();
    fs::write(dir.path().join("b.go"), "package b\n").unwrap();
    fs::write(dir.path().join("readme.txt"), "not code\n").unwrap();

    let report = analyze(dir.path());
    let locals: Vec<String> = report
        .graph
        .node_indices()
        .filter_map(|i| report.graph.node_weight(i))
        .filter(|n| n.kind == NodeKind::LocalFile)
        .map(|n| n.id.clone())
        .collect();
    let mut locals = locals;
    locals.sort();
    assert_eq!(locals, vec!["a.py", "b.go"]);
    assert_eq!(report.stats.files_discovered, 2);
}
