use anyhow::Result;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

mod core;
mod languages;
mod render;

use crate::core::{FileStatus, ProgressSink, ProjectAnalyzer, ScanOptions, SkipReason};
use crate::render::{DotRenderer, HtmlRenderer, JsonRenderer};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "depmap",
    version,
    about = "Multi-language project dependency graph visualizer"
)]
struct Cli {
    /// Project directory to scan
    #[arg(value_name = "PATH")]
    project_path: PathBuf,

    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "dependencies.html")]
    output: PathBuf,

    /// Additional directory names to exclude
    #[arg(long, value_name = "DIR", value_delimiter = ',')]
    exclude: Vec<String>,

    /// Output format
    #[arg(short, long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Disable parallel extraction
    #[arg(long)]
    no_parallel: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Html,
    Json,
    Dot,
}

/// Progress bar driven by the core's per-file events.
struct BarSink {
    bar: ProgressBar,
}

impl BarSink {
    fn new() -> Self {
        let bar = ProgressBar::hidden();
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }
}

impl ProgressSink for BarSink {
    fn discovered(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
    }

    fn file_event(&self, path: &str, status: &FileStatus) {
        match status {
            FileStatus::Processed => self.bar.inc(1),
            FileStatus::Skipped(SkipReason::UnrecognizedLanguage) => {}
            FileStatus::Skipped(reason) => {
                self.bar
                    .println(format!("Warning: skipped {} ({})", path, reason.describe()));
                self.bar.inc(1);
            }
        }
    }
}

/// Plain-text fallback for --no-progress runs and non-tty logs.
struct LogSink;

impl ProgressSink for LogSink {
    fn file_event(&self, path: &str, status: &FileStatus) {
        if let FileStatus::Skipped(reason) = status {
            if *reason != SkipReason::UnrecognizedLanguage {
                eprintln!("Warning: skipped {} ({})", path, reason.describe());
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let start_time = Instant::now();

    println!("depmap - project dependency visualizer");
    println!("Scanning {}", cli.project_path.display());

    let options = ScanOptions {
        excluded_dirs: cli.exclude.clone(),
        parallel: !cli.no_parallel,
    };
    let analyzer = ProjectAnalyzer::new(options);

    let report = if cli.no_progress {
        analyzer.analyze(&cli.project_path, &LogSink)?
    } else {
        let sink = BarSink::new();
        let report = analyzer.analyze(&cli.project_path, &sink)?;
        sink.bar.finish_and_clear();
        report
    };

    let stats = report.stats;
    println!(
        "Processed {} files ({} skipped), {} local and {} external edges",
        stats.files_processed, stats.files_skipped, stats.local_edges, stats.external_edges
    );

    let output = match cli.format {
        OutputFormat::Html => {
            let output = cli.output.clone();
            HtmlRenderer::new().render_to_file(&report.graph, &output)?;
            output
        }
        OutputFormat::Json => {
            let output = cli.output.with_extension("json");
            JsonRenderer::new().render_to_file(&report.graph, &output)?;
            output
        }
        OutputFormat::Dot => {
            let output = cli.output.with_extension("dot");
            DotRenderer::new().render_to_file(&report.graph, &output)?;
            output
        }
    };

    println!("Generated {}", output.display());
    println!(
        "Total execution time: {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
