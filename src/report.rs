//! Human-readable rendering of analysis and benchmark results.

use std::fmt::Write;
use std::path::Path;

use crate::batch::{BatchReport, BenchmarkReport};
use crate::engine::AnalysisReport;

/// Render one report:
///
/// ```text
/// File #0 (text_0.json):
/// Total words: 7, unique: 6
/// Top-5:
///   1) 'слово' - 2 times
/// ```
pub fn render_file(index: usize, path: &Path, report: &AnalysisReport, top_k: usize) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut out = String::new();
    let _ = writeln!(out, "File #{} ({}):", index, name);
    out.push_str(&render_report(report, top_k));
    out
}

/// Render counts and ranking without a file header.
pub fn render_report(report: &AnalysisReport, top_k: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Total words: {}, unique: {}",
        report.total, report.unique
    );
    let _ = writeln!(out, "Top-{}:", top_k);
    for (rank, entry) in report.top.iter().enumerate() {
        let unit = if entry.count == 1 { "time" } else { "times" };
        let _ = writeln!(
            out,
            "  {}) '{}' - {} {}",
            rank + 1,
            entry.word,
            entry.count,
            unit
        );
    }
    out
}

/// Render every file of a batch; failures become one `error:` line each.
pub fn render_batch(batch: &BatchReport, top_k: usize) -> String {
    let mut out = String::new();
    for file in &batch.files {
        match &file.result {
            Ok(report) => {
                out.push('\n');
                out.push_str(&render_file(file.index, &file.path, report, top_k));
            }
            Err(e) => {
                let _ = writeln!(out, "error: {}", e);
            }
        }
    }
    out
}

pub fn render_benchmark(report: &BenchmarkReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Total time ({} files x {} rounds): {} ms",
        report.files,
        report.rounds,
        report.total.as_millis()
    );
    let _ = writeln!(
        out,
        "Per round: {:.3} ms, analyzed: {}, failed: {}",
        report.per_round().as_secs_f64() * 1000.0,
        report.analyzed,
        report.failed
    );
    out
}
