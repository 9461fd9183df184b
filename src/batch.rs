//! Sequential batch runs over numbered document files, and timed benchmarks.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{info, warn};
use serde::Serialize;

use crate::config::TallyConfig;
use crate::engine::{AnalysisReport, Analyzer};
use crate::format::{document_path, read_document};
use crate::types::{FreqError, FreqResult};

/// Result for one file of a batch.
#[derive(Debug)]
pub struct FileOutcome {
    pub index: usize,
    pub path: PathBuf,
    pub result: FreqResult<AnalysisReport>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// All outcomes of a batch, in file order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn analyzed(&self) -> usize {
        self.files.iter().filter(|f| f.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.analyzed()
    }

    pub fn errors(&self) -> impl Iterator<Item = (&Path, &FreqError)> {
        self.files
            .iter()
            .filter_map(|f| f.result.as_ref().err().map(|e| (f.path.as_path(), e)))
    }

    /// Serializable form for JSON output.
    pub fn to_view(&self) -> BatchView<'_> {
        BatchView {
            analyzed: self.analyzed(),
            failed: self.failed(),
            files: self
                .files
                .iter()
                .map(|f| match &f.result {
                    Ok(report) => FileView {
                        index: f.index,
                        path: &f.path,
                        report: Some(report),
                        error: None,
                    },
                    Err(e) => FileView {
                        index: f.index,
                        path: &f.path,
                        report: None,
                        error: Some(e.to_string()),
                    },
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BatchView<'a> {
    pub analyzed: usize,
    pub failed: usize,
    pub files: Vec<FileView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct FileView<'a> {
    pub index: usize,
    pub path: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<&'a AnalysisReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Read and analyze one file with a shared analyzer.
pub fn analyze_file(analyzer: &mut Analyzer, path: &Path) -> FreqResult<AnalysisReport> {
    let document = read_document(path)?;
    Ok(analyzer.analyze_document(&document))
}

/// Analyze explicit paths in order. A failing file is logged and recorded;
/// the rest still run.
pub fn run_paths<I, P>(paths: I, analyzer: &mut Analyzer) -> BatchReport
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let files = paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| {
            let path = path.into();
            let result = analyze_file(analyzer, &path);
            if let Err(e) = &result {
                warn!("skipping {}: {}", path.display(), e);
            }
            FileOutcome {
                index,
                path,
                result,
            }
        })
        .collect();
    BatchReport { files }
}

/// Analyze `{prefix}0.json` .. `{prefix}{count-1}.json` in `dir`.
pub fn run_batch(dir: &Path, count: usize, config: &TallyConfig) -> BatchReport {
    let mut analyzer = Analyzer::new(config.top_k);
    let paths = (0..count).map(|i| document_path(dir, &config.file_prefix, i));
    let report = run_paths(paths, &mut analyzer);
    info!(
        "batch over {} files: {} analyzed, {} failed",
        count,
        report.analyzed(),
        report.failed()
    );
    report
}

/// Timing summary of repeated batch runs.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub files: usize,
    pub rounds: usize,
    /// Files analyzed per round.
    pub analyzed: usize,
    /// Files rejected per round.
    pub failed: usize,
    #[serde(serialize_with = "serialize_millis")]
    pub total: Duration,
}

impl BenchmarkReport {
    /// Mean duration of one round.
    pub fn per_round(&self) -> Duration {
        if self.rounds == 0 {
            Duration::ZERO
        } else {
            self.total.div_f64(self.rounds as f64)
        }
    }
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

/// Run the batch `rounds` times without rendering and time it.
pub fn run_benchmark(
    dir: &Path,
    count: usize,
    rounds: usize,
    config: &TallyConfig,
) -> BenchmarkReport {
    let mut analyzer = Analyzer::new(config.top_k);
    let mut analyzed = 0;
    let mut failed = 0;

    let start = Instant::now();
    for _ in 0..rounds {
        analyzed = 0;
        failed = 0;
        for i in 0..count {
            let path = document_path(dir, &config.file_prefix, i);
            match analyze_file(&mut analyzer, &path) {
                Ok(_) => analyzed += 1,
                Err(_) => failed += 1,
            }
        }
    }
    let total = start.elapsed();

    info!(
        "benchmark: {} files x {} rounds in {} ms",
        count,
        rounds,
        total.as_millis()
    );
    BenchmarkReport {
        files: count,
        rounds,
        analyzed,
        failed,
        total,
    }
}
