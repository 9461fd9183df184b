//! Document records on disk, sample generation, batch and benchmark runs.

use std::fs;
use std::path::Path;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tempfile::TempDir;

use wordtally::report::{render_batch, render_benchmark, render_file};
use wordtally::{
    document_path, generate_documents, read_document, run_batch, run_benchmark, run_paths,
    write_document, Analyzer, BenchmarkReport, Document, FreqError, RankedEntry, RecordError,
    TallyConfig,
};

// ==================== Helpers ====================

fn write_raw(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn invalid_reason(err: FreqError) -> RecordError {
    match err {
        FreqError::InvalidRecord { reason, .. } => reason,
        other => panic!("expected InvalidRecord, got {:?}", other),
    }
}

// ==================== Record Validation Tests ====================

#[test]
fn test_from_value_full_record() {
    let doc = Document::from_value(&json!({"text": "a b", "stopwords": ["a"]})).unwrap();
    assert_eq!(doc, Document::new("a b", vec!["a".to_string()]));
}

#[test]
fn test_from_value_optional_stopwords() {
    let doc = Document::from_value(&json!({"text": "hi"})).unwrap();
    assert!(doc.stopwords.is_empty());
    let doc = Document::from_value(&json!({"text": "hi", "stopwords": null})).unwrap();
    assert!(doc.stopwords.is_empty());
}

#[test]
fn test_from_value_rejections() {
    assert_eq!(
        Document::from_value(&json!(["text"])),
        Err(RecordError::NotAnObject)
    );
    assert_eq!(
        Document::from_value(&json!({"body": "x"})),
        Err(RecordError::MissingText)
    );
    assert_eq!(
        Document::from_value(&json!({"text": 5})),
        Err(RecordError::TextNotString)
    );
    assert_eq!(
        Document::from_value(&json!({"text": "x", "stopwords": "и"})),
        Err(RecordError::StopwordsNotArray)
    );
    assert_eq!(
        Document::from_value(&json!({"text": "x", "stopwords": ["ok", 3]})),
        Err(RecordError::StopwordNotString { index: 1 })
    );
}

#[test]
fn test_from_value_scalar_stopwords_not_promoted() {
    assert_eq!(
        Document::from_value(&json!({"text": "x", "stopwords": "и"})),
        Err(RecordError::StopwordsNotArray)
    );
    assert_eq!(
        Document::from_value(&json!({"text": "x", "stopwords": {"0": "и"}})),
        Err(RecordError::StopwordsNotArray)
    );
}

// ==================== Reader Tests ====================

#[test]
fn test_read_document_roundtrip_with_writer() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.json");
    let doc = Document::new("Солнце светит ярко", vec!["и".to_string()]);
    write_document(&path, &doc).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\n  \"text\""), "expected two-space indent: {}", content);
    assert_eq!(read_document(&path).unwrap(), doc);
}

#[test]
fn test_read_document_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = read_document(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, FreqError::Io { .. }));
    assert!(err.is_per_record());
}

#[test]
fn test_read_document_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = write_raw(dir.path(), "empty.json", "");
    let err = read_document(&path).unwrap_err();
    assert!(matches!(err, FreqError::EmptyFile(_)));
    assert!(err.to_string().contains("empty"));
}

#[test]
fn test_read_document_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = write_raw(dir.path(), "bad.json", "{\"text\": ");
    assert!(matches!(
        read_document(&path).unwrap_err(),
        FreqError::Parse { .. }
    ));
}

#[test]
fn test_read_document_invalid_record() {
    let dir = TempDir::new().unwrap();
    let path = write_raw(dir.path(), "wrong.json", r#"{"text": ["not", "a", "string"]}"#);
    assert_eq!(
        invalid_reason(read_document(&path).unwrap_err()),
        RecordError::TextNotString
    );
}

// ==================== Generation Tests ====================

#[test]
fn test_generate_documents_writes_numbered_files() {
    let dir = TempDir::new().unwrap();
    let config = TallyConfig::default();
    let mut rng = StdRng::seed_from_u64(1);

    let written = generate_documents(dir.path(), 4, &config, &mut rng).unwrap();
    assert_eq!(written.len(), 4);
    for (i, path) in written.iter().enumerate() {
        assert_eq!(path, &document_path(dir.path(), "text_", i));
        let doc = read_document(path).unwrap();
        assert!(config.samples.contains(&doc.text));
        assert_eq!(doc.stopwords, config.default_stopwords);
    }
}

#[test]
fn test_generate_documents_is_reproducible_with_seed() {
    let config = TallyConfig::default();
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    generate_documents(a.path(), 6, &config, &mut StdRng::seed_from_u64(9)).unwrap();
    generate_documents(b.path(), 6, &config, &mut StdRng::seed_from_u64(9)).unwrap();
    for i in 0..6 {
        assert_eq!(
            read_document(&document_path(a.path(), "text_", i)).unwrap(),
            read_document(&document_path(b.path(), "text_", i)).unwrap()
        );
    }
}

#[test]
fn test_generate_documents_without_samples_fails() {
    let dir = TempDir::new().unwrap();
    let config = TallyConfig {
        samples: Vec::new(),
        ..TallyConfig::default()
    };
    let err = generate_documents(dir.path(), 1, &config, &mut StdRng::seed_from_u64(0))
        .unwrap_err();
    assert!(matches!(err, FreqError::Config(_)));
    assert!(!err.is_per_record());
}

// ==================== Batch Tests ====================

#[test]
fn test_batch_continues_past_bad_records() {
    let dir = TempDir::new().unwrap();
    let config = TallyConfig::default();
    write_raw(dir.path(), "text_0.json", r#"{"text": "Cat cat dog", "stopwords": ["dog"]}"#);
    write_raw(dir.path(), "text_1.json", "");
    write_raw(dir.path(), "text_2.json", r#"{"text": "x", "stopwords": [1]}"#);
    // text_3.json is missing
    write_raw(dir.path(), "text_4.json", r#"{"text": "Hello, hello World!"}"#);

    let batch = run_batch(dir.path(), 5, &config);
    assert_eq!(batch.files.len(), 5);
    assert_eq!(batch.analyzed(), 2);
    assert_eq!(batch.failed(), 3);

    let first = batch.files[0].result.as_ref().unwrap();
    assert_eq!(first.total, 2);
    assert_eq!(first.unique, 1);

    let last = batch.files[4].result.as_ref().unwrap();
    assert_eq!(
        last.top,
        vec![RankedEntry::new("hello", 2), RankedEntry::new("world", 1)]
    );
    assert_eq!(batch.errors().count(), 3);
}

#[test]
fn test_batch_does_not_leak_between_documents() {
    let dir = TempDir::new().unwrap();
    write_raw(dir.path(), "a.json", r#"{"text": "one one two", "stopwords": ["two"]}"#);
    write_raw(dir.path(), "b.json", r#"{"text": "two three"}"#);

    let mut analyzer = Analyzer::new(5);
    let batch = run_paths(
        [dir.path().join("a.json"), dir.path().join("b.json")],
        &mut analyzer,
    );
    let second = batch.files[1].result.as_ref().unwrap();
    assert_eq!(second.total, 2);
    assert_eq!(
        second.top,
        vec![RankedEntry::new("three", 1), RankedEntry::new("two", 1)]
    );
}

#[test]
fn test_batch_json_view() {
    let dir = TempDir::new().unwrap();
    write_raw(dir.path(), "text_0.json", r#"{"text": "a a b"}"#);

    let batch = run_batch(dir.path(), 2, &TallyConfig::default());
    let value = serde_json::to_value(batch.to_view()).unwrap();
    assert_eq!(value["analyzed"], 1);
    assert_eq!(value["failed"], 1);
    assert_eq!(value["files"][0]["report"]["total"], 3);
    assert_eq!(value["files"][0]["report"]["top"][0]["word"], "a");
    assert!(value["files"][0].get("error").is_none());
    assert!(value["files"][1]["error"].is_string());
}

// ==================== Rendering Tests ====================

#[test]
fn test_render_file_format() {
    let dir = TempDir::new().unwrap();
    write_raw(dir.path(), "text_0.json", r#"{"text": "Hello, hello World!"}"#);
    let batch = run_batch(dir.path(), 1, &TallyConfig::default());
    let file = &batch.files[0];

    let rendered = render_file(file.index, &file.path, file.result.as_ref().unwrap(), 5);
    assert_eq!(
        rendered,
        "File #0 (text_0.json):\n\
         Total words: 3, unique: 2\n\
         Top-5:\n  \
         1) 'hello' - 2 times\n  \
         2) 'world' - 1 time\n"
    );

    assert!(render_batch(&batch, 5).contains("File #0"));
}

// ==================== Benchmark Tests ====================

#[test]
fn test_benchmark_per_round_handles_huge_round_counts() {
    let report = BenchmarkReport {
        files: 1,
        rounds: usize::MAX,
        analyzed: 1,
        failed: 0,
        total: Duration::from_secs(1),
    };
    assert!(report.per_round() <= Duration::from_nanos(1));

    let zero = BenchmarkReport {
        rounds: 0,
        ..report.clone()
    };
    assert_eq!(zero.per_round(), Duration::ZERO);

    let huge = BenchmarkReport {
        total: Duration::MAX,
        ..report
    };
    let value = serde_json::to_value(&huge).unwrap();
    assert_eq!(value["total"], u64::MAX);
}

#[test]
fn test_benchmark_counts_files() {
    let dir = TempDir::new().unwrap();
    let config = TallyConfig::default();
    generate_documents(dir.path(), 3, &config, &mut StdRng::seed_from_u64(3)).unwrap();

    let report = run_benchmark(dir.path(), 4, 2, &config);
    assert_eq!(report.files, 4);
    assert_eq!(report.rounds, 2);
    assert_eq!(report.analyzed, 3);
    assert_eq!(report.failed, 1);
    assert!(report.per_round() <= report.total);

    let rendered = render_benchmark(&report);
    assert!(rendered.starts_with("Total time (4 files x 2 rounds): "));

    let value = serde_json::to_value(&report).unwrap();
    assert!(value["total"].is_u64());
}
