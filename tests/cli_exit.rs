//! Exit status and error reporting of the `wtally` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn wtally(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wtally"))
        .args(args)
        .env("XDG_CONFIG_HOME", home)
        .env("HOME", home)
        .env_remove("WORDTALLY_TOP_K")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run wtally")
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("absent.toml");

    let out = wtally(
        home.path(),
        &["--config", missing.to_str().unwrap(), "analyze", "--count", "1"],
    );
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("error:"), "stderr: {}", stderr);
    assert!(out.stdout.is_empty());
}

#[test]
fn test_bad_record_does_not_change_exit_status() {
    let home = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    fs::write(
        data.path().join("text_0.json"),
        r#"{"text": "Hello, hello World!"}"#,
    )
    .unwrap();
    fs::write(data.path().join("text_1.json"), r#"{"stopwords": ["x"]}"#).unwrap();

    let out = wtally(
        home.path(),
        &["--dir", data.path().to_str().unwrap(), "analyze", "--count", "2"],
    );
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("File #0 (text_0.json):"), "stdout: {}", stdout);
    assert!(stdout.contains("1) 'hello' - 2 times"), "stdout: {}", stdout);
    assert!(stdout.contains("missing required field"), "stdout: {}", stdout);
}

#[test]
fn test_file_command_top_override() {
    let home = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let path = data.path().join("doc.json");
    fs::write(&path, r#"{"text": "b a b c"}"#).unwrap();

    let out = wtally(
        home.path(),
        &["--json", "file", path.to_str().unwrap(), "--top", "1"],
    );
    assert_eq!(out.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let top = value["files"][0]["report"]["top"].as_array().unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0]["word"], "b");
}
