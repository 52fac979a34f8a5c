//! Tests for rewriting a directory of style sheets in place.

use sassy::driver::{convert_directory, BatchSummary, FileReport};
use sassy::settings::{BatchConfig, Loader};
use sassy::{Error, TransformOptions};
use std::fs;
use std::path::Path;

const SOURCE: &str = ".a\n    color: red";
const CONVERTED: &str = ".a {\n    color: red;\n}";

fn batch_for(dir: &Path, dry_run: bool) -> BatchConfig {
    Loader::new()
        .set_override("batch.directory", dir.display().to_string())
        .expect("override")
        .set_override("batch.dry_run", dry_run)
        .expect("override")
        .build()
        .expect("config")
        .batch
}

fn run(batch: &BatchConfig) -> (BatchSummary, Vec<FileReport>) {
    let mut reports = Vec::new();
    let summary = convert_directory(batch, &TransformOptions::default(), |report| {
        reports.push(report.clone())
    })
    .expect("batch to succeed");
    (summary, reports)
}

#[test]
fn rewrites_matching_files_in_name_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("layout.css"), SOURCE).expect("write");
    fs::write(dir.path().join("buttons.css"), SOURCE).expect("write");
    fs::write(dir.path().join("README.md"), SOURCE).expect("write");

    let (summary, reports) = run(&batch_for(dir.path(), false));

    assert_eq!(summary, BatchSummary { processed: 2, changed: 2 });
    let names: Vec<String> = reports.iter().map(FileReport::file_name).collect();
    assert_eq!(names, vec!["buttons.css", "layout.css"]);
    assert!(reports.iter().all(|report| report.written));

    assert_eq!(fs::read_to_string(dir.path().join("buttons.css")).unwrap(), CONVERTED);
    assert_eq!(fs::read_to_string(dir.path().join("layout.css")).unwrap(), CONVERTED);
    assert_eq!(fs::read_to_string(dir.path().join("README.md")).unwrap(), SOURCE);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("site.css"), SOURCE).expect("write");

    let (summary, reports) = run(&batch_for(dir.path(), true));

    assert_eq!(summary, BatchSummary { processed: 1, changed: 1 });
    assert!(reports[0].changed);
    assert!(!reports[0].written);
    assert_eq!(fs::read_to_string(dir.path().join("site.css")).unwrap(), SOURCE);
}

#[test]
fn already_converted_files_are_left_alone() {
    let dir = tempfile::tempdir().expect("temp dir");
    // Brace-delimited text whose every line already survives conversion unchanged.
    fs::write(dir.path().join("plain.css"), "// generated\ncolor: red;").expect("write");

    let (summary, reports) = run(&batch_for(dir.path(), false));

    assert_eq!(summary, BatchSummary { processed: 1, changed: 0 });
    assert!(!reports[0].changed);
    assert!(!reports[0].written);
}

#[test]
fn custom_extension_selects_other_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("theme.sass"), SOURCE).expect("write");
    fs::write(dir.path().join("theme.css"), SOURCE).expect("write");

    let mut batch = batch_for(dir.path(), false);
    batch.extension = "sass".to_string();
    let (summary, _) = run(&batch);

    assert_eq!(summary.processed, 1);
    assert_eq!(fs::read_to_string(dir.path().join("theme.sass")).unwrap(), CONVERTED);
    assert_eq!(fs::read_to_string(dir.path().join("theme.css")).unwrap(), SOURCE);
}

#[test]
fn missing_directory_aborts() {
    let dir = tempfile::tempdir().expect("temp dir");
    let batch = batch_for(&dir.path().join("styles"), false);

    let mut calls = 0;
    let result = convert_directory(&batch, &TransformOptions::default(), |_| calls += 1);

    assert!(matches!(result, Err(Error::Walk(_))));
    assert_eq!(calls, 0);
}

#[test]
fn empty_directory_is_a_no_op() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (summary, reports) = run(&batch_for(dir.path(), false));
    assert_eq!(summary, BatchSummary::default());
    assert!(reports.is_empty());
}
