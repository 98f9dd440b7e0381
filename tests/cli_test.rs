use httpmock::prelude::*;
use std::process::{Command, Output};
use tempfile::TempDir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_article.html");

fn viewer_history(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_viewer-history"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run viewer-history")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_prints_json_lines_for_local_file() {
    let output = viewer_history(&[FIXTURE]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "{\"date\":\"2025-07-01\",\"count\":141}\n{\"date\":\"2025-07-02\",\"count\":132}\n"
    );
    assert!(stderr_of(&output).is_empty());
}

#[test]
fn test_writes_csv_when_requested() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("ブルーアーカイブ.csv");

    let output = viewer_history(&[FIXTURE, "--csv", csv_path.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output).lines().count(), 2);
    let content = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        content.lines().collect::<Vec<_>>(),
        vec!["date,count", "2025-07-01,141", "2025-07-02,132"]
    );
}

#[test]
fn test_unknown_argument_warns_but_runs() {
    let output = viewer_history(&[FIXTURE, "--unknown", "foo"]);

    assert!(output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("warning: unknown argument ignored: --unknown"));
    assert!(stderr.contains("warning: unknown argument ignored: foo"));
    assert_eq!(stdout_of(&output).lines().count(), 2);
}

#[test]
fn test_missing_argument_prints_usage() {
    let output = viewer_history(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).starts_with("Usage: viewer-history <title-or-html-file>"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_structure_error_exits_with_one() {
    let temp_dir = TempDir::new().unwrap();
    let page = temp_dir.path().join("empty.html");
    std::fs::write(&page, "<html><body>No next data</body></html>").unwrap();

    let output = viewer_history(&[page.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr_of(&output),
        "error: __NEXT_DATA__ script tag not found in HTML.\n"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_http_error_exits_with_one() {
    let server = MockServer::start();
    let article = server.mock(|when, then| {
        when.method(GET).path("/a/NoSuchArticle");
        then.status(404);
    });

    let base_url = server.url("/a/");
    let output = viewer_history(&["NoSuchArticle", "--base-url", &base_url]);

    article.assert();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).starts_with("error: HTTP 404 Not Found"));
    assert!(output.stdout.is_empty());
}
