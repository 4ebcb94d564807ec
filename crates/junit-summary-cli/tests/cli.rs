//! End-to-end tests for the junit-summary binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const REPORT: &str = r#"<testsuite tests="2" failures="1" time="0.75">
    <testcase classname="cli" name="passes" time="0.25"/>
    <testcase classname="cli" name="fails &amp; &lt;breaks&gt;" time="0.5">
        <failure>expected 1</failure>
    </testcase>
</testsuite>"#;

fn run(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_junit-summary"))
        .args(args)
        .current_dir(cwd)
        .env_remove("JUNIT_SUMMARY_TOP")
        .env_remove("JUNIT_SUMMARY_HTML")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn missing_input_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&["nope.xml"], dir.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error: JUnit XML not found: nope.xml"));
}

#[test]
fn default_path_is_debug_junit_xml() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("debug")).unwrap();
    fs::write(dir.path().join("debug/junit.xml"), REPORT).unwrap();

    let output = run(&[], dir.path());
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("JUnit: debug/junit.xml\n"));
    assert!(text.contains("- cli :: fails & <breaks> (0.500s)\n  failure: expected 1\n"));
}

#[test]
fn top_limits_slowest_list() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("r.xml"), REPORT).unwrap();

    let output = run(&["r.xml", "--top", "1"], dir.path());
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.ends_with("Slowest 1 tests:\n- 0.500s  cli :: fails & <breaks>\n"));
}

#[test]
fn html_mode_writes_file_and_confirms() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("r.xml"), REPORT).unwrap();

    let output = run(&["r.xml", "--html", "out/nested/report.html"], dir.path());
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Wrote: out/nested/report.html\n");

    let html = fs::read_to_string(dir.path().join("out/nested/report.html")).unwrap();
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("fails &amp; &lt;breaks&gt;"));
    assert!(!html.contains("<breaks>"));
}

#[test]
fn json_mode_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("r.xml"), REPORT).unwrap();

    let output = run(&["r.xml", "--json"], dir.path());
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("\"failed\""));
    assert!(text.contains("\"tests\": 2"));
}

#[test]
fn malformed_input_fails_without_report() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.xml"), "<testsuite>").unwrap();

    let output = run(&["bad.xml"], dir.path());
    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
