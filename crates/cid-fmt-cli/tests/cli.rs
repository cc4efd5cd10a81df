//! Runs the cidfmt binary end to end.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const V0_TEXT: &str = "QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zR1n";
const V1_TEXT: &str = "bafybeihdwdcefgh4dqkjv67uzcmw7ojee6xedzdetojuzjevtenxquvyku";

fn cidfmt(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cidfmt"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn format_prints_each_cid() {
    let output = cidfmt(&["format", "-f", "%s %h", "-v", "1", "-b", "base32", V0_TEXT]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{} sha2-256\n", V1_TEXT));
}

#[test]
fn format_reports_bad_items_and_continues() {
    let output = cidfmt(&["format", "not-a-cid", V1_TEXT]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), format!("{}\n", V1_TEXT));
    assert!(stderr(&output).contains("not-a-cid: "));
}

#[test]
fn format_rejects_bad_template() {
    let output = cidfmt(&["format", "-f", "plain", V0_TEXT]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).starts_with("Error: "));
}

#[test]
fn base32_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cidfmt"))
        .arg("base32")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(format!("{}\n{}\n", V0_TEXT, V1_TEXT).as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{}\n{}\n", V1_TEXT, V1_TEXT));
}

#[test]
fn codecs_listing_is_aligned() {
    let output = cidfmt(&["codecs", "--numeric"]);
    assert!(output.status.success());
    let out = stdout(&output);
    let raw = out.lines().find(|l| l.ends_with("  raw")).unwrap();
    let dag_pb = out.lines().find(|l| l.ends_with("  dag-pb")).unwrap();
    assert_eq!(raw.trim_start().split_whitespace().next(), Some("85"));
    assert_eq!(raw.len() - "raw".len(), dag_pb.len() - "dag-pb".len());
}

#[test]
fn hashes_listing_has_names() {
    let output = cidfmt(&["hashes"]);
    assert!(output.status.success());
    assert!(stdout(&output).lines().any(|l| l == "sha2-256"));
}
