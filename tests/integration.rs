//! Integration tests for the sparkcells CLI

use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

use tempfile::TempDir;

fn sparkcells(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sparkcells"))
        .args(args)
        .env_remove("NO_COLOR")
        .output()
        .expect("failed to execute sparkcells")
}

fn stdout_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

// =============================================================================
// column
// =============================================================================

#[test]
fn test_column_from_arguments() {
    let out = sparkcells(&["--no-color", "column", "1", "2", "3", "2", "1"]);
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "▁▅█▅▁\n");
}

#[test]
fn test_column_colours_by_sign() {
    let out = sparkcells(&["column", "--scheme", "signed", "--", "-1", "1"]);
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "\x1b[31m▁\x1b[0m█\n");
}

#[test]
fn test_column_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("series.txt");
    std::fs::write(&path, "# load\n1\n2\n\n3\n").unwrap();

    let out = sparkcells(&["--no-color", "column", "--file", path.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "▁▅█\n");
}

#[test]
fn test_column_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sparkcells"))
        .args(["--no-color", "column"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"3\n1\n").unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "█▁\n");
}

#[test]
fn test_column_reports_bad_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "1\nfoo\n").unwrap();

    let out = sparkcells(&["column", "--file", path.to_str().unwrap()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 2"), "{stderr}");
}

// =============================================================================
// bar
// =============================================================================

#[test]
fn test_bar_blank_cells() {
    let out = sparkcells(&["--no-color", "bar", "--width", "10", "1", "1"]);
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), format!("{}\n", " ".repeat(10)));
}

#[test]
fn test_bar_label_template() {
    let out = sparkcells(&[
        "--no-color",
        "bar",
        "--width",
        "12",
        "--label",
        "{pct}%",
        "1",
        "3",
    ]);
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "25%75%      \n");
}

#[test]
fn test_bar_unknown_scheme_fails() {
    let out = sparkcells(&["bar", "--width", "10", "--scheme", "nope", "1"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope"));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_bar_zero_width_fails() {
    let out = sparkcells(&["bar", "--width", "0", "1", "2"]);
    assert!(!out.status.success());
}

#[test]
fn test_debug_prints_timing() {
    let out = sparkcells(&["--debug", "--no-color", "bar", "--width", "6", "1", "2"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("µs"));
}

// =============================================================================
// listings
// =============================================================================

#[test]
fn test_schemes_lists_builtins() {
    let out = sparkcells(&["--no-color", "schemes"]);
    assert!(out.status.success());
    let stdout = stdout_of(&out);
    for name in ["mono", "rotate_16", "rotate_256", "rotate_true", "signed"] {
        assert!(stdout.contains(name), "missing {name}");
    }
}

#[test]
fn test_examples() {
    let out = sparkcells(&["examples"]);
    assert!(out.status.success());
    assert!(stdout_of(&out).contains("sparkcells column"));
}
