//! Integration tests for the cmdprefix command-line tool.
//!
//! Each test runs the built binary against the dictionaries in
//! `tests/fixtures/`, with `--config` pointed at a scratch directory so the
//! user's own configuration never leaks in.

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::io::Write;
use tempfile::TempDir;

/// Path to a fixture file
fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

/// Run cmdprefix with a private config path and colors disabled
fn run(args: &[&str], config_dir: &TempDir) -> Output {
    let config = config_dir.path().join("config.json");
    // Global flags go first: `commands` swallows everything after the phrase
    Command::new(env!("CARGO_BIN_EXE_cmdprefix"))
        .arg("--no-color")
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run cmdprefix")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_commands_subcommand() {
    let dir = TempDir::new().unwrap();
    let output = run(&["commands", &fixture("commands.txt"), "prun", "build"], &dir);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "run\nbuild\n");
}

#[test]
fn test_commands_normalizes_phrase() {
    let dir = TempDir::new().unwrap();
    let output = run(&["commands", &fixture("commands.txt"), "!!PING"], &dir);
    assert_eq!(stdout(&output), "ping\n");

    let output = run(&["commands", "--raw", &fixture("commands.txt"), "!!PING"], &dir);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_prefixes_json() {
    let dir = TempDir::new().unwrap();
    let output = run(&["prefixes", "--json", &fixture("prefixes.txt"), "!!help"], &dir);

    assert!(output.status.success());
    let parsed: Vec<String> = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(parsed, vec!["!!", "!"]);
}

#[test]
fn test_first_prefix_keeps_trailing_space() {
    let dir = TempDir::new().unwrap();
    let output = run(&["first", "--json", &fixture("prefixes.txt"), "pls help"], &dir);

    assert!(output.status.success());
    let parsed: String = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(parsed, "pls ");
}

#[test]
fn test_first_prefix_no_match_exit_code() {
    let dir = TempDir::new().unwrap();
    let output = run(&["first", &fixture("prefixes.txt"), "hello"], &dir);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_first_prefix_no_match_json_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let output = run(&["first", "--json", &fixture("prefixes.txt"), "hello"], &dir);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_scan_file() {
    let dir = TempDir::new().unwrap();
    let output = run(&["scan", &fixture("commands.txt"), &fixture("messages.txt")], &dir);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "1:prun build -> run build\n3:!!ping everyone -> ping\n4:please skip -> skip\n"
    );
}

#[test]
fn test_scan_stdin_prefixes_json() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    let mut child = Command::new(env!("CARGO_BIN_EXE_cmdprefix"))
        .args(["scan", "--json", "--mode", "prefixes", &fixture("prefixes.txt")])
        .arg("--config")
        .arg(&config)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn cmdprefix");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"!ping\nhello\n$bal\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["matches"], serde_json::json!(["!"]));
    assert_eq!(lines[1]["matches"], serde_json::json!([]));
    assert_eq!(lines[2]["line"], 3);
    assert_eq!(lines[2]["matches"], serde_json::json!(["$"]));
}

#[test]
fn test_scan_sequential_matches_parallel() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"parallel_batch": false}"#,
    )
    .unwrap();

    let output = run(&["scan", &fixture("commands.txt"), &fixture("messages.txt")], &dir);
    assert_eq!(
        stdout(&output),
        "1:prun build -> run build\n3:!!ping everyone -> ping\n4:please skip -> skip\n"
    );
}

#[test]
fn test_config_init_and_show() {
    let dir = TempDir::new().unwrap();
    let output = run(&["config", "--init"], &dir);
    assert!(output.status.success());
    assert!(dir.path().join("config.json").exists());

    let output = run(&["config"], &dir);
    assert!(output.status.success());
    assert!(stdout(&output).contains("\"max_width\": 100"));
}

#[test]
fn test_missing_dictionary_fails() {
    let dir = TempDir::new().unwrap();
    let output = run(&["prefixes", "/no/such/dictionary.txt", "x"], &dir);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to open dictionary"));
}
