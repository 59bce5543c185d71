//! Integration tests for the heap-layout binary.
//!
//! These tests run the compiled binary and check the chart JSON it prints.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_heap-layout"))
}

/// Run the binary with the given stdin input and extra CLI args.
fn run_binary(input: &str, extra_args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(extra_args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

/// Run and parse stdout as JSON, asserting success.
fn run_json(input: &str, extra_args: &[&str]) -> Value {
    let output = run_binary(input, extra_args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn series(doc: &Value) -> &Value {
    &doc["series"][0]
}

#[test]
fn test_stdin_values() {
    let doc = run_json("9, 86, 1, 2, 10, 50, 37", &[]);
    let data = series(&doc)["data"].as_array().unwrap();
    assert_eq!(data.len(), 7);
    assert_eq!(data[0]["value"], 1);
    assert_eq!(series(&doc)["links"].as_array().unwrap().len(), 6);
    assert_eq!(doc["title"], "heap graph");
}

#[test]
fn test_inline_values_flag() {
    let doc = run_json("", &["--values", "[3, 2, 1]"]);
    let data = series(&doc)["data"].as_array().unwrap();
    let values: Vec<i64> = data.iter().map(|n| n["value"].as_i64().unwrap()).collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_demo_flag() {
    let doc = run_json("", &["--demo"]);
    assert_eq!(series(&doc)["data"].as_array().unwrap().len(), 11);
    assert_eq!(series(&doc)["links"].as_array().unwrap().len(), 10);
}

#[test]
fn test_input_file() {
    let dir = std::env::temp_dir().join(format!("heap-layout-e2e-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("values.txt");
    fs::write(&path, "# heap\n5 4 3\n").unwrap();

    let doc = run_json("", &[path.to_str().unwrap()]);
    assert_eq!(series(&doc)["data"][0]["value"], 3);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_output_file() {
    let dir = std::env::temp_dir().join(format!("heap-layout-out-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("chart.json");

    let output = run_binary("1 2 3", &["-o", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(series(&doc)["data"].as_array().unwrap().len(), 3);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_geometry_flags() {
    let doc = run_json(
        "1 2 3",
        &["--step-x", "50", "--origin-x", "0", "--origin-y", "0"],
    );
    let data = series(&doc)["data"].as_array().unwrap();
    assert_eq!(data[1]["x"], -50.0);
    assert_eq!(data[2]["x"], 50.0);
    assert_eq!(data[2]["y"], 10.0);
}

#[test]
fn test_chart_option_flags() {
    let doc = run_json(
        "1",
        &["--title", "t", "--layout", "none", "--no-roam", "--symbol-size", "8"],
    );
    assert_eq!(doc["title"], "t");
    assert_eq!(series(&doc)["layout"], "none");
    assert_eq!(series(&doc)["roam"], false);
    assert_eq!(series(&doc)["data"][0]["symbolSize"], 8);
}

#[test]
fn test_pretty_flag() {
    let output = run_binary("1 2", &["--pretty"]);
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("\n  \"series\""));
}

#[test]
fn test_empty_input_gives_empty_chart() {
    let doc = run_json("", &[]);
    assert!(series(&doc)["data"].as_array().unwrap().is_empty());
}

#[test]
fn test_bad_token_fails() {
    let output = run_binary("1, banana", &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("banana"), "stderr: {stderr}");
}

#[test]
fn test_missing_file_fails() {
    let output = run_binary("", &["/definitely/not/here.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read"));
}

#[test]
fn test_zero_spacing_rejected() {
    let output = run_binary("1 2", &["--spacing", "0"]);
    assert!(!output.status.success());
}

#[test]
fn test_non_finite_geometry_rejected() {
    for args in [
        ["--step-x", "nan"],
        ["--step-y", "inf"],
        ["--origin-x", "-inf"],
        ["--origin-y", "inf"],
    ] {
        let output = run_binary("3, 2, 1", &args);
        assert!(!output.status.success(), "{args:?} was accepted");
        assert!(output.stdout.is_empty(), "{args:?} printed a chart");
    }
}

#[test]
fn test_origin_beyond_probe_resolution_fails() {
    let output = run_binary("", &["--values", "1,2,3,4,5,6,7", "--origin-x", "1e18"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("origin_x"), "stderr: {stderr}");
}

#[test]
fn test_negative_step_accepted() {
    let doc = run_json("3, 2, 1", &["--step-x", "-10"]);
    let xs: Vec<f64> = series(&doc)["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["x"].as_f64().unwrap())
        .collect();
    assert_eq!(xs, vec![200.0, 210.0, 190.0]);
}
