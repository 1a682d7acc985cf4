use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Runs `score` with `input` on stdin; returns the exit code and parsed stdout.
pub fn score_stdin(input: &str) -> (Option<i32>, Value) {
    let output = cargo_bin_cmd!("jaccard-similarity")
        .arg("score")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value = serde_json::from_str(stdout.trim()).unwrap();
    (output.status.code(), value)
}
