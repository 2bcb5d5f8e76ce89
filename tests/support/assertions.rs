//! Assertions over finished CLI runs.

use std::process::Output;

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Stdout of a run, lossily decoded.
pub fn stdout(output: &Output) -> String {
    text(&output.stdout)
}

/// Stderr of a run, lossily decoded.
pub fn stderr(output: &Output) -> String {
    text(&output.stderr)
}

/// The run exited with status 0.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "encvar exited with {}:\n{}",
        output.status,
        stderr(output)
    );
}

/// The run exited with a non-zero status.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "encvar unexpectedly succeeded:\n{}",
        stdout(output)
    );
}

pub fn assert_stdout_contains(output: &Output, needle: &str) {
    let out = stdout(output);
    assert!(out.contains(needle), "no {:?} in stdout:\n{}", needle, out);
}

pub fn assert_stderr_contains(output: &Output, needle: &str) {
    let err = stderr(output);
    assert!(err.contains(needle), "no {:?} in stderr:\n{}", needle, err);
}
