//! Shared test helpers for recalc integration tests.
//!
//! Every binary invocation runs in its own temp directory with the recalc
//! environment variables cleared, so no stray `recalc.toml` or log setting
//! leaks into a test.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// A scratch working directory for one test.
pub fn scratch_dir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

fn recalc_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_recalc"));
    cmd.args(args)
        .current_dir(dir)
        .env_remove("RECALC_CONFIG")
        .env_remove("RECALC_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Run recalc with `args` in `dir`.
pub fn recalc_in(dir: &Path, args: &[&str]) -> Output {
    recalc_command(dir, args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to execute recalc")
}

/// Run recalc with `args` in `dir`, feeding `stdin` to it.
pub fn recalc_with_stdin(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = recalc_command(dir, args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn recalc");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for recalc")
}

/// Run recalc and assert it succeeds. Returns stdout as string.
pub fn recalc_ok(dir: &Path, args: &[&str]) -> String {
    let out = recalc_in(dir, args);
    let stderr = String::from_utf8_lossy(&out.stderr);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        out.status.success(),
        "recalc {} failed:\nstdout: {stdout}\nstderr: {stderr}",
        args.join(" "),
    );
    stdout.to_string()
}

/// Run recalc and assert it fails. Returns stderr as string.
pub fn recalc_fails(dir: &Path, args: &[&str]) -> String {
    let out = recalc_in(dir, args);
    assert!(
        !out.status.success(),
        "Expected recalc {} to fail, but it succeeded.\nstdout: {}",
        args.join(" "),
        String::from_utf8_lossy(&out.stdout),
    );
    String::from_utf8_lossy(&out.stderr).to_string()
}
