mod common;
use common::*;

#[test]
fn eval_prints_one_result_per_line() {
    let dir = scratch_dir();
    let stdout = recalc_ok(dir.path(), &["eval", "add 5", "add 2", "repeat 2"]);
    assert_eq!(stdout, "5.00\n7.00\n14.00\n");
}

#[test]
fn eval_json_format() {
    let dir = scratch_dir();
    let stdout = recalc_ok(dir.path(), &["--format", "json", "eval", "add 1", "divide 0"]);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is JSON"))
        .collect();
    assert_eq!(lines[0]["current"], 1.0);
    assert!(lines[1]["current"].is_null());
}

#[test]
fn eval_stops_at_first_error() {
    let dir = scratch_dir();
    let stderr = recalc_fails(dir.path(), &["eval", "add 1", "repeat -1", "add 2"]);
    assert!(stderr.contains("repeat -1"), "{stderr}");
    assert!(stderr.contains("non-negative"), "{stderr}");
}

#[test]
fn eval_rejects_unknown_command() {
    let dir = scratch_dir();
    let stderr = recalc_fails(dir.path(), &["eval", "factorial"]);
    assert!(stderr.contains("unknown command"), "{stderr}");
}

#[test]
fn manual_lists_commands() {
    let dir = scratch_dir();
    let stdout = recalc_ok(dir.path(), &["manual"]);
    assert!(stdout.contains("repeat <n>"));
    assert!(stdout.contains("cancel"));
}

#[test]
fn repl_session_from_stdin() {
    let dir = scratch_dir();
    let out = recalc_with_stdin(dir.path(), &[], "add 5\nmultiply 2\nrepeat 2\nrepeat 3\nexit\n");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Welcome to The Calculator!\n"));
    assert!(stdout.contains("> 150.00\n"), "{stdout}");
    assert!(stdout.ends_with("Good bye!\n"));
}

#[test]
fn repl_reports_errors_and_continues() {
    let dir = scratch_dir();
    let out = recalc_with_stdin(dir.path(), &["repl"], "add 20 5\nadd 3\n\n");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("error: too many arguments"), "{stdout}");
    assert!(stdout.contains("3.00"), "{stdout}");
}

#[test]
fn config_file_in_working_directory() {
    let dir = scratch_dir();
    std::fs::write(
        dir.path().join("recalc.toml"),
        "[display]\nprecision = 1\n\n[engine]\nrepeat = \"flatten\"\n",
    )
    .unwrap();
    let stdout = recalc_ok(
        dir.path(),
        &["eval", "add 5", "multiply 2", "repeat 2", "repeat 3"],
    );
    assert_eq!(stdout.lines().last(), Some("130.0"));
}

#[test]
fn explicit_config_path() {
    let dir = scratch_dir();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[display]\nprecision = 0\n").unwrap();
    let stdout = recalc_ok(
        dir.path(),
        &["--config", path.to_str().unwrap(), "eval", "add 2.4"],
    );
    assert_eq!(stdout, "2\n");
}

#[test]
fn bad_config_fails_with_path() {
    let dir = scratch_dir();
    std::fs::write(dir.path().join("recalc.toml"), "[engine]\nreset = \"sometimes\"\n").unwrap();
    let stderr = recalc_fails(dir.path(), &["eval", "add 1"]);
    assert!(stderr.contains("recalc.toml"), "{stderr}");
}

#[test]
fn oversized_precision_is_rejected_at_load() {
    let dir = scratch_dir();
    std::fs::write(dir.path().join("recalc.toml"), "[display]\nprecision = 70000\n").unwrap();
    let stderr = recalc_fails(dir.path(), &["eval", "add 1"]);
    assert!(stderr.contains("recalc.toml: line 2"), "{stderr}");
    assert!(!stderr.contains("panicked"), "{stderr}");
}
