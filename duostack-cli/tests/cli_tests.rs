//! 二进制端到端测试

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_duostack(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_duostack"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start duostack");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write program");
    child.wait_with_output().expect("failed to wait for duostack")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_trailing_newline_after_completion() {
    let output = run_duostack(&[], "5.");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "5\n\n");
}

#[test]
fn test_terminate_skips_trailing_newline() {
    let output = run_duostack(&[], "5&.");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "");
}

#[test]
fn test_fault_exits_non_zero_and_keeps_output() {
    let output = run_duostack(&[], "7.\n1 0/");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "7\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'/' by zero at 2:4"));
    assert!(stderr.contains("2 | 1 0/"));
}

#[test]
fn test_echo_prints_expanded_source() {
    let output = run_duostack(&["--echo"], "\"A\",");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "65_,\nA\n");
}

#[test]
fn test_dash_reads_stdin() {
    let output = run_duostack(&["-"], "3 4+.");
    assert_eq!(stdout_of(&output), "7\n\n");
}

#[test]
fn test_missing_file_is_input_error() {
    let output = run_duostack(&["/nonexistent/duostack/prog.ds"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Input error"));
}

#[test]
fn test_logs_go_to_stderr() {
    let output = run_duostack(&["--log-level", "info"], "5.");
    assert_eq!(stdout_of(&output), "5\n\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Engine started"));
}

#[test]
fn test_plain_log_format() {
    let output = run_duostack(&["--log-level", "debug", "--log-format", "plain"], "1(2)");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEBUG duostack_core::runtime::dispatch: Bracket '(' jumps from 1 to 3"));
}

fn program_file(name: &str, text: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("duostack-cli-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_stdin_feeds_integer_and_key_reads() {
    let path = program_file("double_then_key.ds", "#2*.k.");
    let output = run_duostack(&[path.to_str().unwrap()], "21\nA");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "?: 42\n65\n\n");
}

#[test]
fn test_key_read_at_eof_is_zero() {
    let path = program_file("key_at_eof.ds", "k.");
    let output = run_duostack(&[path.to_str().unwrap()], "");
    assert_eq!(stdout_of(&output), "0\n\n");
}

#[test]
fn test_integer_read_at_eof_is_fault() {
    let path = program_file("int_at_eof.ds", "#.");
    let output = run_duostack(&[path.to_str().unwrap()], "");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "?: ");
}

#[test]
fn test_closed_stdout_on_final_newline_fails() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_duostack"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start duostack");

    // the reader is gone before the program is even read
    drop(child.stdout.take());
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"1 2+")
        .expect("failed to write program");

    let output = child.wait_with_output().expect("failed to wait for duostack");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Output error"));
}
