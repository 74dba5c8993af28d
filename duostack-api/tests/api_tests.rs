//! API 端到端测试

use duostack_api::{
    compile, run_captured, DuostackError, EngineConfig, ExitReason, RunConfig, RuntimeError,
};
use duostack_core::BufferedIo;
use duostack_log::{Level, LogConfig};

fn captured(source: &str) -> String {
    run_captured(source, &RunConfig::default(), BufferedIo::new())
        .unwrap()
        .stdout
}

#[test]
fn test_examples_from_the_language_guide() {
    assert_eq!(captured("5."), "5\n");
    assert_eq!(captured("3 4+."), "7\n");
    assert_eq!(captured("7v^."), "7\n");
    assert_eq!(captured("1?,,"), "\u{0}");
}

#[test]
fn test_terminate_is_success() {
    let output = run_captured("5&.", &RunConfig::default(), BufferedIo::new()).unwrap();
    assert_eq!(output.exit, ExitReason::Terminated);
    assert_eq!(output.stdout, "");
}

#[test]
fn test_hello_world() {
    let source = "i\"Hello, World!\";[,:!?]";
    assert_eq!(captured(source), "Hello, World!");
}

#[test]
fn test_scripted_input() {
    let io = BufferedIo::new().with_lines(["6", "7"]);
    let output = run_captured("##*.", &RunConfig::default(), io).unwrap();
    assert_eq!(output.stdout, "42\n");
}

#[test]
fn test_fault_maps_to_report() {
    let err = run_captured("\n  1 0%", &RunConfig::default(), BufferedIo::new()).unwrap_err();

    assert!(matches!(
        err,
        DuostackError::Runtime(RuntimeError::DivisionByZero { op: '%', .. })
    ));
    let report = err.to_report();
    assert_eq!((report.line, report.column), (Some(2), Some(6)));
    assert_eq!(report.phase, "engine");
}

#[test]
fn test_engine_config_is_used() {
    let config = RunConfig {
        engine: EngineConfig {
            wait_interval_ms: 0,
            stack_capacity: 1,
        },
        ..RunConfig::default()
    };
    let output = run_captured("wwww1.", &config, BufferedIo::new()).unwrap();
    assert_eq!(output.stdout, "1\n");
}

#[test]
fn test_logging_through_ring_buffer() {
    let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(256).init();
    let ring = ring.expect("ring buffer configured");
    let config = RunConfig::with_logger(logger);

    run_captured("i\"a\"[.]", &config, BufferedIo::new()).unwrap();

    assert!(ring.contains("Starting execution"));
    assert!(ring.contains("Expanded"));
    assert!(ring.contains("Engine started"));
    assert!(ring.contains("jumps from 2 to 4"));
    assert!(ring.contains("Execution completed"));
}

#[test]
fn test_compile_is_pure() {
    let config = RunConfig::default();
    let first = compile("1 2+", &config);
    let second = compile("1 2+", &config);
    assert_eq!(first.program, second.program);
    assert_eq!(first.program.to_string(), "1 2+");
}
