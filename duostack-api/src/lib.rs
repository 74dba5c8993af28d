//! Duostack API - Execution orchestration layer
//!
//! Provides the unified execution interface:
//! - Pipeline orchestration (preprocess, lex, run)
//! - Configuration (RunConfig), always passed explicitly
//! - Unified error handling (DuostackError, ErrorReport)

use duostack_log::{debug, info};

use duostack_core::{preprocess_with_logger, BufferedIo, Engine, IoBoundary, Lexer, Program};

pub mod config;
pub mod error;
pub mod types;

pub use config::RunConfig;
pub use error::{DuostackError, ErrorReport};
pub use types::{CompileOutput, ExecuteOutput};

// Re-export config and core types
pub use duostack_config::{self, EngineConfig, LogLevel, Phase, ProjectConfig};
pub use duostack_core::{ExitReason, IoError, RuntimeError, SourcePosition};

/// Preprocess and tokenize a program
pub fn compile(source: &str, config: &RunConfig) -> CompileOutput {
    debug!(config.logger, "Preprocessing {} bytes", source.len());
    let expanded = preprocess_with_logger(source, &config.logger);
    let program = Lexer::with_logger(config.logger.clone()).tokenize(&expanded);

    CompileOutput { expanded, program }
}

/// Run a program against the given I/O boundary
///
/// Output goes straight to `io`; `ExecuteOutput::stdout` stays empty.
pub fn run(
    source: &str,
    config: &RunConfig,
    io: &mut dyn IoBoundary,
) -> Result<ExecuteOutput, DuostackError> {
    info!(config.logger, "Starting execution");

    let compiled = compile(source, config);
    if config.echo_source {
        echo(&compiled.expanded, io)?;
    }

    let output = execute(&compiled.program, config, io)?;
    info!(config.logger, "Execution completed");
    Ok(output)
}

/// Run a compiled program
pub fn execute(
    program: &Program,
    config: &RunConfig,
    io: &mut dyn IoBoundary,
) -> Result<ExecuteOutput, DuostackError> {
    let mut engine =
        Engine::with_logger(program, io, config.engine.clone(), config.logger.clone());
    let summary = engine.run()?;

    Ok(ExecuteOutput {
        exit: summary.exit,
        steps: summary.steps,
        stdout: String::new(),
    })
}

/// Run a program with scripted input and capture everything it prints
pub fn run_captured(
    source: &str,
    config: &RunConfig,
    mut io: BufferedIo,
) -> Result<ExecuteOutput, DuostackError> {
    let mut output = run(source, config, &mut io)?;
    output.stdout = io.into_output();
    Ok(output)
}

/// Write the preprocessed program and a newline through `io`
///
/// `run` calls this when `echo_source` is set; callers that drive
/// `compile` and `execute` themselves use it directly.
pub fn echo(text: &str, io: &mut dyn IoBoundary) -> Result<(), DuostackError> {
    text.chars()
        .chain(std::iter::once('\n'))
        .try_for_each(|c| io.emit_text(c))
        .map_err(DuostackError::Output)
}
