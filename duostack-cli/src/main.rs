//! Duostack CLI - Command line interface
//!
//! Reads program text from files (concatenated in order) or stdin, runs it,
//! and prints a trailing newline after normal completion.

use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

mod config;
mod logging;
mod platform;

use crate::config::LogConfig;
use crate::logging::LogFormat;
use crate::platform::{print_error_with_source, StdIo};
use duostack_api::{compile, echo, execute, DuostackError, ExitReason, ProjectConfig, RunConfig};
use duostack_log::info;

/// Stdin placeholder among the file arguments
const STDIN_ARG: &str = "-";

#[derive(Parser)]
#[command(
    name = "duostack",
    about = "Duostack - a two-stack esoteric language interpreter",
    version
)]
struct Cli {
    /// Program files, concatenated in order (stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Project file (JSON with entry, echo_source, log_level, engine)
    #[arg(long, value_name = "PATH")]
    project: Option<PathBuf>,

    /// Print the preprocessed program before running it
    #[arg(long)]
    echo: bool,

    /// Log level, optionally per phase: `info,engine=trace`
    #[arg(long, value_name = "LEVEL", value_parser = LogConfig::parse)]
    log_level: Option<LogConfig>,

    /// Log output format (written to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

fn main() {
    let cli = Cli::parse();

    let project = match &cli.project {
        Some(path) => match read_project(path) {
            Ok(p) => p,
            Err(e) => fail(&e, ""),
        },
        None => ProjectConfig::default(),
    };

    let log_config = cli
        .log_level
        .clone()
        .unwrap_or_else(|| LogConfig::new(project.log_level.unwrap_or_default()));
    let logger = logging::init(&log_config, cli.log_format);

    let config = RunConfig {
        echo_source: cli.echo || project.echo_source.unwrap_or(false),
        engine: project.engine.clone(),
        logger,
    };

    let inputs = resolve_inputs(&cli, &project);
    let source = match read_sources(&inputs) {
        Ok(s) => s,
        Err(e) => fail(&e, ""),
    };
    info!(config.logger, "Read {} bytes from {} input(s)", source.len(), inputs.len().max(1));

    let compiled = compile(&source, &config);
    let mut io = StdIo::new();

    if config.echo_source {
        if let Err(e) = echo(&compiled.expanded, &mut io) {
            fail(&e, "");
        }
    }

    match execute(&compiled.program, &config, &mut io) {
        Ok(output) => {
            if let Err(e) = finish(&mut io, output.exit) {
                fail(&DuostackError::Output(e.into()), "");
            }
        }
        Err(e) => {
            // the fault report wins over a failed flush
            let _ = io.flush();
            fail(&e, &compiled.expanded);
        }
    }
}

/// Trailing newline only after normal completion, then flush
fn finish(io: &mut StdIo, exit: ExitReason) -> std::io::Result<()> {
    if exit == ExitReason::Completed {
        io.write_str("\n")?;
    }
    io.flush()
}

/// Print the error and exit with status 1
fn fail(e: &DuostackError, source: &str) -> ! {
    print_error_with_source(e, source);
    process::exit(1);
}

/// Read and parse the project file
fn read_project(path: &Path) -> Result<ProjectConfig, DuostackError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        DuostackError::Input(format!("cannot read '{}': {}", path.display(), e))
    })?;
    let mut project = ProjectConfig::from_json(&content).map_err(|e| {
        DuostackError::Input(format!("cannot parse '{}': {}", path.display(), e))
    })?;

    // entry is relative to the project file
    if let Some(entry) = project.entry.take() {
        let base_dir = path.parent().unwrap_or(Path::new("."));
        project.entry = Some(base_dir.join(entry).to_string_lossy().into_owned());
    }
    Ok(project)
}

/// Command-line files win over the project entry
fn resolve_inputs(cli: &Cli, project: &ProjectConfig) -> Vec<PathBuf> {
    if !cli.files.is_empty() {
        return cli.files.clone();
    }
    project.entry.iter().map(PathBuf::from).collect()
}

/// Concatenate every input in order; no inputs means stdin
fn read_sources(inputs: &[PathBuf]) -> Result<String, DuostackError> {
    if inputs.is_empty() {
        return read_stdin();
    }

    let mut source = String::new();
    for path in inputs {
        if path.as_os_str() == STDIN_ARG {
            source.push_str(&read_stdin()?);
        } else {
            let text = std::fs::read_to_string(path).map_err(|e| {
                DuostackError::Input(format!("cannot read '{}': {}", path.display(), e))
            })?;
            source.push_str(&text);
        }
    }
    Ok(source)
}

fn read_stdin() -> Result<String, DuostackError> {
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .map_err(|e| DuostackError::Input(format!("cannot read stdin: {}", e)))?;
    Ok(source)
}
