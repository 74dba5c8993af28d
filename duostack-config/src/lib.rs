//! Duostack Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It is the shared configuration vocabulary of the Duostack crates and
//! the schema of the `duostack.json` project file.

use serde::{Deserialize, Serialize};

/// Configuration for the execution engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Sleep interval of the wait token (`w`), in milliseconds
    pub wait_interval_ms: u64,
    /// Initial capacity reserved for each of the two stacks
    pub stack_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            wait_interval_ms: 1,
            stack_capacity: 64,
        }
    }
}

/// Log verbosity as written in project files and on the command line
///
/// Ordered from least to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No log output at all
    #[default]
    Silent,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Silent => "silent",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse a level name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" | "off" => Some(LogLevel::Silent),
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Pipeline phase, used for log targets and error reports
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Preprocess,
    Lexer,
    Engine,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Preprocess => "preprocess",
            Phase::Lexer => "lexer",
            Phase::Engine => "engine",
        }
    }

    /// Log target name for this phase
    pub fn target(&self) -> String {
        format!("duostack::{}", self.as_str())
    }
}

/// Project file (`duostack.json`)
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Program file, relative to the project file
    pub entry: Option<String>,
    /// Print the preprocessed program before running it
    pub echo_source: Option<bool>,
    pub log_level: Option<LogLevel>,
    pub engine: EngineConfig,
}

impl ProjectConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
