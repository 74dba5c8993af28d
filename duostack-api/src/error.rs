//! 对外的错误类型
//!
//! [`DuostackError`] 覆盖读程序、回显和执行三类失败；[`ErrorReport`]
//! 是它的扁平化版本，供终端打印或序列化。

use serde::Serialize;
use thiserror::Error;

use duostack_config::Phase;
use duostack_core::{IoError, RuntimeError, SourcePosition};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DuostackError {
    /// 引擎遇到致命故障，程序中止
    #[error("{0}")]
    Runtime(#[from] RuntimeError),

    #[error("Input error: {0}")]
    Input(String),

    /// 只会在 `echo_source` 打开时出现
    #[error("Output error: {0}")]
    Output(IoError),
}

impl DuostackError {
    /// 只有引擎故障带位置
    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            DuostackError::Runtime(fault) => Some(fault.position()),
            DuostackError::Input(_) | DuostackError::Output(_) => None,
        }
    }

    pub fn line(&self) -> Option<usize> {
        self.position().map(|at| at.line)
    }

    pub fn column(&self) -> Option<usize> {
        self.position().map(|at| at.column)
    }

    pub fn phase(&self) -> &'static str {
        match self {
            DuostackError::Runtime(_) => Phase::Engine.as_str(),
            DuostackError::Input(_) => "input",
            DuostackError::Output(_) => "output",
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            DuostackError::Runtime(fault) => fault.kind_name(),
            DuostackError::Input(_) => "InputError",
            DuostackError::Output(_) => "OutputError",
        }
    }

    pub fn to_report(&self) -> ErrorReport {
        let at = self.position();
        ErrorReport {
            phase: self.phase(),
            line: at.map(|p| p.line),
            column: at.map(|p| p.column),
            offset: at.map(|p| p.offset),
            error_kind: self.kind_name().to_string(),
            message: match self {
                DuostackError::Input(reason) => reason.clone(),
                DuostackError::Output(io) => io.to_string(),
                DuostackError::Runtime(fault) => fault.to_string(),
            },
        }
    }
}

/// 位置字段都从 1 开始；`offset` 是预处理后源码里的字符下标
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub phase: &'static str,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub offset: Option<usize>,
    pub error_kind: String,
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let (Some(line), Some(column)) = (self.line, self.column) {
            write!(f, "[{line}:{column}] ")?;
        }
        write!(f, "{} error: {}", self.phase, self.message)
    }
}

impl ErrorReport {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!("{{\"phase\":\"{}\",\"error_kind\":\"SerializeError\"}}", self.phase)
        })
    }

    /// `phase: message`，不带位置
    pub fn to_short(&self) -> String {
        format!("{}: {}", self.phase, self.message)
    }
}
