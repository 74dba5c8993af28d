//! 运行时错误
//!
//! 每种致命故障一个变体；与 token 相关的故障携带该 token 的源码位置。

use thiserror::Error;

use super::io::IoError;
use crate::kit::lexer::SourcePosition;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// 括号扫描越过了程序两端
    #[error("unmatched bracket '{bracket}' at {at}")]
    UnmatchedBracket { bracket: char, at: SourcePosition },

    /// `/` 或 `%` 的右操作数为 0
    #[error("'{op}' by zero at {at}")]
    DivisionByZero { op: char, at: SourcePosition },

    #[error("integer overflow in '{op}' at {at}")]
    Overflow { op: char, at: SourcePosition },

    #[error("number literal {text} does not fit in 64 bits at {at}")]
    LiteralOutOfRange { text: String, at: SourcePosition },

    #[error("{value} is not a valid character code at {at}")]
    InvalidCodePoint { value: i64, at: SourcePosition },

    #[error("malformed integer input {input:?} at {at}")]
    MalformedInput { input: String, at: SourcePosition },

    #[error("I/O error at {at}: {source}")]
    Io {
        #[source]
        source: IoError,
        at: SourcePosition,
    },
}

impl RuntimeError {
    /// 把 I/O 边界的错误挂到当前 token 上
    pub(crate) fn from_io(error: IoError, at: SourcePosition) -> Self {
        match error {
            IoError::Malformed(input) => RuntimeError::MalformedInput { input, at },
            source => RuntimeError::Io { source, at },
        }
    }

    /// 故障所在的源码位置
    pub fn position(&self) -> SourcePosition {
        match self {
            RuntimeError::UnmatchedBracket { at, .. }
            | RuntimeError::DivisionByZero { at, .. }
            | RuntimeError::Overflow { at, .. }
            | RuntimeError::LiteralOutOfRange { at, .. }
            | RuntimeError::InvalidCodePoint { at, .. }
            | RuntimeError::MalformedInput { at, .. }
            | RuntimeError::Io { at, .. } => *at,
        }
    }

    /// 故障种类名（报告用）
    pub fn kind_name(&self) -> &'static str {
        match self {
            RuntimeError::UnmatchedBracket { .. } => "UnmatchedBracket",
            RuntimeError::DivisionByZero { .. } => "DivisionByZero",
            RuntimeError::Overflow { .. } => "Overflow",
            RuntimeError::LiteralOutOfRange { .. } => "LiteralOutOfRange",
            RuntimeError::InvalidCodePoint { .. } => "InvalidCodePoint",
            RuntimeError::MalformedInput { .. } => "MalformedInput",
            RuntimeError::Io { .. } => "Io",
        }
    }
}
