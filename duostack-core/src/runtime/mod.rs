//! 运行时：解释器状态、执行引擎与 I/O 边界

mod dispatch;
pub mod engine;
pub mod error;
pub mod io;
pub mod operators;
pub mod state;

pub use engine::{Engine, ExitReason, RunSummary};
pub use error::RuntimeError;
pub use io::{parse_integer_line, BufferedIo, IoBoundary, IoError};
pub use operators::ArithFault;
pub use state::InterpreterState;
