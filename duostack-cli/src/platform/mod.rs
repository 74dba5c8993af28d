//! 平台相关：终端 I/O 与错误输出

pub mod cli;
pub mod terminal;

pub use cli::print_error_with_source;
pub use terminal::StdIo;
