//! Duostack Core - preprocessor, lexer and execution engine (pure logic, no IO)
//!
//! Only operates on in-memory data structures. Terminal input and output go
//! through the [`IoBoundary`] trait; the CLI supplies the standard-stream
//! implementation, tests use [`BufferedIo`].
//!
//! Configuration and loggers are passed explicitly, never through global state.
//!
//! ```
//! use duostack_core::{preprocess, BufferedIo, Engine, Lexer};
//!
//! let program = Lexer::new().tokenize(&preprocess("3 4+."));
//! let mut io = BufferedIo::new();
//! Engine::new(&program, &mut io).run().unwrap();
//! assert_eq!(io.output(), "7\n");
//! ```

pub mod kit;
pub mod preprocess;
pub mod runtime;

// Re-export common types
pub use kit::lexer::{
    ArithOp, Bracket, Lexer, Matcher, MatcherChain, Program, SourcePosition, Token, TokenKind,
};
pub use preprocess::{preprocess, preprocess_with_logger};
pub use runtime::{
    parse_integer_line, BufferedIo, Engine, ExitReason, InterpreterState, IoBoundary, IoError,
    RunSummary, RuntimeError,
};

// Re-export config types from duostack-config
pub use duostack_config::{EngineConfig, Phase};
