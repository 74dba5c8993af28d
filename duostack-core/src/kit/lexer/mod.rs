//! Token chain 词法分析器
//!
//! 设计要点：
//! - 有序匹配链：按注册顺序尝试每个 matcher，第一个命中的胜出
//! - 贪婪/非贪婪：数字串一次吃完，其余符号一次一个字符
//! - 兜底 matcher 永远吃掉一个字符且不产生 token，保证有限输入必然终止

pub mod chain;
pub mod lexer;
pub mod position;
pub mod program;
pub mod token;

pub use chain::{Matcher, MatcherChain};
pub use lexer::{Lexer, Tokens};
pub use position::SourcePosition;
pub use program::Program;
pub use token::{ArithOp, Bracket, Token, TokenKind};
