//! 通用组件

pub mod lexer;
