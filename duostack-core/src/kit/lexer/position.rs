//! 源代码位置追踪

use std::fmt;

/// 源代码位置
///
/// - line/column：1-based，用于错误显示
/// - offset：0-based，按字符计数，即 token 的 source index
/// - byte_offset：0-based，UTF-8 字节偏移
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, offset: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
            byte_offset,
        }
    }

    /// 文件起始位置
    pub fn start() -> Self {
        Self::new(1, 1, 0, 0)
    }

    /// 越过一个字符
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.offset += 1;
        self.byte_offset += c.len_utf8();
    }

    /// 越过一段文本
    pub fn advance_str(&mut self, text: &str) {
        text.chars().for_each(|c| self.advance(c));
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
