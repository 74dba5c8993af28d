//! I/O 边界
//!
//! 引擎只通过 [`IoBoundary`] 与外界交互。CLI 提供标准流实现，
//! [`BufferedIo`] 提供脚本化输入和捕获输出，用于测试与嵌入。

use std::collections::VecDeque;

use thiserror::Error;

/// I/O 边界上的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IoError {
    /// 输入行不是整数
    #[error("malformed integer input {0:?}")]
    Malformed(String),
    #[error("unexpected end of input")]
    Eof,
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for IoError {
    fn from(err: std::io::Error) -> Self {
        IoError::Other(err.to_string())
    }
}

/// 引擎消费的 I/O 能力集合
pub trait IoBoundary {
    /// 输出单个字符，不带换行
    fn emit_text(&mut self, c: char) -> Result<(), IoError>;

    /// 输出一个十进制整数并换行
    fn emit_number_line(&mut self, text: &str) -> Result<(), IoError>;

    /// 读一行并解析为整数
    fn read_line_as_integer(&mut self) -> Result<i64, IoError>;

    /// 读取一个按键的码点；无法读取时返回 0
    fn read_key(&mut self) -> i64;
}

impl<T: IoBoundary + ?Sized> IoBoundary for &mut T {
    fn emit_text(&mut self, c: char) -> Result<(), IoError> {
        (**self).emit_text(c)
    }

    fn emit_number_line(&mut self, text: &str) -> Result<(), IoError> {
        (**self).emit_number_line(text)
    }

    fn read_line_as_integer(&mut self) -> Result<i64, IoError> {
        (**self).read_line_as_integer()
    }

    fn read_key(&mut self) -> i64 {
        (**self).read_key()
    }
}

/// 解析一行整数输入：允许首尾空白和正负号
pub fn parse_integer_line(line: &str) -> Result<i64, IoError> {
    line.trim()
        .parse::<i64>()
        .map_err(|_| IoError::Malformed(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

/// 内存 I/O：预置输入行和按键，捕获所有输出
#[derive(Debug, Clone, Default)]
pub struct BufferedIo {
    lines: VecDeque<String>,
    keys: VecDeque<char>,
    output: String,
}

impl BufferedIo {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置供 `#` 读取的输入行
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// 预置供 `k` 读取的按键
    pub fn with_keys(mut self, keys: &str) -> Self {
        self.keys.extend(keys.chars());
        self
    }

    /// 目前捕获的输出
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

impl IoBoundary for BufferedIo {
    fn emit_text(&mut self, c: char) -> Result<(), IoError> {
        self.output.push(c);
        Ok(())
    }

    fn emit_number_line(&mut self, text: &str) -> Result<(), IoError> {
        self.output.push_str(text);
        self.output.push('\n');
        Ok(())
    }

    fn read_line_as_integer(&mut self) -> Result<i64, IoError> {
        let line = self.lines.pop_front().ok_or(IoError::Eof)?;
        parse_integer_line(&line)
    }

    fn read_key(&mut self) -> i64 {
        self.keys.pop_front().map_or(0, |c| i64::from(u32::from(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_line() {
        assert_eq!(parse_integer_line("42\n"), Ok(42));
        assert_eq!(parse_integer_line("  -7 "), Ok(-7));
        assert_eq!(parse_integer_line("+3"), Ok(3));
        assert_eq!(
            parse_integer_line("abc\n"),
            Err(IoError::Malformed("abc".into()))
        );
        assert!(parse_integer_line("").is_err());
        assert!(parse_integer_line("1.5").is_err());
    }

    #[test]
    fn test_buffered_output() {
        let mut io = BufferedIo::new();
        io.emit_number_line("12").unwrap();
        io.emit_text('A').unwrap();
        assert_eq!(io.output(), "12\nA");
        assert_eq!(io.into_output(), "12\nA");
    }

    #[test]
    fn test_buffered_input() {
        let mut io = BufferedIo::new().with_lines(["5", "x"]).with_keys("a");

        assert_eq!(io.read_line_as_integer(), Ok(5));
        assert!(matches!(io.read_line_as_integer(), Err(IoError::Malformed(_))));
        assert_eq!(io.read_line_as_integer(), Err(IoError::Eof));
        assert_eq!(io.read_key(), 97);
        assert_eq!(io.read_key(), 0);
    }

    #[test]
    fn test_mut_ref_forwarding() {
        fn emit<I: IoBoundary>(mut io: I) {
            io.emit_text('z').unwrap();
        }
        let mut io = BufferedIo::new();
        emit(&mut io);
        assert_eq!(io.output(), "z");
    }
}
