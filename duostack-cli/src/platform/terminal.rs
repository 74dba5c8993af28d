//! 标准流上的 I/O 边界

use std::io::{self, BufRead, Read, Write};

use duostack_core::{parse_integer_line, IoBoundary, IoError};

/// `#` 读取前打印的提示
const PROMPT: &str = "?: ";

/// 标准输入输出
pub struct StdIo {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdIo {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }

    /// 直接写出文本（回显源码、结尾换行）
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.stdout.lock().write_all(text.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        let mut stdin = self.stdin.lock();
        let mut buf = [0u8; 4];
        if stdin.read(&mut buf[..1])? == 0 {
            return Ok(None);
        }
        let width = utf8_width(buf[0]);
        if width == 0 {
            return Ok(None);
        }
        stdin.read_exact(&mut buf[1..width])?;
        Ok(std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next()))
    }
}

impl Default for StdIo {
    fn default() -> Self {
        Self::new()
    }
}

impl IoBoundary for StdIo {
    fn emit_text(&mut self, c: char) -> Result<(), IoError> {
        let mut buf = [0u8; 4];
        self.write_str(c.encode_utf8(&mut buf))?;
        Ok(())
    }

    fn emit_number_line(&mut self, text: &str) -> Result<(), IoError> {
        writeln!(self.stdout.lock(), "{}", text)?;
        Ok(())
    }

    fn read_line_as_integer(&mut self) -> Result<i64, IoError> {
        self.write_str(PROMPT)?;
        self.flush()?;

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Err(IoError::Eof);
        }
        parse_integer_line(&line)
    }

    fn read_key(&mut self) -> i64 {
        if self.flush().is_err() {
            return 0;
        }
        match self.read_char() {
            Ok(Some(c)) => i64::from(u32::from(c)),
            _ => 0,
        }
    }
}

/// UTF-8 首字节决定的字符字节数；非法首字节为 0
fn utf8_width(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_width() {
        assert_eq!(utf8_width(b'a'), 1);
        assert_eq!("é".as_bytes().len(), utf8_width("é".as_bytes()[0]));
        assert_eq!(utf8_width("€".as_bytes()[0]), 3);
        assert_eq!(utf8_width("😀".as_bytes()[0]), 4);
        assert_eq!(utf8_width(0x80), 0);
        assert_eq!(utf8_width(0xFF), 0);
    }
}
