//! Token 分派：每种 token 的效果

use std::thread;
use std::time::Duration;

use duostack_log::{debug, trace};

use super::engine::Engine;
use super::error::RuntimeError;
use super::operators::ArithFault;
use crate::kit::lexer::{Bracket, SourcePosition, Token, TokenKind};

/// 分派后循环如何继续
pub(super) enum Flow {
    Continue,
    Halt,
}

impl Engine<'_> {
    pub(super) fn dispatch(&mut self, token: &Token) -> Result<Flow, RuntimeError> {
        trace!(
            self.logger,
            "pc={} {} {:?} stack#{}={:?} register={}",
            self.state.pc,
            token.kind,
            token.text,
            self.state.active_index(),
            self.state.active_stack(),
            self.state.register
        );

        let at = token.position;
        match token.kind {
            TokenKind::Number => {
                let value = token.text.parse::<i64>().map_err(|_| {
                    RuntimeError::LiteralOutOfRange {
                        text: token.text.clone(),
                        at,
                    }
                })?;
                self.state.push(value);
            }
            TokenKind::Bracket(bracket) => self.jump(bracket, at)?,
            TokenKind::PushRegister => self.state.push(self.state.register),
            TokenKind::PopRegister => self.state.register = self.state.pop(),
            TokenKind::Duplicate => {
                let value = self.state.pop();
                self.state.push(value);
                self.state.push(value);
            }
            TokenKind::Swap => {
                let top = self.state.pop();
                let below = self.state.pop();
                self.state.push(top);
                self.state.push(below);
            }
            TokenKind::Discard => {
                self.state.pop();
            }
            TokenKind::SwitchStack => self.state.switch_stack(),
            TokenKind::PrintInteger => {
                let value = self.state.pop();
                self.io
                    .emit_number_line(&value.to_string())
                    .map_err(|e| RuntimeError::from_io(e, at))?;
            }
            TokenKind::PrintChar => {
                let value = self.state.pop();
                let c = u32::try_from(value)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or(RuntimeError::InvalidCodePoint { value, at })?;
                self.io
                    .emit_text(c)
                    .map_err(|e| RuntimeError::from_io(e, at))?;
            }
            TokenKind::ReadInteger => {
                let value = self
                    .io
                    .read_line_as_integer()
                    .map_err(|e| RuntimeError::from_io(e, at))?;
                self.state.push(value);
            }
            TokenKind::ReadKey => {
                let code = self.io.read_key();
                self.state.push(code);
            }
            TokenKind::Delimiter => {}
            TokenKind::ConditionalSkip => {
                if self.state.pop() > 0 {
                    self.skip();
                }
            }
            TokenKind::Skip => self.skip(),
            TokenKind::Wait => {
                if self.config.wait_interval_ms > 0 {
                    thread::sleep(Duration::from_millis(self.config.wait_interval_ms));
                }
            }
            TokenKind::Terminate => {
                debug!(self.logger, "Terminated at pc={}", self.state.pc);
                return Ok(Flow::Halt);
            }
            TokenKind::Arithmetic(op) => {
                let right = self.state.pop();
                let left = if op.is_unary() { 0 } else { self.state.pop() };
                let value = op.apply(left, right).map_err(|fault| match fault {
                    ArithFault::DivisionByZero => RuntimeError::DivisionByZero {
                        op: op.symbol(),
                        at,
                    },
                    ArithFault::Overflow => RuntimeError::Overflow {
                        op: op.symbol(),
                        at,
                    },
                })?;
                self.state.push(value);
            }
        }

        Ok(Flow::Continue)
    }

    /// 跳过下一个 token
    fn skip(&mut self) {
        debug!(self.logger, "Skip token at {}", self.state.pc + 1);
        self.state.pc += 1;
    }

    /// 从当前括号出发扫描配对括号，`pc` 停在配对括号上
    ///
    /// 同字符加深，配对字符变浅，其他括号透明。扫描越过任一端是故障。
    fn jump(&mut self, bracket: Bracket, at: SourcePosition) -> Result<(), RuntimeError> {
        let partner = bracket.partner();
        let unmatched = || RuntimeError::UnmatchedBracket {
            bracket: bracket.symbol(),
            at,
        };

        let mut cursor = self.state.pc;
        let mut depth = 0usize;
        loop {
            let token = self.program.get(cursor).ok_or_else(unmatched)?;
            match token.kind {
                TokenKind::Bracket(b) if b == bracket => depth += 1,
                TokenKind::Bracket(b) if b == partner => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            cursor = if bracket.is_opener() {
                cursor.checked_add(1)
            } else {
                cursor.checked_sub(1)
            }
            .ok_or_else(unmatched)?;
        }

        debug!(
            self.logger,
            "Bracket '{}' jumps from {} to {}",
            bracket.symbol(),
            self.state.pc,
            cursor
        );
        self.state.pc = cursor;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::kit::lexer::Lexer;
    use crate::runtime::{BufferedIo, Engine, RuntimeError};

    fn state_after(source: &str) -> (Vec<i64>, i64) {
        let program = Lexer::new().tokenize(source);
        let mut io = BufferedIo::new();
        let mut engine = Engine::new(&program, &mut io);
        engine.run().unwrap();
        (engine.state().active_stack().to_vec(), engine.state().register)
    }

    #[test]
    fn test_stack_algebra() {
        assert_eq!(state_after("5:").0, vec![0, 5, 5]);
        assert_eq!(state_after("1 2\\").0, vec![0, 2, 1]);
        assert_eq!(state_after("1 2$").0, vec![0, 1]);
    }

    #[test]
    fn test_register() {
        assert_eq!(state_after("7v"), (vec![0], 7));
        assert_eq!(state_after("7v^^"), (vec![0, 7, 7], 7));
    }

    #[test]
    fn test_unary_not_pops_once() {
        assert_eq!(state_after("4 5!").0, vec![0, 4, 0]);
    }

    #[test]
    fn test_forward_jump_lands_after_closer() {
        // `(` 直接跳到 `)` 之后，中间的 9 从不执行
        assert_eq!(state_after("1(9)2").0, vec![0, 1, 2]);
    }

    #[test]
    fn test_nested_and_mixed_brackets() {
        assert_eq!(state_after("([)(])3").0, vec![0, 3]);
        assert_eq!(state_after("((9))3").0, vec![0, 3]);
    }

    #[test]
    fn test_backward_jump_resumes_after_opener() {
        // 倒数循环：3 2 1 各打印一次
        let program = Lexer::new().tokenize("3v;[^.^1-v^!?]");
        let mut io = BufferedIo::new();
        Engine::new(&program, &mut io).run().unwrap();
        assert_eq!(io.output(), "3\n2\n1\n");
    }

    #[test]
    fn test_unmatched_both_directions() {
        let program = Lexer::new().tokenize("1(");
        let mut io = BufferedIo::new();
        let err = Engine::new(&program, &mut io).run().unwrap_err();
        assert!(matches!(err, RuntimeError::UnmatchedBracket { bracket: '(', .. }));

        let program = Lexer::new().tokenize("}");
        let err = Engine::new(&program, &mut io).run().unwrap_err();
        assert!(matches!(err, RuntimeError::UnmatchedBracket { bracket: '}', .. }));
    }
}
