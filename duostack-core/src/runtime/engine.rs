//! 执行引擎
//!
//! 取指-分派-前进循环：`pc` 越过最后一个 token 时正常结束，
//! `&` 立即结束。跳转与跳过把 `pc` 设为“目标 - 1”，由循环自身的 `+1`
//! 落到目标位置。

use std::sync::Arc;

use duostack_config::EngineConfig;
use duostack_log::{error, info, Logger};

use super::dispatch::Flow;
use super::error::RuntimeError;
use super::io::IoBoundary;
use super::state::InterpreterState;
use crate::kit::lexer::Program;

/// 运行结束的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// 程序计数器越过了末尾
    Completed,
    /// 执行了 `&`
    Terminated,
}

/// 一次成功运行的摘要
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub exit: ExitReason,
    /// 分派的 token 数
    pub steps: u64,
}

/// 执行引擎，独占一次运行的解释器状态
pub struct Engine<'a> {
    pub(super) program: &'a Program,
    pub(super) io: &'a mut dyn IoBoundary,
    pub(super) state: InterpreterState,
    pub(super) config: EngineConfig,
    pub(super) logger: Arc<Logger>,
    steps: u64,
}

impl<'a> Engine<'a> {
    /// 默认配置，不输出日志
    pub fn new(program: &'a Program, io: &'a mut dyn IoBoundary) -> Self {
        Self::with_config(program, io, EngineConfig::default())
    }

    pub fn with_config(
        program: &'a Program,
        io: &'a mut dyn IoBoundary,
        config: EngineConfig,
    ) -> Self {
        Self::with_logger(program, io, config, Logger::noop())
    }

    pub fn with_logger(
        program: &'a Program,
        io: &'a mut dyn IoBoundary,
        config: EngineConfig,
        logger: Arc<Logger>,
    ) -> Self {
        Self {
            program,
            io,
            state: InterpreterState::new(config.stack_capacity),
            config,
            logger,
            steps: 0,
        }
    }

    /// 运行到结束或故障
    pub fn run(&mut self) -> Result<RunSummary, RuntimeError> {
        info!(
            self.logger,
            "Engine started: {} tokens",
            self.program.len()
        );

        let exit = match self.execute() {
            Ok(exit) => exit,
            Err(err) => {
                error!(
                    self.logger,
                    "Engine fault after {} steps: {}", self.steps, err
                );
                return Err(err);
            }
        };

        info!(
            self.logger,
            "Engine finished ({:?}) after {} steps", exit, self.steps
        );
        Ok(RunSummary {
            exit,
            steps: self.steps,
        })
    }

    fn execute(&mut self) -> Result<ExitReason, RuntimeError> {
        let program = self.program;
        while let Some(token) = program.get(self.state.pc) {
            self.steps += 1;
            if let Flow::Halt = self.dispatch(token)? {
                return Ok(ExitReason::Terminated);
            }
            self.state.pc += 1;
        }
        Ok(ExitReason::Completed)
    }

    pub fn state(&self) -> &InterpreterState {
        &self.state
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl std::fmt::Debug for Engine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("tokens", &self.program.len())
            .field("state", &self.state)
            .field("config", &self.config)
            .field("steps", &self.steps)
            .finish()
    }
}
