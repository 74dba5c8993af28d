//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数：预处理 + 词法分析 + 执行

#![allow(dead_code)]

use duostack_core::{
    preprocess, BufferedIo, Engine, ExitReason, Lexer, RunSummary, RuntimeError,
};

/// 一次运行的结果
#[derive(Debug)]
pub struct ExecResult {
    pub output: String,
    pub summary: RunSummary,
    /// 结束时当前栈的内容（栈顶在末尾）
    pub stack: Vec<i64>,
    pub register: i64,
}

/// 执行失败时同时保留已经产生的输出
#[derive(Debug)]
pub struct ExecError {
    pub output: String,
    pub error: RuntimeError,
}

/// 执行代码，没有任何输入
pub fn run_code(code: &str) -> Result<ExecResult, ExecError> {
    run_with_io(code, BufferedIo::new())
}

/// 执行代码，`#` 依次读取 `lines`
pub fn run_with_lines(code: &str, lines: &[&str]) -> Result<ExecResult, ExecError> {
    run_with_io(code, BufferedIo::new().with_lines(lines.iter().copied()))
}

pub fn run_with_io(code: &str, mut io: BufferedIo) -> Result<ExecResult, ExecError> {
    let program = Lexer::new().tokenize(&preprocess(code));
    let mut engine = Engine::new(&program, &mut io);

    match engine.run() {
        Ok(summary) => {
            let stack = engine.state().active_stack().to_vec();
            let register = engine.state().register;
            drop(engine);
            Ok(ExecResult {
                output: io.into_output(),
                summary,
                stack,
                register,
            })
        }
        Err(error) => {
            drop(engine);
            Err(ExecError {
                output: io.into_output(),
                error,
            })
        }
    }
}

/// 执行并断言正常结束，返回输出
pub fn output_of(code: &str) -> String {
    let result = run_code(code).expect("program should run");
    assert_eq!(result.summary.exit, ExitReason::Completed);
    result.output
}
