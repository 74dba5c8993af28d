//! API 类型定义
//!
//! 编译和执行的输出类型。

use duostack_core::{ExitReason, Program};

/// 编译输出
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// 预处理后的源码
    pub expanded: String,
    /// token 序列
    pub program: Program,
}

/// 执行输出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteOutput {
    pub exit: ExitReason,
    /// 分派的 token 数
    pub steps: u64,
    /// 标准输出捕获（仅 `run_captured` 填充）
    pub stdout: String,
}
