//! 解释器状态：程序计数器、寄存器与两个栈

/// 单次运行期间由引擎独占的状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterState {
    /// 下一个要分派的 token 下标
    pub pc: usize,
    pub register: i64,
    active: usize,
    stacks: [Vec<i64>; 2],
}

impl InterpreterState {
    /// 两个栈都以 `[0]` 开始
    pub fn new(stack_capacity: usize) -> Self {
        let mut stacks = [
            Vec::with_capacity(stack_capacity),
            Vec::with_capacity(stack_capacity),
        ];
        for stack in &mut stacks {
            stack.push(0);
        }
        Self {
            pc: 0,
            register: 0,
            active: 0,
            stacks,
        }
    }

    pub fn push(&mut self, value: i64) {
        self.stacks[self.active].push(value);
    }

    /// 空栈弹出得到 0，栈保持为空
    pub fn pop(&mut self) -> i64 {
        self.stacks[self.active].pop().unwrap_or(0)
    }

    pub fn switch_stack(&mut self) {
        self.active = 1 - self.active;
    }

    /// 当前选中的栈编号（0 或 1）
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// 当前栈，栈顶在末尾
    pub fn active_stack(&self) -> &[i64] {
        &self.stacks[self.active]
    }

    pub fn stack(&self, index: usize) -> Option<&[i64]> {
        self.stacks.get(index).map(Vec::as_slice)
    }
}

impl Default for InterpreterState {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = InterpreterState::new(8);
        assert_eq!(state.pc, 0);
        assert_eq!(state.register, 0);
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.stack(0), Some(&[0][..]));
        assert_eq!(state.stack(1), Some(&[0][..]));
        assert_eq!(state.stack(2), None);
    }

    #[test]
    fn test_underflow_yields_zero() {
        let mut state = InterpreterState::default();
        assert_eq!(state.pop(), 0);
        assert_eq!(state.pop(), 0);
        assert!(state.active_stack().is_empty());
    }

    #[test]
    fn test_switch_isolates_stacks() {
        let mut state = InterpreterState::default();
        state.push(5);
        state.switch_stack();
        assert_eq!(state.active_index(), 1);
        assert_eq!(state.pop(), 0);
        state.switch_stack();
        assert_eq!(state.pop(), 5);
    }
}
