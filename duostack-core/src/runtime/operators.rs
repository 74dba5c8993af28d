//! 算术与逻辑运算
//!
//! 所有运算在 i64 上进行。`/` 向零截断，`%` 取结果符号与除数一致的模，
//! 比较运算产生 1/0。

use crate::kit::lexer::ArithOp;

/// 运算失败的原因，由调用方补充位置信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithFault {
    DivisionByZero,
    Overflow,
}

impl ArithOp {
    /// 二元运算：`left` 是后弹出的值，`right` 是栈顶
    ///
    /// 一元的 `!` 只看 `right`。
    pub fn apply(self, left: i64, right: i64) -> Result<i64, ArithFault> {
        match self {
            ArithOp::Add => left.checked_add(right).ok_or(ArithFault::Overflow),
            ArithOp::Sub => left.checked_sub(right).ok_or(ArithFault::Overflow),
            ArithOp::Mul => left.checked_mul(right).ok_or(ArithFault::Overflow),
            ArithOp::Div => {
                if right == 0 {
                    return Err(ArithFault::DivisionByZero);
                }
                left.checked_div(right).ok_or(ArithFault::Overflow)
            }
            ArithOp::Rem => {
                if right == 0 {
                    return Err(ArithFault::DivisionByZero);
                }
                Ok(floored_rem(left, right))
            }
            ArithOp::Not => Ok(i64::from(right <= 0)),
            ArithOp::Or => Ok(if left != 0 { left } else { right }),
            ArithOp::Less => Ok(i64::from(left < right)),
            ArithOp::Greater => Ok(i64::from(left > right)),
            ArithOp::Equal => Ok(i64::from(left == right)),
        }
    }
}

/// 结果符号跟随除数；`right` 非零
fn floored_rem(left: i64, right: i64) -> i64 {
    // i64::MIN % -1 在数学上为 0，wrapping_rem 恰好给出 0
    let rem = left.wrapping_rem(right);
    if rem != 0 && (rem < 0) != (right < 0) {
        rem + right
    } else {
        rem
    }
}
