//! Token 与 token 种类

use std::fmt;

use super::position::SourcePosition;

/// 括号种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    OpenParen,
    CloseParen,
    OpenSquare,
    CloseSquare,
    OpenCurly,
    CloseCurly,
}

impl Bracket {
    pub fn symbol(self) -> char {
        match self {
            Bracket::OpenParen => '(',
            Bracket::CloseParen => ')',
            Bracket::OpenSquare => '[',
            Bracket::CloseSquare => ']',
            Bracket::OpenCurly => '{',
            Bracket::CloseCurly => '}',
        }
    }

    /// 配对的括号
    pub fn partner(self) -> Bracket {
        match self {
            Bracket::OpenParen => Bracket::CloseParen,
            Bracket::CloseParen => Bracket::OpenParen,
            Bracket::OpenSquare => Bracket::CloseSquare,
            Bracket::CloseSquare => Bracket::OpenSquare,
            Bracket::OpenCurly => Bracket::CloseCurly,
            Bracket::CloseCurly => Bracket::OpenCurly,
        }
    }

    pub fn is_opener(self) -> bool {
        matches!(
            self,
            Bracket::OpenParen | Bracket::OpenSquare | Bracket::OpenCurly
        )
    }

    /// 扫描方向：开括号向前 (+1)，闭括号向后 (-1)
    pub fn direction(self) -> isize {
        if self.is_opener() {
            1
        } else {
            -1
        }
    }
}

/// 算术/逻辑运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    /// `!`，唯一的一元运算
    Not,
    Or,
    Less,
    Greater,
    Equal,
}

impl ArithOp {
    pub fn symbol(self) -> char {
        match self {
            ArithOp::Add => '+',
            ArithOp::Sub => '-',
            ArithOp::Mul => '*',
            ArithOp::Div => '/',
            ArithOp::Rem => '%',
            ArithOp::Not => '!',
            ArithOp::Or => '|',
            ArithOp::Less => '<',
            ArithOp::Greater => '>',
            ArithOp::Equal => '=',
        }
    }

    pub fn is_unary(self) -> bool {
        matches!(self, ArithOp::Not)
    }
}

/// Token 种类（封闭集合）
///
/// 引擎对它做唯一一次穷尽匹配来选择效果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// 十进制数字串
    Number,
    Bracket(Bracket),
    /// `^`
    PushRegister,
    /// `v`
    PopRegister,
    /// `:`
    Duplicate,
    /// `\`
    Swap,
    /// `$`
    Discard,
    /// `~`
    SwitchStack,
    /// `.`
    PrintInteger,
    /// `,`
    PrintChar,
    /// `#`
    ReadInteger,
    /// `k`
    ReadKey,
    /// `_`
    Delimiter,
    /// `?`
    ConditionalSkip,
    /// `;`
    Skip,
    /// `w`
    Wait,
    /// `&`
    Terminate,
    Arithmetic(ArithOp),
}

impl TokenKind {
    /// 种类名称（日志与调试输出用）
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Bracket(_) => "bracket",
            TokenKind::PushRegister => "push-register",
            TokenKind::PopRegister => "pop-register",
            TokenKind::Duplicate => "duplicate",
            TokenKind::Swap => "swap",
            TokenKind::Discard => "discard",
            TokenKind::SwitchStack => "switch-stack",
            TokenKind::PrintInteger => "print-integer",
            TokenKind::PrintChar => "print-char",
            TokenKind::ReadInteger => "read-integer",
            TokenKind::ReadKey => "read-key",
            TokenKind::Delimiter => "delimiter",
            TokenKind::ConditionalSkip => "conditional-skip",
            TokenKind::Skip => "skip",
            TokenKind::Wait => "wait",
            TokenKind::Terminate => "terminate",
            TokenKind::Arithmetic(_) => "arithmetic",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 词法单元，创建后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// 匹配到的原文
    pub text: String,
    /// 首字符在（预处理后）源码中的字符下标
    pub source_index: usize,
    pub position: SourcePosition,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            kind,
            text: text.into(),
            source_index: position.offset,
            position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) at {}", self.kind, self.text, self.position)
    }
}
