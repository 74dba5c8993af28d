//! Matcher 与匹配链
//!
//! 每个 matcher 是一个只读描述符：接受的字符表 + 是否贪婪。
//! 匹配链按注册顺序尝试，兜底 matcher（空字符表）固定在最后。

use once_cell::sync::Lazy;

use super::token::{ArithOp, Bracket, TokenKind};

/// 单个 matcher 的描述符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    name: &'static str,
    /// 接受的字符以及它们产生的 token 种类；空表示兜底
    accepts: &'static [(char, TokenKind)],
    greedy: bool,
}

/// 一次匹配的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// 兜底 matcher 不产生 token
    pub kind: Option<TokenKind>,
    /// 消耗的字节数（至少一个字符）
    pub len: usize,
}

impl Matcher {
    /// 贪婪 matcher：吃掉最长的可接受字符串
    pub const fn greedy(name: &'static str, accepts: &'static [(char, TokenKind)]) -> Self {
        Self {
            name,
            accepts,
            greedy: true,
        }
    }

    /// 非贪婪 matcher：恰好吃掉一个可接受字符
    pub const fn single(name: &'static str, accepts: &'static [(char, TokenKind)]) -> Self {
        Self {
            name,
            accepts,
            greedy: false,
        }
    }

    /// 兜底 matcher：吃掉任意一个字符，不产生 token
    pub const fn catch_all() -> Self {
        Self {
            name: "nop",
            accepts: &[],
            greedy: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_greedy(&self) -> bool {
        self.greedy
    }

    pub fn is_catch_all(&self) -> bool {
        self.accepts.is_empty()
    }

    /// 字符 `c` 对应的 token 种类
    pub fn kind_of(&self, c: char) -> Option<TokenKind> {
        self.accepts
            .iter()
            .find(|(accepted, _)| *accepted == c)
            .map(|(_, kind)| *kind)
    }

    /// 在 `rest` 开头尝试匹配
    pub fn try_match(&self, rest: &str) -> Option<MatchResult> {
        let first = rest.chars().next()?;
        if self.is_catch_all() {
            return Some(MatchResult {
                kind: None,
                len: first.len_utf8(),
            });
        }

        let kind = self.kind_of(first)?;
        let len = if self.greedy {
            rest.chars()
                .take_while(|c| self.kind_of(*c).is_some())
                .map(char::len_utf8)
                .sum()
        } else {
            first.len_utf8()
        };

        Some(MatchResult {
            kind: Some(kind),
            len,
        })
    }
}

/// 有序、不可变的匹配链
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherChain {
    matchers: Vec<Matcher>,
}

impl MatcherChain {
    /// 按给定顺序建链，并把兜底 matcher 固定在末尾
    pub fn new(matchers: impl IntoIterator<Item = Matcher>) -> Self {
        let mut matchers: Vec<Matcher> = matchers
            .into_iter()
            .filter(|m| !m.is_catch_all())
            .collect();
        matchers.push(Matcher::catch_all());
        Self { matchers }
    }

    /// 标准匹配链（惰性构建一次）
    pub fn standard() -> &'static MatcherChain {
        &STANDARD_CHAIN
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// 第一个命中的 matcher 胜出；仅当 `rest` 为空时返回 None
    pub fn match_at(&self, rest: &str) -> Option<MatchResult> {
        self.matchers.iter().find_map(|m| m.try_match(rest))
    }
}

static STANDARD_CHAIN: Lazy<MatcherChain> = Lazy::new(|| {
    MatcherChain::new([
        Matcher::greedy("number", DIGITS),
        Matcher::single("bracket", BRACKETS),
        Matcher::single("push", &[('^', TokenKind::PushRegister)]),
        Matcher::single("pop", &[('v', TokenKind::PopRegister)]),
        Matcher::single("duplicate", &[(':', TokenKind::Duplicate)]),
        Matcher::single("swap", &[('\\', TokenKind::Swap)]),
        Matcher::single("discard", &[('$', TokenKind::Discard)]),
        Matcher::single("switch", &[('~', TokenKind::SwitchStack)]),
        Matcher::single("print-int", &[('.', TokenKind::PrintInteger)]),
        Matcher::single("print-char", &[(',', TokenKind::PrintChar)]),
        Matcher::single("get-int", &[('#', TokenKind::ReadInteger)]),
        Matcher::single("get-key", &[('k', TokenKind::ReadKey)]),
        Matcher::single("delimit", &[('_', TokenKind::Delimiter)]),
        Matcher::single("cond-skip", &[('?', TokenKind::ConditionalSkip)]),
        Matcher::single("skip", &[(';', TokenKind::Skip)]),
        Matcher::single("wait", &[('w', TokenKind::Wait)]),
        Matcher::single("terminate", &[('&', TokenKind::Terminate)]),
        Matcher::single("arithmetic", ARITHMETIC),
    ])
});

const DIGITS: &[(char, TokenKind)] = &[
    ('0', TokenKind::Number),
    ('1', TokenKind::Number),
    ('2', TokenKind::Number),
    ('3', TokenKind::Number),
    ('4', TokenKind::Number),
    ('5', TokenKind::Number),
    ('6', TokenKind::Number),
    ('7', TokenKind::Number),
    ('8', TokenKind::Number),
    ('9', TokenKind::Number),
];

const BRACKETS: &[(char, TokenKind)] = &[
    ('(', TokenKind::Bracket(Bracket::OpenParen)),
    (')', TokenKind::Bracket(Bracket::CloseParen)),
    ('[', TokenKind::Bracket(Bracket::OpenSquare)),
    (']', TokenKind::Bracket(Bracket::CloseSquare)),
    ('{', TokenKind::Bracket(Bracket::OpenCurly)),
    ('}', TokenKind::Bracket(Bracket::CloseCurly)),
];

const ARITHMETIC: &[(char, TokenKind)] = &[
    ('+', TokenKind::Arithmetic(ArithOp::Add)),
    ('-', TokenKind::Arithmetic(ArithOp::Sub)),
    ('*', TokenKind::Arithmetic(ArithOp::Mul)),
    ('/', TokenKind::Arithmetic(ArithOp::Div)),
    ('%', TokenKind::Arithmetic(ArithOp::Rem)),
    ('!', TokenKind::Arithmetic(ArithOp::Not)),
    ('|', TokenKind::Arithmetic(ArithOp::Or)),
    ('<', TokenKind::Arithmetic(ArithOp::Less)),
    ('>', TokenKind::Arithmetic(ArithOp::Greater)),
    ('=', TokenKind::Arithmetic(ArithOp::Equal)),
];
