//! 程序：定长、只读的 token 序列

use std::fmt;
use std::ops::Index;

use super::token::{Token, TokenKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    tokens: Vec<Token>,
}

impl Program {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl Index<usize> for Program {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl FromIterator<Token> for Program {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// 只保留 token 原文的紧凑形式
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut previous: Option<TokenKind> = None;
        for token in &self.tokens {
            // 相邻数字需要分隔，否则会被重新合并成一个字面量
            if previous == Some(TokenKind::Number) && token.kind == TokenKind::Number {
                f.write_str(" ")?;
            }
            f.write_str(&token.text)?;
            previous = Some(token.kind);
        }
        Ok(())
    }
}
