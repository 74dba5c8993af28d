//! 词法分析器
//!
//! 在当前游标处依次尝试匹配链；兜底 matcher 保证每一步至少前进一个字符。

use std::sync::Arc;

use duostack_log::{debug, trace, Logger};

use super::chain::MatcherChain;
use super::position::SourcePosition;
use super::program::Program;
use super::token::Token;

/// 词法分析器
///
/// 自身不持有源码，可以反复用于多段输入。
pub struct Lexer<'c> {
    chain: &'c MatcherChain,
    logger: Arc<Logger>,
}

impl Lexer<'static> {
    /// 使用标准匹配链
    pub fn new() -> Self {
        Self::with_chain(MatcherChain::standard(), Logger::noop())
    }

    /// 使用标准匹配链和指定 logger
    pub fn with_logger(logger: Arc<Logger>) -> Self {
        Self::with_chain(MatcherChain::standard(), logger)
    }
}

impl Default for Lexer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> Lexer<'c> {
    /// 使用自定义匹配链
    pub fn with_chain(chain: &'c MatcherChain, logger: Arc<Logger>) -> Self {
        debug!(logger, "Lexer created with {} matchers", chain.matchers().len());
        Self { chain, logger }
    }

    /// 惰性 token 流
    pub fn tokens<'s>(&self, source: &'s str) -> Tokens<'c, 's> {
        Tokens {
            chain: self.chain,
            rest: source,
            position: SourcePosition::start(),
        }
    }

    /// 把整段源码切分为程序
    pub fn tokenize(&self, source: &str) -> Program {
        let program: Program = self
            .tokens(source)
            .inspect(|token| trace!(self.logger, "Produced {}", token))
            .collect();
        debug!(
            self.logger,
            "Tokenized {} chars into {} tokens",
            source.chars().count(),
            program.len()
        );
        program
    }
}

/// 由 [`Lexer::tokens`] 返回的迭代器
pub struct Tokens<'c, 's> {
    chain: &'c MatcherChain,
    rest: &'s str,
    position: SourcePosition,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let matched = self.chain.match_at(self.rest)?;
            let (text, rest) = self.rest.split_at(matched.len);
            let start = self.position;

            self.position.advance_str(text);
            self.rest = rest;

            if let Some(kind) = matched.kind {
                return Some(Token::new(kind, text, start));
            }
        }
    }
}
