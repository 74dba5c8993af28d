//! 词法分析测试

use duostack_core::{ArithOp, Bracket, Lexer, Matcher, MatcherChain, TokenKind};
use duostack_log::Logger;

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new().tokenize(source).iter().map(|t| t.kind).collect()
}

#[test]
fn test_digit_run_is_one_number() {
    let program = Lexer::new().tokenize("007 12345");
    assert_eq!(program.len(), 2);
    assert_eq!(program[0].text, "007");
    assert_eq!(program[1].text, "12345");
    assert!(program.iter().all(|t| t.kind == TokenKind::Number));
}

#[test]
fn test_full_grammar() {
    assert_eq!(
        kinds("()[]{}^v:\\$~.,#k_?;w&"),
        vec![
            TokenKind::Bracket(Bracket::OpenParen),
            TokenKind::Bracket(Bracket::CloseParen),
            TokenKind::Bracket(Bracket::OpenSquare),
            TokenKind::Bracket(Bracket::CloseSquare),
            TokenKind::Bracket(Bracket::OpenCurly),
            TokenKind::Bracket(Bracket::CloseCurly),
            TokenKind::PushRegister,
            TokenKind::PopRegister,
            TokenKind::Duplicate,
            TokenKind::Swap,
            TokenKind::Discard,
            TokenKind::SwitchStack,
            TokenKind::PrintInteger,
            TokenKind::PrintChar,
            TokenKind::ReadInteger,
            TokenKind::ReadKey,
            TokenKind::Delimiter,
            TokenKind::ConditionalSkip,
            TokenKind::Skip,
            TokenKind::Wait,
            TokenKind::Terminate,
        ]
    );
}

#[test]
fn test_arithmetic_symbols() {
    let ops: Vec<_> = kinds("+-*/%!|<>=")
        .into_iter()
        .map(|k| match k {
            TokenKind::Arithmetic(op) => op.symbol(),
            other => panic!("unexpected {other}"),
        })
        .collect();
    assert_eq!(ops.into_iter().collect::<String>(), "+-*/%!|<>=");
    assert_eq!(kinds("!"), vec![TokenKind::Arithmetic(ArithOp::Not)]);
}

#[test]
fn test_unrecognized_chars_dropped() {
    assert!(kinds(" \t\nabcdefghijlmnopqrstuxyz@'\"`").is_empty());
    assert_eq!(kinds("V K W"), vec![]);
}

#[test]
fn test_program_indices_are_dense() {
    let program = Lexer::new().tokenize("a1 b+ c.");
    let indices: Vec<_> = program.iter().map(|t| t.source_index).collect();
    assert_eq!(indices, vec![1, 4, 7]);
}

#[test]
fn test_custom_chain_without_numbers() {
    let chain = MatcherChain::new([Matcher::single(
        "print",
        &[('.', TokenKind::PrintInteger)],
    )]);
    let lexer = Lexer::with_chain(&chain, Logger::noop());

    let program = lexer.tokenize("12.3.");
    assert_eq!(program.len(), 2);
    assert!(program.iter().all(|t| t.kind == TokenKind::PrintInteger));
}

#[test]
fn test_lexer_is_reusable() {
    let lexer = Lexer::new();
    assert_eq!(lexer.tokenize("1").len(), 1);
    assert_eq!(lexer.tokenize("1 2").len(), 2);
    assert_eq!(lexer.tokens("3 4 5").count(), 3);
}
