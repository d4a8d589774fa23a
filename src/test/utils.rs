use crate::{
    stage1_lex::{
        lexer,
        token_stream::TokenStream,
        tokens::{Token, TokenKind},
    },
    stage2_parse::{
        c_ast::{BinaryOperator, Expression, Function, UnaryOperator},
        parser::Parser,
    },
};
use anyhow::Result;

macro_rules! fail {
    ( $($arg:tt),* ) => {
        panic!($($arg)*)
    };
}
pub(crate) use fail;

pub fn scan_kinds(src: &str) -> Result<Vec<(TokenKind, &str)>> {
    let tokens = lexer::scan(src)?;
    Ok(tokens.iter().map(|t| (t.kind(), t.text())).collect())
}

pub fn token_stream(src: &str) -> Result<TokenStream<'_>> {
    let tokens: Vec<Token<'_>> = lexer::scan(src)?;
    Ok(TokenStream::from(tokens))
}

pub fn parse_fun(src: &str) -> Result<Function> {
    let fun = Parser::new(token_stream(src)?).parse_program()?;
    Ok(fun)
}

pub fn parse_exp(src: &str) -> Result<Expression> {
    let exp = Parser::new(token_stream(src)?).parse_full_exp()?;
    Ok(exp)
}

/* Expected-tree builders */

pub fn konst(val: i32) -> Expression {
    Expression::Const(val)
}
pub fn neg(sub_exp: Expression) -> Expression {
    Expression::new_unary(UnaryOperator::Negate, sub_exp)
}
pub fn compl(sub_exp: Expression) -> Expression {
    Expression::new_unary(UnaryOperator::Complement, sub_exp)
}
pub fn not(sub_exp: Expression) -> Expression {
    Expression::new_unary(UnaryOperator::Not, sub_exp)
}
pub fn bin(op: BinaryOperator, lhs: Expression, rhs: Expression) -> Expression {
    Expression::new_binary(op, lhs, rhs)
}
