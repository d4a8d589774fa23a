#![doc = include_str!("./parser/ebnf.md")]

mod exp;

pub use exp::{MAX_HEIGHT, MAX_NESTING};

use crate::{
    stage1_lex::{
        token_stream::TokenStream,
        tokens::{Token, TokenKind},
    },
    stage2_parse::c_ast::*,
};
use derive_more::{Display, Error};

#[derive(Display, Error, PartialEq, Eq, Debug)]
pub enum ParseError {
    #[display("Ran out of tokens mid-production")]
    NotEnoughTokens,

    #[display("Expected {expected} but found {got} at byte {position}")]
    UnexpectedToken {
        expected: Expected,
        got: TokenKind,
        position: usize,
    },

    #[display("Integer literal {text} at byte {position} does not fit in an int")]
    InvalidIntegerLiteral { text: String, position: usize },

    #[display("Expression nested too deeply at byte {position}")]
    NestingTooDeep { position: usize },
}

/// What the parser required at the point of an [`ParseError::UnexpectedToken`].
#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Expected {
    #[display("`{_0}`")]
    Token(TokenKind),
    #[display("<factor>")]
    Factor,
    #[display("end of input")]
    EndOfInput,
}

pub struct Parser<'a> {
    tokens: TokenStream<'a>,
    nesting: usize,
}
impl<'a> Parser<'a> {
    pub fn new(tokens: TokenStream<'a>) -> Self {
        Self { tokens, nesting: 0 }
    }

    /// The whole token stream must be one function.
    pub fn parse_program(&mut self) -> Result<Function, ParseError> {
        let fun = self.parse_fun()?;
        self.expect_end()?;
        Ok(fun)
    }

    pub fn parse_fun(&mut self) -> Result<Function, ParseError> {
        self.expect_exact(&[TokenKind::KwInt])?;

        let ident = self.expect_exact(&[TokenKind::Identifier])?;
        let ident = String::from(ident.text());

        self.expect_exact(&[
            TokenKind::ParenOpen,
            TokenKind::ParenClose,
            TokenKind::BraceOpen,
        ])?;

        let body = self.parse_stmt()?;

        self.expect_exact(&[TokenKind::BraceClose])?;

        log::debug!("Parsed <function> {ident}");
        Ok(Function { ident, body })
    }

    pub fn parse_stmt(&mut self) -> Result<Statement, ParseError> {
        self.expect_exact(&[TokenKind::KwReturn])?;

        let exp = self.parse_exp()?;

        self.expect_exact(&[TokenKind::Semicolon])?;

        Ok(Statement::Return(exp))
    }

    /// One expression spanning the whole token stream.
    pub fn parse_full_exp(&mut self) -> Result<Expression, ParseError> {
        let exp = self.parse_exp()?;
        self.expect_end()?;
        Ok(exp)
    }
}

/// Helpers
impl<'a> Parser<'a> {
    fn next_token(&mut self) -> Result<Token<'a>, ParseError> {
        self.tokens.pop().ok_or(ParseError::NotEnoughTokens)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.peek().map(|token| token.kind())
    }

    /// Consumes one token per expected kind. Returns the last token consumed.
    fn expect_exact(&mut self, expected_kinds: &[TokenKind]) -> Result<Token<'a>, ParseError> {
        let mut last = None;
        for expected in expected_kinds {
            let actual = self.next_token()?;
            if actual.kind() != *expected {
                return Err(ParseError::UnexpectedToken {
                    expected: Expected::Token(*expected),
                    got: actual.kind(),
                    position: actual.position(),
                });
            }
            last = Some(actual);
        }
        last.ok_or(ParseError::NotEnoughTokens)
    }

    fn expect_end(&mut self) -> Result<(), ParseError> {
        match self.tokens.pop() {
            None => Ok(()),
            Some(actual) => Err(ParseError::UnexpectedToken {
                expected: Expected::EndOfInput,
                got: actual.kind(),
                position: actual.position(),
            }),
        }
    }
}
