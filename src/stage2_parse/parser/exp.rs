use super::{Expected, ParseError, Parser};
use crate::{stage1_lex::tokens::TokenKind, stage2_parse::c_ast::*};

/// Open parentheses and unary operators, counted from the statement's expression.
pub const MAX_NESTING: usize = 256;

/// Height of the expression tree. Later stages walk the tree recursively.
pub const MAX_HEIGHT: usize = 1024;

/// An expression and the height of its tree.
type Measured = (Expression, usize);

impl<'a> Parser<'a> {
    pub fn parse_exp(&mut self) -> Result<Expression, ParseError> {
        self.parse_exp_measured().map(|(exp, _)| exp)
    }

    fn parse_exp_measured(&mut self) -> Result<Measured, ParseError> {
        let (mut lhs, mut height) = self.parse_term_measured()?;

        while let Some(op) = self.peek_kind().and_then(Self::additive_op) {
            let op_token = self.next_token()?;

            let (rhs, rhs_height) = self.parse_term_measured()?;
            height = Self::grow(height.max(rhs_height), op_token.position())?;
            lhs = Expression::new_binary(op, lhs, rhs); // Left associative
        }

        Ok((lhs, height))
    }

    fn parse_term_measured(&mut self) -> Result<Measured, ParseError> {
        let (mut lhs, mut height) = self.parse_factor_measured()?;

        while let Some(op) = self.peek_kind().and_then(Self::multiplicative_op) {
            let op_token = self.next_token()?;

            let (rhs, rhs_height) = self.parse_factor_measured()?;
            height = Self::grow(height.max(rhs_height), op_token.position())?;
            lhs = Expression::new_binary(op, lhs, rhs); // Left associative
        }

        Ok((lhs, height))
    }

    fn parse_factor_measured(&mut self) -> Result<Measured, ParseError> {
        let token = self.next_token()?;
        match token.kind() {
            TokenKind::ParenOpen => {
                self.descend(token.position())?;
                let measured = self.parse_exp_measured()?;
                self.expect_exact(&[TokenKind::ParenClose])?;
                self.nesting -= 1;
                Ok(measured)
            }
            TokenKind::IntLiteral => {
                let val = token.text().parse::<i32>().map_err(|_| {
                    ParseError::InvalidIntegerLiteral {
                        text: String::from(token.text()),
                        position: token.position(),
                    }
                })?;
                Ok((Expression::Const(val), 1))
            }
            kind => match Self::unary_op(kind) {
                Some(op) => {
                    self.descend(token.position())?;
                    let (sub_exp, sub_height) = self.parse_factor_measured()?;
                    self.nesting -= 1;
                    let height = Self::grow(sub_height, token.position())?;
                    Ok((Expression::new_unary(op, sub_exp), height))
                }
                None => Err(ParseError::UnexpectedToken {
                    expected: Expected::Factor,
                    got: kind,
                    position: token.position(),
                }),
            },
        }
    }

    fn descend(&mut self, position: usize) -> Result<(), ParseError> {
        if self.nesting == MAX_NESTING {
            return Err(ParseError::NestingTooDeep { position });
        }
        self.nesting += 1;
        Ok(())
    }
    fn grow(child_height: usize, position: usize) -> Result<usize, ParseError> {
        match child_height + 1 {
            height if height > MAX_HEIGHT => Err(ParseError::NestingTooDeep { position }),
            height => Ok(height),
        }
    }

    fn unary_op(kind: TokenKind) -> Option<UnaryOperator> {
        match kind {
            TokenKind::Minus => Some(UnaryOperator::Negate),
            TokenKind::Bang => Some(UnaryOperator::Not),
            TokenKind::Tilde => Some(UnaryOperator::Complement),
            _ => None,
        }
    }
    fn additive_op(kind: TokenKind) -> Option<BinaryOperator> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Sub),
            _ => None,
        }
    }
    fn multiplicative_op(kind: TokenKind) -> Option<BinaryOperator> {
        match kind {
            TokenKind::Star => Some(BinaryOperator::Mul),
            TokenKind::Slash => Some(BinaryOperator::Div),
            _ => None,
        }
    }
}
