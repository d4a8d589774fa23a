//! The AST's `Display` impls are its canonical rendering.
//! Every compound expression is fully parenthesized, so a rendered expression re-parses into the same tree.

use derive_more::Display;

#[derive(Display, PartialEq, Eq, Debug)]
#[display("int {ident} () {{ {body} }}")]
pub struct Function {
    pub ident: String,
    pub body: Statement,
}

#[derive(Display, PartialEq, Eq, Debug)]
pub enum Statement {
    #[display("return {_0}")]
    Return(Expression),
}

#[derive(Display, PartialEq, Eq, Debug)]
pub enum Expression {
    /// A literal must fit in `i32` on its own, so `-2147483648` is rejected.
    /// The same value is reachable as `0-2147483647-1`.
    #[display("{_0}")]
    Const(i32),
    #[display("{_0}")]
    Unary(Unary),
    #[display("{_0}")]
    Binary(Binary),
}

#[derive(Display, PartialEq, Eq, Debug)]
#[display("({op} {sub_exp})")]
pub struct Unary {
    pub op: UnaryOperator,
    pub sub_exp: Box<Expression>,
}

#[derive(Display, PartialEq, Eq, Debug)]
#[display("({lhs} {op} {rhs})")]
pub struct Binary {
    pub op: BinaryOperator,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
}

#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnaryOperator {
    /* -> int */
    #[display("~")]
    Complement,
    #[display("-")]
    Negate,
    /* -> bool */
    #[display("!")]
    Not,
}

#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinaryOperator {
    #[display("+")]
    Add,
    #[display("-")]
    Sub,
    #[display("*")]
    Mul,
    #[display("/")]
    Div,
}

impl Expression {
    pub fn new_unary(op: UnaryOperator, sub_exp: Expression) -> Self {
        Self::Unary(Unary {
            op,
            sub_exp: Box::new(sub_exp),
        })
    }
    pub fn new_binary(op: BinaryOperator, lhs: Expression, rhs: Expression) -> Self {
        Self::Binary(Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }
}
