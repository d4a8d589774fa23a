use derive_more::Display;
use getset::CopyGetters;

/// A classified lexeme, borrowing its text from the source buffer.
#[derive(CopyGetters, Clone, Copy, PartialEq, Eq, Debug)]
#[getset(get_copy = "pub")]
pub struct Token<'a> {
    kind: TokenKind,
    text: &'a str,
    /// Byte offset into the source.
    position: usize,
}
impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, position: usize) -> Self {
        Self {
            kind,
            text,
            position,
        }
    }
}

#[derive(Display, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TokenKind {
    /* trivia; never emitted */
    #[display("<line-comment>")]
    LineComment,
    #[display("<block-comment>")]
    BlockComment,
    #[display("<whitespace>")]
    Whitespace,

    /* demarcators */
    #[display("{{")]
    BraceOpen,
    #[display("}}")]
    BraceClose,
    #[display("(")]
    ParenOpen,
    #[display(")")]
    ParenClose,
    #[display(";")]
    Semicolon,
    #[display(".")]
    Dot,

    /* comparison */
    #[display("==")]
    Eq,
    #[display("<")]
    Lt,
    #[display("<=")]
    Lte,
    #[display(">")]
    Gt,
    #[display(">=")]
    Gte,

    /* keywords */
    #[display("if")]
    KwIf,
    #[display("else")]
    KwElse,
    #[display("int")]
    KwInt,
    #[display("float")]
    KwFloat,
    #[display("return")]
    KwReturn,

    /* literals */
    #[display("<int-literal>")]
    IntLiteral,
    #[display("<float-literal>")]
    FloatLiteral,
    #[display("<string-literal>")]
    StringLiteral,

    #[display("<identifier>")]
    Identifier,

    /* operators */
    #[display("=")]
    Assign,
    #[display("*")]
    Star,
    #[display("+")]
    Plus,
    #[display("-")]
    Minus,
    #[display("!")]
    Bang,
    #[display("~")]
    Tilde,
    #[display("/")]
    Slash,
}
impl TokenKind {
    /// Trivia are recognized so that the cursor can advance over them, but they never reach the parser.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Self::LineComment | Self::BlockComment | Self::Whitespace
        )
    }
}
