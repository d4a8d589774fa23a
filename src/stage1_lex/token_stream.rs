use crate::stage1_lex::tokens::Token;

/// A forward-only cursor over a completed token sequence.
///
/// Popping advances the cursor; the underlying sequence is never modified. Once exhausted, `pop()` and `peek()` yield `None`.
#[derive(Debug)]
pub struct TokenStream<'a> {
    tokens: Vec<Token<'a>>,
    cursor: usize,
}
impl<'a> From<Vec<Token<'a>>> for TokenStream<'a> {
    fn from(tokens: Vec<Token<'a>>) -> Self {
        Self { tokens, cursor: 0 }
    }
}
impl<'a> TokenStream<'a> {
    pub fn pop(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.cursor).copied();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    pub fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.cursor).copied()
    }

    /// Count of tokens not yet popped.
    pub fn size(&self) -> usize {
        self.tokens.len() - self.cursor
    }
}
