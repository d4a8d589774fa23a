use crate::stage1_lex::tokens::{Token, TokenKind};
use derive_more::{Display, Error};
use lazy_static::lazy_static;
use regex::Regex;

#[derive(Display, Error, PartialEq, Eq, Debug)]
pub enum LexError {
    #[display("No token matches at byte {position}: {text:?}")]
    NoMatch { position: usize, text: String },

    #[display("Token pattern {kind:?} matched an empty lexeme at byte {position}: {text:?}")]
    EmptyLexeme {
        kind: TokenKind,
        position: usize,
        text: String,
    },
}
impl LexError {
    pub fn position(&self) -> usize {
        match self {
            Self::NoMatch { position, .. } | Self::EmptyLexeme { position, .. } => *position,
        }
    }
    pub fn text(&self) -> &str {
        match self {
            Self::NoMatch { text, .. } | Self::EmptyLexeme { text, .. } => text,
        }
    }
}

/// Tokenizes the whole source, discarding trivia.
pub fn scan(src: &str) -> Result<Vec<Token<'_>>, LexError> {
    let tokens = Lexer::new(src).collect::<Result<Vec<_>, _>>()?;
    log::debug!("Scanned {} tokens from {} bytes", tokens.len(), src.len());
    Ok(tokens)
}

pub struct Lexer<'a> {
    src: &'a str,

    /// Byte offset of the unread suffix. Set to the end of `src` once an error has been yielded.
    position: usize,
}
impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, position: 0 }
    }

    fn get_next(&mut self) -> Result<Option<Token<'a>>, LexError> {
        let src: &'a str = self.src;
        loop {
            let sfx = &src[self.position..];
            if sfx.len() == 0 {
                return Ok(None);
            }

            let mach = Self::longest_match(&TOKEN_PATTERNS, sfx, self.position);
            let (kind, match_len) = match mach {
                Ok(mach) => mach,
                Err(e) => {
                    self.position = src.len();
                    return Err(e);
                }
            };

            let token = Token::new(kind, &sfx[..match_len], self.position);
            self.position += match_len;

            if kind.is_trivia() == false {
                log::trace!("{token:?}");
                return Ok(Some(token));
            }
        }
    }

    /// Maximal munch. Among equal-length matches, the pattern earlier in [`TOKEN_PATTERNS`] wins.
    pub(crate) fn longest_match(
        patterns: &[(TokenKind, Regex)],
        sfx: &str,
        position: usize,
    ) -> Result<(TokenKind, usize), LexError> {
        let mut best: Option<(TokenKind, usize)> = None;

        for (kind, matcher) in patterns {
            let Some(mach) = matcher.find(sfx) else {
                continue;
            };
            if mach.len() == 0 {
                return Err(LexError::EmptyLexeme {
                    kind: *kind,
                    position,
                    text: offending_text(sfx),
                });
            }
            match best {
                Some((_, best_len)) if best_len >= mach.len() => {}
                _ => best = Some((*kind, mach.len())),
            }
        }

        best.ok_or_else(|| LexError::NoMatch {
            position,
            text: offending_text(sfx),
        })
    }
}
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_next().transpose()
    }
}

fn offending_text(sfx: &str) -> String {
    sfx.lines().next().unwrap_or_default().to_owned()
}

lazy_static! {
    /// Ordered by tie-break priority, highest first. Every pattern is anchored at the start of the unread suffix.
    static ref TOKEN_PATTERNS: Vec<(TokenKind, Regex)> = {
        use TokenKind as K;

        #[rustfmt::skip]
        let table = [
            (K::LineComment,   r"//[^\n]*"),
            (K::BlockComment,  r"(?s)/\*.*?\*/"),
            (K::Whitespace,    r"\s+"),
            (K::KwIf,          r"if"),
            (K::KwElse,        r"else"),
            (K::KwInt,         r"int"),
            (K::KwFloat,       r"float"),
            (K::KwReturn,      r"return"),
            (K::Identifier,    r"[a-zA-Z_][a-zA-Z0-9_]*"),
            (K::FloatLiteral,  r"[0-9]+\.[0-9]+"),
            (K::IntLiteral,    r"[0-9]+"),
            (K::StringLiteral, r#""(?:[^"\\]|\\.)*""#),
            (K::Eq,            r"=="),
            (K::Lte,           r"<="),
            (K::Gte,           r">="),
            (K::Lt,            r"<"),
            (K::Gt,            r">"),
            (K::Assign,        r"="),
            (K::BraceOpen,     r"\{"),
            (K::BraceClose,    r"\}"),
            (K::ParenOpen,     r"\("),
            (K::ParenClose,    r"\)"),
            (K::Semicolon,     r";"),
            (K::Dot,           r"\."),
            (K::Star,          r"\*"),
            (K::Plus,          r"\+"),
            (K::Minus,         r"-"),
            (K::Bang,          r"!"),
            (K::Tilde,         r"~"),
            (K::Slash,         r"/"),
        ];

        table
            .into_iter()
            .map(|(kind, pattern)| {
                let matcher = Regex::new(&format!("^(?:{pattern})")).unwrap();
                (kind, matcher)
            })
            .collect()
    };
}
