use std::fmt::Display;

use crate::{Position, Span};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,
    Error,

    OpenParen,
    CloseParen,
    Comma,

    Equals,    // =
    NotEquals, // != ≠

    Plus,
    Dash,
    Star,         // * ×
    ImplicitStar, // inserted between adjacent operands: 2x, (a)(b)
    Slash,        // / ÷
    Caret,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "<eof> :{}", self.span.start),
            TokenKind::ImplicitStar => write!(f, "implicit * :{}", self.span.start),
            _ => write!(f, "{} {:?} :{}", self.kind, self.value, self.span.start),
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// The lexeme as it should read in a diagnostic.
    pub fn describe(&self) -> &str {
        match self.kind {
            TokenKind::EOF => "end of input",
            _ => &self.value,
        }
    }

    pub fn position(&self) -> Position {
        self.span.start
    }

    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }
}
