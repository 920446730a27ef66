#![allow(clippy::module_inception)]

//! Tokenizer and Pratt parser for arithmetic expressions.
//!
//! ```
//! let ast = pratt::parse("2x + square(3) ^ 2").unwrap();
//! assert_eq!(ast.to_string(), "(+ (*' 2 x) (^ (call square 3) 2))");
//! ```

use std::fmt::Display;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use ast::ast::Node;
pub use ast::operators::Operator;
pub use errors::errors::{Error, ErrorImpl, ErrorTip};
pub use lexer::lexer::tokenize;
pub use lexer::tokens::{Token, TokenKind};
pub use parser::lookups::{BindingPower, Lookups, DEFAULT_LOOKUPS};
pub use parser::parser::{parse, parse_tokens, parse_with_options, ParseOptions};

/// A 1-based line and column. Columns count Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(1, 1)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start of a lexeme and the position one past its last rune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}
