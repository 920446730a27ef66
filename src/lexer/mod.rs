//! Lexical analysis for arithmetic expressions.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Numbers, Unicode identifiers, punctuators and their Unicode aliases
//! - Line and rune-column tracking for error reporting
//! - `#` comments and whitespace
//! - Insertion of implicit multiplication tokens (`2x`, `(a)(b)`)

pub mod lexer;
pub mod tokens;
