//! Parser module for building the expression tree.
//!
//! This module contains the Pratt parser that transforms a stream of tokens
//! into an AST. It handles:
//!
//! - Expression parsing with operator precedence and associativity
//! - Grouping, unary operators, implicit multiplication and calls
//! - Positioned errors for anything that does not form one expression
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! looked up by token kind, with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
