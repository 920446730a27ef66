//! Error types for tokenizing and parsing.
//!
//! Every error pairs an `ErrorImpl` variant with the 1-based line and
//! column of the token that triggered it. Lexical and syntactic errors
//! share one type so callers report both the same way.

pub mod errors;
