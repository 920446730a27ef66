//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for a fixed punctuator
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler for a punctuator that needs no follow-up scanning.
///
/// The generated handler consumes whatever the pattern matched, so Unicode
/// aliases keep their literal spelling as the token value.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^[*×]").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Star),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer<'_>, regex: &Regex| {
            let (value, span) = lexer.consume(regex);
            lexer.push(MK_TOKEN!($kind, value, span));
        }
    };
}
