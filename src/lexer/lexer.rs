use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer<'_>, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; every pattern is anchored and matches at least one rune.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\n").unwrap(), handler: newline_handler },
        RegexPattern { regex: Regex::new(r"^[ \t\r\x0B\x0C]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^#[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+(\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^\p{L}[\p{L}\p{Nd}_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: close_paren_handler },
        RegexPattern { regex: Regex::new(r"^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: Regex::new(r"^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash) },
        RegexPattern { regex: Regex::new(r"^[*×]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
        RegexPattern { regex: Regex::new(r"^[/÷]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        RegexPattern { regex: Regex::new(r"^\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret) },
        RegexPattern { regex: Regex::new(r"^(!=|≠)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals) },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
    ];

    // What may follow a number or a `)` to imply a multiplication.
    static ref OPERAND_AFTER_NUMBER: Regex = Regex::new(r"^[\p{L}(]").unwrap();
    static ref OPERAND_AFTER_PAREN: Regex = Regex::new(r"^[\p{L}0-9(]").unwrap();
}

/// Single pass scanner over one source string.
///
/// Unrecognised characters become `Error` tokens and scanning carries on,
/// so one pass reports every lexical problem in the input.
pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    errors: Vec<Error>,
    /// Byte offset into `source`
    pos: usize,
    line: u32,
    /// Column of the next rune to be consumed
    column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            tokens: vec![],
            errors: vec![],
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans the whole source, always finishing with a single EOF token.
    pub fn run(&mut self) {
        while !self.at_eof() {
            let remainder = self.remainder();
            match PATTERNS.iter().find(|pattern| pattern.regex.is_match(remainder)) {
                Some(pattern) => (pattern.handler)(self, &pattern.regex),
                None => self.unrecognised(),
            }
        }

        let end = self.position();
        self.push(MK_TOKEN!(
            TokenKind::EOF,
            String::new(),
            Span { start: end, end }
        ));
    }

    pub fn into_parts(self) -> (Vec<Token>, Vec<Error>) {
        (self.tokens, self.errors)
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn push(&mut self, token: Token) {
        log::trace!("token {}", token);
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Consumes the text `regex` matches at the cursor, returning it with its span.
    ///
    /// Patterns passed here never span a newline, so only the column moves.
    pub fn consume(&mut self, regex: &Regex) -> (String, Span) {
        let start = self.position();
        let remainder = self.remainder();
        let length = regex.find(remainder).map_or(0, |found| found.end());
        let lexeme = &remainder[..length];

        self.pos += length;
        self.column += lexeme.chars().count() as u32;

        (lexeme.to_string(), Span { start, end: self.position() })
    }

    fn advance_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !is_whitespace(ch) {
                break;
            }
            self.advance_char();
        }
    }

    /// Emits an `ImplicitStar` if the next operand directly follows the
    /// token just pushed. The synthetic token sits at that operand's position.
    fn push_implicit_star(&mut self, follows: &Regex) {
        self.skip_whitespace();

        if follows.is_match(self.remainder()) {
            let here = self.position();
            self.push(MK_TOKEN!(
                TokenKind::ImplicitStar,
                String::from("*"),
                Span { start: here, end: here }
            ));
        }
    }

    fn unrecognised(&mut self) {
        let start = self.position();
        let number = self
            .tokens
            .last()
            .filter(|last| last.kind == TokenKind::Number && last.span.end == start)
            .map(|last| last.value.clone());

        let Some(ch) = self.advance_char() else {
            return;
        };

        let error_impl = match number {
            Some(number) if ch == '.' => ErrorImpl::MalformedNumber {
                token: format!("{}{}", number, ch),
            },
            _ => ErrorImpl::UnrecognisedToken {
                token: ch.to_string(),
            },
        };

        let error = Error::new(error_impl, start);
        log::debug!("lexical error: {}", error);
        self.errors.push(error);

        self.push(MK_TOKEN!(
            TokenKind::Error,
            ch.to_string(),
            Span { start, end: self.position() }
        ));
    }
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n' | '\x0B' | '\x0C')
}

fn skip_handler(lexer: &mut Lexer<'_>, regex: &Regex) {
    lexer.consume(regex);
}

fn newline_handler(lexer: &mut Lexer<'_>, _regex: &Regex) {
    lexer.advance_char();
}

fn number_handler(lexer: &mut Lexer<'_>, regex: &Regex) {
    let (value, span) = lexer.consume(regex);
    lexer.push(MK_TOKEN!(TokenKind::Number, value, span));
    // 7x or 7(7+11)
    lexer.push_implicit_star(&OPERAND_AFTER_NUMBER);
}

fn symbol_handler(lexer: &mut Lexer<'_>, regex: &Regex) {
    let (value, span) = lexer.consume(regex);
    lexer.push(MK_TOKEN!(TokenKind::Identifier, value, span));
}

fn close_paren_handler(lexer: &mut Lexer<'_>, regex: &Regex) {
    let (value, span) = lexer.consume(regex);
    lexer.push(MK_TOKEN!(TokenKind::CloseParen, value, span));
    // (7+11)x, (7+11)(11+7) or (7+11)7
    lexer.push_implicit_star(&OPERAND_AFTER_PAREN);
}

/// Scans `source` to the end, returning every token (including `Error`
/// tokens) together with every lexical diagnostic.
pub fn scan(source: &str) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(source);
    lex.run();
    lex.into_parts()
}

/// Tokenizes `source`, failing with the first lexical error if there was one.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let (tokens, errors) = scan(source);

    match errors.into_iter().next() {
        Some(error) => Err(error),
        None => {
            log::debug!("tokenized {} tokens", tokens.len());
            Ok(tokens)
        }
    }
}
