//! Parser state and entry points.
//!
//! The `Parser` owns the token stream and a cursor for a single parse. It
//! borrows its dispatch tables from a `Lookups` value, so the tables are
//! built once and never mutated while parsing.

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position, Span, MK_TOKEN,
};

use super::{
    expr::parse_expr,
    lookups::{BindingPower, LEDLookup, Lookups, NUDLookup, DEFAULT_LOOKUPS},
};

/// Limits applied to a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest allowed `parse_expr` recursion. Bounds native stack use on
    /// inputs like `((((...))))` or `------x`.
    pub max_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 256;
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: ParseOptions::DEFAULT_MAX_DEPTH,
        }
    }
}

/// The main parser structure that maintains parsing state.
pub struct Parser<'l> {
    /// The list of tokens to parse, always ending in EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Shared dispatch tables
    lookups: &'l Lookups,
    options: ParseOptions,
    /// Current `parse_expr` nesting
    depth: usize,
}

impl<'l> Parser<'l> {
    /// Creates a parser over `tokens`. A trailing EOF is added if missing.
    pub fn new(mut tokens: Vec<Token>, lookups: &'l Lookups, options: ParseOptions) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens.last().map_or(Position::default(), |token| token.span.end);
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::new(),
                Span { start: end, end }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            lookups,
            options,
            depth: 0,
        }
    }

    /// Returns the current token without advancing. Past the end this is EOF.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous one.
    ///
    /// Once the cursor reaches EOF it keeps returning EOF.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Expects a token of the specified kind, failing with `error` otherwise.
    pub fn expect_error(&mut self, expected_kind: TokenKind, error: Error) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(error);
        }

        Ok(self.advance())
    }

    /// Checks if tokens other than the trailing EOF remain.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// True when the whole stream is just the EOF token.
    pub fn is_empty_input(&self) -> bool {
        self.tokens.len() == 1
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().position()
    }

    pub fn get_nud_lookup(&self) -> &'l NUDLookup {
        self.lookups.get_nud_lookup()
    }

    pub fn get_led_lookup(&self) -> &'l LEDLookup {
        self.lookups.get_led_lookup()
    }

    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.lookups.binding_power(kind)
    }

    pub fn prefix_binding_power(&self, kind: TokenKind) -> BindingPower {
        self.lookups.prefix_binding_power(kind)
    }

    /// Steps one level deeper into `parse_expr`, failing past `max_depth`.
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= self.options.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.options.max_depth,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Parses a token stream into a single expression tree.
///
/// Every token before the trailing EOF must be used; the first leftover
/// token is reported as `UnusedTokens`.
pub fn parse_tokens(
    tokens: Vec<Token>,
    lookups: &Lookups,
    options: &ParseOptions,
) -> Result<Node, Error> {
    if let Some(token) = tokens.iter().find(|token| token.kind == TokenKind::Error) {
        return Err(Error::new(
            ErrorImpl::UnrecognisedToken {
                token: token.value.clone(),
            },
            token.position(),
        ));
    }

    let mut parser = Parser::new(tokens, lookups, *options);
    let node = parse_expr(&mut parser, BindingPower::Default)?;

    if parser.has_tokens() {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::UnusedTokens {
                token: token.value.clone(),
            },
            token.position(),
        ));
    }

    Ok(node)
}

/// Tokenizes and parses `source` with the given options.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> Result<Node, Error> {
    log::debug!("parsing {:?}", source);

    let tokens = tokenize(source)?;
    let result = parse_tokens(tokens, &DEFAULT_LOOKUPS, options);

    match &result {
        Ok(node) => log::debug!("parsed {} nodes", node.node_count()),
        Err(error) => log::debug!("parse failed: {}", error),
    }

    result
}

/// Tokenizes and parses `source` into an expression tree.
///
/// Empty or whitespace-only input yields `Node::Empty`.
pub fn parse(source: &str) -> Result<Node, Error> {
    parse_with_options(source, &ParseOptions::default())
}
