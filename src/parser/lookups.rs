use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::Token, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Precedence levels, weakest first. Only the ordering is meaningful.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default,
    Equality,
    Additive,
    Multiplicative,
    ImplicitMultiplicative,
    Exponent,
    Unary,
    Call,
}

impl BindingPower {
    /// The level just below this one. Right-associative operators parse
    /// their right operand at this power so an equal operator binds inside it.
    pub fn weaker(self) -> BindingPower {
        match self {
            BindingPower::Default | BindingPower::Equality => BindingPower::Default,
            BindingPower::Additive => BindingPower::Equality,
            BindingPower::Multiplicative => BindingPower::Additive,
            BindingPower::ImplicitMultiplicative => BindingPower::Multiplicative,
            BindingPower::Exponent => BindingPower::ImplicitMultiplicative,
            BindingPower::Unary => BindingPower::Exponent,
            BindingPower::Call => BindingPower::Unary,
        }
    }
}

pub type NUDHandler = fn(&mut Parser<'_>, Token) -> Result<Node, Error>;
pub type LEDHandler = fn(&mut Parser<'_>, Node, Token) -> Result<Node, Error>;

pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

/// Dispatch configuration for the Pratt engine.
///
/// Holds no per-parse state. Once built it is only read, so one instance
/// can serve any number of parses, including on different threads.
#[derive(Clone, Default)]
pub struct Lookups {
    /// Null denotation (prefix) handlers
    nud_lookup: NUDLookup,
    /// Left denotation (infix) handlers
    led_lookup: LEDLookup,
    /// Binding power of each infix operator
    binding_power_lookup: BPLookup,
    /// Binding power a prefix operator parses its operand at
    prefix_binding_power_lookup: BPLookup,
}

impl Lookups {
    /// Creates an empty table. Most callers want `create_token_lookups`.
    pub fn new() -> Self {
        Lookups::default()
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a prefix operator whose operand is parsed at `binding_power`.
    pub fn prefix(&mut self, kind: TokenKind, binding_power: BindingPower, nud_fn: NUDHandler) {
        self.prefix_binding_power_lookup.insert(kind, binding_power);
        self.nud_lookup.insert(kind, nud_fn);
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    pub fn get_prefix_bp_lookup(&self) -> &BPLookup {
        &self.prefix_binding_power_lookup
    }

    /// Infix binding power of `kind`. Tokens without one end an expression.
    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    pub fn prefix_binding_power(&self, kind: TokenKind) -> BindingPower {
        self.prefix_binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }
}

pub fn create_token_lookups() -> Lookups {
    let mut lookups = Lookups::new();

    // Equality
    lookups.led(TokenKind::Equals, BindingPower::Equality, parse_binary_expr);
    lookups.led(TokenKind::NotEquals, BindingPower::Equality, parse_binary_expr);

    // Additive and multiplicative
    lookups.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    lookups.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    lookups.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    lookups.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    lookups.led(
        TokenKind::ImplicitStar,
        BindingPower::ImplicitMultiplicative,
        parse_implicit_binary_expr,
    );

    // Right-associative
    lookups.led(TokenKind::Caret, BindingPower::Exponent, parse_right_binary_expr);

    lookups.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    lookups.nud(TokenKind::Number, parse_primary_expr);
    lookups.nud(TokenKind::Identifier, parse_primary_expr);
    lookups.nud(TokenKind::OpenParen, parse_grouping_expr);
    lookups.nud(TokenKind::EOF, parse_eof_expr);
    lookups.prefix(TokenKind::Plus, BindingPower::Unary, parse_prefix_expr);
    lookups.prefix(TokenKind::Dash, BindingPower::Unary, parse_prefix_expr);

    lookups
}

lazy_static! {
    /// The arithmetic grammar, built once and shared by every `parse`.
    pub static ref DEFAULT_LOOKUPS: Lookups = create_token_lookups();
}
