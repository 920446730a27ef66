use crate::{
    ast::{
        ast::Node,
        expressions::{
            BinaryExpr, CallExpr, IdentifierExpr, ImplicitBinaryExpr, NumberExpr, UnaryExpr,
        },
        operators::Operator,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

/// Pratt expression climbing.
///
/// Runs the NUD of the next token, then keeps folding LEDs into `left` while
/// the upcoming token binds tighter than `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Node, Error> {
    parser.enter()?;

    // First parse NUD
    let token = parser.advance();
    let nud = match parser.get_nud_lookup().get(&token.kind) {
        Some(nud) => *nud,
        None => {
            return Err(Error::new(
                ErrorImpl::NoPrefixRule { token: token.value },
                token.span.start,
            ))
        }
    };

    log::trace!("nud {} at {:?}", token, bp);
    let mut left = nud(parser, token)?;

    // While the next token binds tighter than bp, continue parsing lhs
    while parser.binding_power(parser.current_token_kind()) > bp {
        let token = parser.advance();
        let led = match parser.get_led_lookup().get(&token.kind) {
            Some(led) => *led,
            None => {
                return Err(Error::new(
                    ErrorImpl::NoInfixRule { token: token.value },
                    token.span.start,
                ))
            }
        };

        log::trace!("led {} at {:?}", token, bp);
        left = led(parser, left, token)?;
    }

    parser.leave();
    Ok(left)
}

fn operator_for(token: &Token) -> Result<Operator, Error> {
    Operator::from_token_kind(token.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::NoInfixRule {
                token: token.value.clone(),
            },
            token.span.start,
        )
    })
}

pub fn parse_primary_expr(_parser: &mut Parser, token: Token) -> Result<Node, Error> {
    match token.kind {
        TokenKind::Number => match token.value.parse::<f64>() {
            Ok(value) => Ok(Node::Number(NumberExpr {
                value,
                position: token.span.start,
            })),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError { token: token.value },
                token.span.start,
            )),
        },
        TokenKind::Identifier => Ok(Node::Identifier(IdentifierExpr {
            name: token.value,
            position: token.span.start,
        })),
        _ => Err(Error::new(
            ErrorImpl::NoPrefixRule { token: token.value },
            token.span.start,
        )),
    }
}

/// EOF where a value should start. Only valid when the input held nothing.
pub fn parse_eof_expr(parser: &mut Parser, token: Token) -> Result<Node, Error> {
    if parser.is_empty_input() {
        return Ok(Node::Empty);
    }

    Err(Error::new(ErrorImpl::IncompleteExpression, token.span.start))
}

pub fn parse_prefix_expr(parser: &mut Parser, token: Token) -> Result<Node, Error> {
    let operator = operator_for(&token)?;
    let bp = parser.prefix_binding_power(token.kind);
    let operand = parse_expr(parser, bp)?;

    Ok(Node::Unary(UnaryExpr {
        operator,
        operand: Box::new(operand),
        position: token.span.start,
    }))
}

/// Left-associative: an equal-power operator to the right ends the inner
/// recursion and gets folded in by the caller's loop instead.
pub fn parse_binary_expr(parser: &mut Parser, left: Node, token: Token) -> Result<Node, Error> {
    let operator = operator_for(&token)?;
    let bp = parser.binding_power(token.kind);
    let right = parse_expr(parser, bp)?;

    Ok(Node::Binary(BinaryExpr {
        operator,
        left: Box::new(left),
        right: Box::new(right),
        position: token.span.start,
    }))
}

/// Right-associative: the operand is parsed one level weaker, so an
/// equal-power operator to the right is absorbed by the inner call.
pub fn parse_right_binary_expr(
    parser: &mut Parser,
    left: Node,
    token: Token,
) -> Result<Node, Error> {
    let operator = operator_for(&token)?;
    let bp = parser.binding_power(token.kind).weaker();
    let right = parse_expr(parser, bp)?;

    Ok(Node::Binary(BinaryExpr {
        operator,
        left: Box::new(left),
        right: Box::new(right),
        position: token.span.start,
    }))
}

pub fn parse_implicit_binary_expr(
    parser: &mut Parser,
    left: Node,
    token: Token,
) -> Result<Node, Error> {
    let operator = operator_for(&token)?;
    let bp = parser.binding_power(token.kind);
    let right = parse_expr(parser, bp)?;

    Ok(Node::ImplicitBinary(ImplicitBinaryExpr {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser, _token: Token) -> Result<Node, Error> {
    let expr = parse_expr(parser, BindingPower::Default)?;

    let error = missing_closing_paren(parser);
    parser.expect_error(TokenKind::CloseParen, error)?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: Node, token: Token) -> Result<Node, Error> {
    if !matches!(left, Node::Identifier(_)) {
        return Err(Error::new(
            ErrorImpl::NotCallable {
                callee: left.to_string(),
            },
            token.span.start,
        ));
    }

    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            if parser
                .current_token()
                .is_one_of_many(&[TokenKind::Comma, TokenKind::CloseParen])
            {
                return Err(malformed_arguments(parser));
            }

            arguments.push(parse_expr(parser, BindingPower::Default)?);

            match parser.current_token_kind() {
                TokenKind::Comma => {
                    parser.advance();
                }
                TokenKind::CloseParen => break,
                TokenKind::EOF => return Err(missing_closing_paren(parser)),
                _ => return Err(malformed_arguments(parser)),
            }
        }
    }

    let error = missing_closing_paren(parser);
    parser.expect_error(TokenKind::CloseParen, error)?;

    Ok(Node::Call(CallExpr {
        callee: Box::new(left),
        arguments,
        position: token.span.start,
    }))
}

fn missing_closing_paren(parser: &Parser) -> Error {
    Error::new(
        ErrorImpl::MissingClosingParen {
            found: parser.current_token().describe().to_string(),
        },
        parser.get_position(),
    )
}

fn malformed_arguments(parser: &Parser) -> Error {
    Error::new(
        ErrorImpl::MalformedArguments {
            found: parser.current_token().describe().to_string(),
        },
        parser.get_position(),
    )
}
