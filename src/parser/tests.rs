//! Unit tests for the parser module.
//!
//! This module contains tests for parsing expressions including:
//! - Precedence and associativity
//! - Grouping, unary operators and implicit multiplication
//! - Calls and argument lists
//! - Empty input
//! - Every syntactic error and its position

use pretty_assertions::assert_eq;

use super::{
    lookups::{create_token_lookups, BindingPower},
    parser::{parse, parse_tokens, parse_with_options, ParseOptions},
};
use crate::{
    ast::{
        ast::Node,
        expressions::{BinaryExpr, NumberExpr, UnaryExpr},
        operators::Operator,
    },
    errors::errors::ErrorImpl,
    lexer::{
        lexer::{scan, tokenize},
        tokens::{Token, TokenKind},
    },
    Position, Span, MK_TOKEN,
};

fn sexpr(source: &str) -> String {
    parse(source).unwrap().to_string()
}

fn number(value: f64, line: u32, column: u32) -> Node {
    Node::Number(NumberExpr {
        value,
        position: Position::new(line, column),
    })
}

fn binary(operator: Operator, left: Node, right: Node, line: u32, column: u32) -> Node {
    Node::Binary(BinaryExpr {
        operator,
        left: Box::new(left),
        right: Box::new(right),
        position: Position::new(line, column),
    })
}

fn token(kind: TokenKind, value: &str, column: u32) -> Token {
    let start = Position::new(1, column);
    let end = Position::new(1, column + value.chars().count() as u32);
    MK_TOKEN!(kind, value.to_string(), Span { start, end })
}

fn error_name(source: &str) -> String {
    parse(source).unwrap_err().get_error_name().to_string()
}

fn error_position(source: &str) -> Position {
    *parse(source).unwrap_err().get_position()
}

#[test]
fn test_parse_precedence_with_positions() {
    let expected = binary(
        Operator::Add,
        number(1.0, 1, 1),
        binary(Operator::Multiply, number(2.0, 1, 5), number(3.0, 1, 9), 1, 7),
        1,
        3,
    );

    assert_eq!(parse("1 + 2 * 3").unwrap(), expected);
}

#[test]
fn test_parse_left_associativity() {
    assert_eq!(sexpr("1 + 2 + 3"), "(+ (+ 1 2) 3)");
    assert_eq!(sexpr("1 - 2 - 3"), "(- (- 1 2) 3)");
    assert_eq!(sexpr("8 / 4 / 2"), "(/ (/ 8 4) 2)");
    assert_eq!(sexpr("1 = 2 = 3"), "(= (= 1 2) 3)");
}

#[test]
fn test_parse_right_associativity() {
    let expected = binary(
        Operator::Exponent,
        number(1.0, 1, 1),
        binary(Operator::Exponent, number(2.0, 1, 5), number(3.0, 1, 9), 1, 7),
        1,
        3,
    );

    assert_eq!(parse("1 ^ 2 ^ 3").unwrap(), expected);
}

#[test]
fn test_parse_precedence_levels() {
    assert_eq!(sexpr("1 = 2 + 3"), "(= 1 (+ 2 3))");
    assert_eq!(sexpr("a ≠ b * c"), "(!= a (* b c))");
    assert_eq!(sexpr("2 × 3 ÷ 4"), "(/ (* 2 3) 4)");
    assert_eq!(sexpr("1 - 2 ^ 3 * 4"), "(- 1 (* (^ 2 3) 4))");
}

#[test]
fn test_parse_grouping_is_transparent() {
    let expected = binary(Operator::Add, number(1.0, 1, 3), number(2.0, 1, 8), 1, 5);

    assert_eq!(parse("((1 + (2)))").unwrap(), expected);
    assert_eq!(sexpr("((1 + (2)))"), sexpr("1 + 2"));
    assert_eq!(sexpr("(1 + 2) * 3"), "(* (+ 1 2) 3)");
}

#[test]
fn test_parse_empty_input() {
    assert_eq!(parse("").unwrap(), Node::Empty);
    assert_eq!(parse("\r\n   ").unwrap(), Node::Empty);
    assert_eq!(parse("  # just a comment").unwrap(), Node::Empty);
}

#[test]
fn test_parse_unary_nesting() {
    let expected = Node::Unary(UnaryExpr {
        operator: Operator::Subtract,
        operand: Box::new(Node::Unary(UnaryExpr {
            operator: Operator::Subtract,
            operand: Box::new(number(7.0, 1, 3)),
            position: Position::new(1, 2),
        })),
        position: Position::new(1, 1),
    });

    assert_eq!(parse("--7").unwrap(), expected);
    assert_eq!(sexpr("+-x"), "(+ (- x))");
}

#[test]
fn test_parse_unary_binds_tighter_than_exponent() {
    assert_eq!(sexpr("-2 ^ 2"), "(^ (- 2) 2)");
    assert_eq!(sexpr("2 ^ -1"), "(^ 2 (- 1))");
    assert_eq!(sexpr("1 - -1"), "(- 1 (- 1))");
}

#[test]
fn test_parse_implicit_multiplication() {
    let node = parse("2x").unwrap();

    match &node {
        Node::ImplicitBinary(product) => {
            assert_eq!(product.operator, Operator::Multiply);
            assert_eq!(*product.left, number(2.0, 1, 1));
            assert!(matches!(&*product.right, Node::Identifier(x) if x.name == "x"));
        }
        other => panic!("expected an implicit product, got {}", other),
    }
    assert_eq!(node.position(), None);
}

#[test]
fn test_parse_implicit_multiplication_precedence() {
    assert_eq!(sexpr("1 / 2x"), "(/ 1 (*' 2 x))");
    assert_eq!(sexpr("2x^2"), "(*' 2 (^ x 2))");
    assert_eq!(sexpr("2x * 3"), "(* (*' 2 x) 3)");
}

#[test]
fn test_parse_implicit_multiplication_of_groups() {
    assert_eq!(sexpr("(a)(b)"), "(*' a b)");
    assert_eq!(sexpr("(1 + 2)(3 + 4)"), "(*' (+ 1 2) (+ 3 4))");
    assert_eq!(sexpr("2(3)"), "(*' 2 3)");
    assert_eq!(sexpr("(2)3"), "(*' 2 3)");
    assert_eq!(sexpr("f(1)(2)"), "(*' (call f 1) 2)");
}

#[test]
fn test_parse_calls() {
    assert_eq!(sexpr("square(5) + 2"), "(+ (call square 5) 2)");
    assert_eq!(sexpr("max(1, 2 + 3, x)"), "(call max 1 (+ 2 3) x)");
    assert_eq!(sexpr("-f(x)"), "(- (call f x))");
    assert_eq!(sexpr("f(g(1), (2))"), "(call f (call g 1) 2)");
}

#[test]
fn test_parse_call_without_arguments() {
    match parse("random()").unwrap() {
        Node::Call(call) => {
            assert!(call.arguments.is_empty());
            assert!(matches!(&*call.callee, Node::Identifier(f) if f.name == "random"));
            assert_eq!(call.position, Position::new(1, 7));
        }
        other => panic!("expected a call, got {}", other),
    }
}

#[test]
fn test_parse_unmatched_paren() {
    assert_eq!(error_name("(1 + 2"), "MissingClosingParen");
    assert_eq!(error_position("(1 + 2"), Position::new(1, 7));
}

#[test]
fn test_parse_dangling_operator() {
    let error = parse("1 +").unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::IncompleteExpression);
    assert_eq!(*error.get_position(), Position::new(1, 4));
    assert_eq!(error_name("("), "IncompleteExpression");
    assert_eq!(error_name("-"), "IncompleteExpression");
}

#[test]
fn test_parse_trailing_tokens() {
    let error = parse("1 + 2 3 +").unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::UnusedTokens {
            token: "3".to_string()
        }
    );
    assert_eq!(*error.get_position(), Position::new(1, 7));
    assert_eq!(error_name("(1) )"), "UnusedTokens");
}

#[test]
fn test_parse_unclosed_call() {
    assert_eq!(error_name("sin(7"), "MissingClosingParen");
    assert_eq!(error_position("sin(7"), Position::new(1, 6));
    assert_eq!(error_name("sin("), "IncompleteExpression");
}

#[test]
fn test_parse_malformed_arguments() {
    assert_eq!(error_name("f(,1)"), "MalformedArguments");
    assert_eq!(error_position("f(,1)"), Position::new(1, 3));
    assert_eq!(error_name("f(1,,2)"), "MalformedArguments");
    assert_eq!(error_position("f(1,,2)"), Position::new(1, 5));
    assert_eq!(error_name("f(1,)"), "MalformedArguments");
    assert_eq!(error_name("f(1 2)"), "MalformedArguments");
    assert_eq!(error_position("f(1 2)"), Position::new(1, 5));
    assert_eq!(error_name("f(1, "), "IncompleteExpression");
}

#[test]
fn test_parse_missing_prefix_rule() {
    assert_eq!(error_name(")"), "NoPrefixRule");
    assert_eq!(error_name("()"), "NoPrefixRule");
    assert_eq!(error_position("()"), Position::new(1, 2));

    let error = parse("1 + * 2").unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorImpl::NoPrefixRule {
            token: "*".to_string()
        }
    );
    assert_eq!(*error.get_position(), Position::new(1, 5));
}

#[test]
fn test_parse_lexical_errors_come_first() {
    assert_eq!(error_name("1 $ 2"), "UnrecognisedToken");
    assert_eq!(error_position("1 + $"), Position::new(1, 5));
    assert_eq!(error_name("7.5.0"), "MalformedNumber");
}

#[test]
fn test_parse_tokens_rejects_error_tokens() {
    let (tokens, errors) = scan("1 $ 2");
    assert_eq!(errors.len(), 1);

    let error = parse_tokens(tokens, &create_token_lookups(), &ParseOptions::default()).unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(*error.get_position(), Position::new(1, 3));
}

#[test]
fn test_parse_tokens_adds_missing_eof() {
    let tokens = vec![token(TokenKind::Number, "4", 1)];
    let node = parse_tokens(tokens, &create_token_lookups(), &ParseOptions::default()).unwrap();

    assert_eq!(node, number(4.0, 1, 1));
    assert_eq!(
        parse_tokens(vec![], &create_token_lookups(), &ParseOptions::default()).unwrap(),
        Node::Empty
    );
}

#[test]
fn test_parse_not_callable() {
    // `2(3)` never reaches the call rule through the lexer, which inserts an
    // implicit `*`, so build the token stream by hand.
    let tokens = vec![
        token(TokenKind::Number, "2", 1),
        token(TokenKind::OpenParen, "(", 2),
        token(TokenKind::Number, "3", 3),
        token(TokenKind::CloseParen, ")", 4),
        token(TokenKind::EOF, "", 5),
    ];

    let error = parse_tokens(tokens, &create_token_lookups(), &ParseOptions::default()).unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorImpl::NotCallable {
            callee: "2".to_string()
        }
    );
    assert_eq!(*error.get_position(), Position::new(1, 2));
}

#[test]
fn test_parse_missing_infix_rule() {
    let mut lookups = create_token_lookups();
    lookups.led(TokenKind::Comma, BindingPower::Additive, super::expr::parse_binary_expr);

    let tokens = tokenize("1, 2").unwrap();
    let error = parse_tokens(tokens, &lookups, &ParseOptions::default()).unwrap_err();

    assert_eq!(error.get_error_name(), "NoInfixRule");
    assert_eq!(*error.get_position(), Position::new(1, 2));
}

#[test]
fn test_parse_nesting_limit() {
    let options = ParseOptions { max_depth: 3 };

    assert!(parse_with_options("((1))", &options).is_ok());

    let error = parse_with_options("((((1))))", &options).unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::NestingTooDeep { limit: 3 });
    assert_eq!(*error.get_position(), Position::new(1, 4));
}

#[test]
fn test_parse_default_nesting_limit() {
    let deep = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(sexpr(&deep), "1");

    let too_deep = format!("{}1", "-".repeat(ParseOptions::DEFAULT_MAX_DEPTH + 1));
    assert_eq!(error_name(&too_deep), "NestingTooDeep");
}

#[test]
fn test_parse_is_deterministic() {
    let source = "f(2x, -y ^ 2) = (a + b)(c - d) / 3.5";

    assert_eq!(parse(source).unwrap(), parse(source).unwrap());
}

#[test]
fn test_parse_node_count_is_bounded_by_tokens() {
    for source in [
        "1",
        "1 + 2 * 3",
        "--7",
        "2x",
        "((1 + (2)))",
        "max(1, 2 + 3, x)",
        "random()",
        "(a)(b)(c)",
        "-f(x) ^ 2 ≠ 3y",
    ] {
        let tokens = tokenize(source).unwrap();
        let node = parse(source).unwrap();

        assert!(
            node.node_count() <= 2 * tokens.len(),
            "{} has {} nodes for {} tokens",
            source,
            node.node_count(),
            tokens.len()
        );
    }
}

#[test]
fn test_binding_power_ordering() {
    assert!(BindingPower::Default < BindingPower::Equality);
    assert!(BindingPower::Equality < BindingPower::Additive);
    assert!(BindingPower::Additive < BindingPower::Multiplicative);
    assert!(BindingPower::Multiplicative < BindingPower::ImplicitMultiplicative);
    assert!(BindingPower::ImplicitMultiplicative < BindingPower::Exponent);
    assert!(BindingPower::Exponent < BindingPower::Unary);
    assert!(BindingPower::Unary < BindingPower::Call);
    assert_eq!(BindingPower::Exponent.weaker(), BindingPower::ImplicitMultiplicative);
    assert_eq!(BindingPower::Default.weaker(), BindingPower::Default);
}

#[test]
fn test_custom_lookups() {
    let mut lookups = super::lookups::Lookups::new();
    lookups.nud(TokenKind::Number, super::expr::parse_primary_expr);
    lookups.led(TokenKind::Plus, BindingPower::Additive, super::expr::parse_binary_expr);

    assert_eq!(
        lookups.get_bp_lookup().get(&TokenKind::Plus),
        Some(&BindingPower::Additive)
    );
    assert!(lookups.get_prefix_bp_lookup().is_empty());

    let sum = parse_tokens(tokenize("1 + 2").unwrap(), &lookups, &ParseOptions::default());
    assert_eq!(sum.unwrap().to_string(), "(+ 1 2)");

    let product = parse_tokens(tokenize("1 * 2").unwrap(), &lookups, &ParseOptions::default());
    assert_eq!(product.unwrap_err().get_error_name(), "UnusedTokens");

    let negated = parse_tokens(tokenize("-1").unwrap(), &lookups, &ParseOptions::default());
    assert_eq!(negated.unwrap_err().get_error_name(), "NoPrefixRule");
}
