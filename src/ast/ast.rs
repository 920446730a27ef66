use std::fmt::Display;

use crate::Position;

use super::expressions::{
    BinaryExpr, CallExpr, IdentifierExpr, ImplicitBinaryExpr, NumberExpr, UnaryExpr,
};

/// A node in the expression tree.
///
/// Each node exclusively owns its children, so a parsed expression is
/// always a tree and can be matched exhaustively by downstream consumers.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Result of parsing input that holds nothing but whitespace or comments
    Empty,
    Number(NumberExpr),
    Identifier(IdentifierExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    ImplicitBinary(ImplicitBinaryExpr),
    Call(CallExpr),
}

impl Node {
    /// Returns the position of the token that produced the node.
    ///
    /// `Empty` and implicit products have none.
    pub fn position(&self) -> Option<Position> {
        match self {
            Node::Empty | Node::ImplicitBinary(_) => None,
            Node::Number(number) => Some(number.position),
            Node::Identifier(identifier) => Some(identifier.position),
            Node::Unary(unary) => Some(unary.position),
            Node::Binary(binary) => Some(binary.position),
            Node::Call(call) => Some(call.position),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Counts every node in the tree, this one included.
    pub fn node_count(&self) -> usize {
        match self {
            Node::Empty | Node::Number(_) | Node::Identifier(_) => 1,
            Node::Unary(unary) => 1 + unary.operand.node_count(),
            Node::Binary(binary) => 1 + binary.left.node_count() + binary.right.node_count(),
            Node::ImplicitBinary(binary) => {
                1 + binary.left.node_count() + binary.right.node_count()
            }
            Node::Call(call) => {
                1 + call.callee.node_count()
                    + call.arguments.iter().map(Node::node_count).sum::<usize>()
            }
        }
    }
}

// Single-line prefix notation: `(+ 1 (* 2 3))`, `(*' 2 x)`, `(call f 1 2)`
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Empty => write!(f, "<empty>"),
            Node::Number(number) => write!(f, "{}", number.value),
            Node::Identifier(identifier) => write!(f, "{}", identifier.name),
            Node::Unary(unary) => write!(f, "({} {})", unary.operator, unary.operand),
            Node::Binary(binary) => {
                write!(f, "({} {} {})", binary.operator, binary.left, binary.right)
            }
            Node::ImplicitBinary(binary) => {
                write!(f, "({}' {} {})", binary.operator, binary.left, binary.right)
            }
            Node::Call(call) => {
                write!(f, "(call {}", call.callee)?;
                for argument in &call.arguments {
                    write!(f, " {}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}
