use crate::Position;

use super::{ast::Node, operators::Operator};

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub position: Position,
}

/// Identifier Expression
/// Represents a name in the AST. This includes the callee of a call.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub name: String,
    pub position: Position,
}

// COMPLEX

/// Unary Expression
/// Represents a prefix `+` or `-` applied to an operand.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Operator,
    pub operand: Box<Node>,
    pub position: Position,
}

/// Binary Expression
/// Represents an operation written with an explicit operator token.
///
/// `position` is the operator's, not the left operand's.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: Operator,
    pub left: Box<Node>,
    pub right: Box<Node>,
    pub position: Position,
}

/// Implicit Binary Expression
/// A multiplication inferred from adjacency (`2x`, `(a)(b)`).
/// There is no operator token, so there is no position either.
#[derive(Debug, Clone, PartialEq)]
pub struct ImplicitBinaryExpr {
    pub operator: Operator,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// Call Expression
/// Represents a function call in the AST. `position` is the opening `(`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Node>,
    pub arguments: Vec<Node>,
    pub position: Position,
}
