/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: The `Node` sum type and tree-wide helpers
/// - expressions: The payload of each node kind
/// - operators: Operators carried by unary and binary nodes
pub mod ast;
pub mod expressions;
pub mod operators;
