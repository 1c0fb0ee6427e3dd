/// AST (Abstract Syntax Tree) module
/// Contains the expression tree produced by the parser
///
/// Submodules:
/// - expressions: Literal and binary operator nodes, operators
pub mod expressions;
