/// AST (Abstract Syntax Tree) module
/// Contains the data shapes a parser builds from the token stream
///
/// Submodules:
/// - ast: Core node enums and their discriminants
/// - expressions: Definitions for the expression shapes
/// - statements: Definitions for the statement shapes
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
