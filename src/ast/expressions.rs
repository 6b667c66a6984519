use crate::Span;

use super::ast::Expr;

// LITERALS

/// Numeric Literal Expression
/// Represents an integer literal in the AST.
///
/// The lexer keeps number values as text; parsing the digits into `value`
/// belongs to whichever stage builds this node.
#[derive(Debug, Clone)]
pub struct NumericLiteralExpr {
    pub value: f64,
    pub span: Span,
}

/// Identifier Expression
/// Represents an identifier in the AST.
#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub symbol: String,
    pub span: Span,
}

// COMPLEX

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
///
/// The node exclusively owns its sub-expressions; `operator` is one of the
/// four binary operator characters `+ - * /`.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
    pub span: Span,
}
