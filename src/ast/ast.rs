use crate::Span;

use super::{
    expressions::{BinaryExpr, IdentifierExpr, NumericLiteralExpr},
    statements::{ExpressionStmt, Program},
};

/// Statement Types
#[derive(PartialEq, Debug)]
pub enum StmtType {
    Program,
    ExpressionStmt,
}

/// Statement
///
/// Closed set of node shapes that can appear in a program body. Each variant
/// carries only its own fields; matching on the variant replaces structural
/// type checks.
#[derive(Debug, Clone)]
pub enum Stmt {
    Program(Program),
    Expression(ExpressionStmt),
}

impl Stmt {
    /// Returns the discriminant of the statement.
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Program(_) => StmtType::Program,
            Stmt::Expression(_) => StmtType::ExpressionStmt,
        }
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Clone, Debug)]
pub enum ExprType {
    NumericLiteral,
    Identifier,
    Binary,
}

/// Expression
///
/// A statement shape that additionally produces a value.
#[derive(Debug, Clone)]
pub enum Expr {
    NumericLiteral(NumericLiteralExpr),
    Identifier(IdentifierExpr),
    Binary(BinaryExpr),
}

impl Expr {
    /// Returns the discriminant of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::NumericLiteral(_) => ExprType::NumericLiteral,
            Expr::Identifier(_) => ExprType::Identifier,
            Expr::Binary(_) => ExprType::Binary,
        }
    }

    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::NumericLiteral(expression) => &expression.span,
            Expr::Identifier(expression) => &expression.span,
            Expr::Binary(expression) => &expression.span,
        }
    }
}
