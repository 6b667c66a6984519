use std::slice::{Iter, IterMut};

use crate::Span;

use super::ast::{Expr, Stmt};

/// Program
/// The root node, holding an ordered sequence of statements.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, Stmt> {
        self.body.iter_mut()
    }
}

/// Expression Statement
/// An expression appearing in statement position.
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}
