//! Unit tests for the AST data shapes.
//!
//! The lexer never builds these nodes; the tests pin down the contract a
//! parser relies on: one discriminant per concrete shape, and exclusive
//! ownership of sub-expressions.

use crate::ast::ast::{Expr, ExprType, Stmt, StmtType};
use crate::ast::expressions::{BinaryExpr, IdentifierExpr, NumericLiteralExpr};
use crate::ast::statements::{ExpressionStmt, Program};
use crate::{Position, Span};

fn null_span() -> Span {
    Span {
        start: Position::null(),
        end: Position::null(),
    }
}

#[test]
fn test_expr_discriminants() {
    let number = Expr::NumericLiteral(NumericLiteralExpr {
        value: 45.0,
        span: null_span(),
    });
    let identifier = Expr::Identifier(IdentifierExpr {
        symbol: "x".to_string(),
        span: null_span(),
    });
    let binary = Expr::Binary(BinaryExpr {
        left: Box::new(number.clone()),
        operator: "+".to_string(),
        right: Box::new(identifier.clone()),
        span: null_span(),
    });

    assert_eq!(number.get_expr_type(), ExprType::NumericLiteral);
    assert_eq!(identifier.get_expr_type(), ExprType::Identifier);
    assert_eq!(binary.get_expr_type(), ExprType::Binary);
}

#[test]
fn test_binary_expr_owns_its_subtree() {
    // (4 + 5) * 2
    let sum = Expr::Binary(BinaryExpr {
        left: Box::new(Expr::NumericLiteral(NumericLiteralExpr {
            value: 4.0,
            span: null_span(),
        })),
        operator: "+".to_string(),
        right: Box::new(Expr::NumericLiteral(NumericLiteralExpr {
            value: 5.0,
            span: null_span(),
        })),
        span: null_span(),
    });
    let product = Expr::Binary(BinaryExpr {
        left: Box::new(sum),
        operator: "*".to_string(),
        right: Box::new(Expr::NumericLiteral(NumericLiteralExpr {
            value: 2.0,
            span: null_span(),
        })),
        span: null_span(),
    });

    let outer = match product {
        Expr::Binary(binary) => binary,
        _ => panic!("Expected a binary expression"),
    };
    assert_eq!(outer.operator, "*");

    let inner = match *outer.left {
        Expr::Binary(binary) => binary,
        _ => panic!("Expected a nested binary expression"),
    };
    assert_eq!(inner.operator, "+");

    let left = match *inner.left {
        Expr::NumericLiteral(literal) => literal,
        _ => panic!("Expected a numeric literal"),
    };
    assert_eq!(left.value, 4.0);
}

#[test]
fn test_program_body_order() {
    let first = Stmt::Expression(ExpressionStmt {
        expression: Expr::Identifier(IdentifierExpr {
            symbol: "x".to_string(),
            span: null_span(),
        }),
        span: null_span(),
    });
    let second = Stmt::Expression(ExpressionStmt {
        expression: Expr::Identifier(IdentifierExpr {
            symbol: "y".to_string(),
            span: null_span(),
        }),
        span: null_span(),
    });

    let program = Program {
        body: vec![first, second],
    };

    assert_eq!(program.body.len(), 2);
    for stmt in program.iter() {
        assert_eq!(stmt.get_stmt_type(), StmtType::ExpressionStmt);
    }

    let symbols: Vec<&str> = program
        .iter()
        .map(|stmt| match stmt {
            Stmt::Expression(ExpressionStmt {
                expression: Expr::Identifier(identifier),
                ..
            }) => identifier.symbol.as_str(),
            _ => panic!("Expected identifier expression statements"),
        })
        .collect();
    assert_eq!(symbols, vec!["x", "y"]);
}

#[test]
fn test_program_as_statement() {
    let program = Stmt::Program(Program::default());
    assert_eq!(program.get_stmt_type(), StmtType::Program);
}
