//! Tests for lowering source text into the restricted AST.
//!
//! Covers the accepted node shapes and the construction-time failures for
//! everything outside the supported subset.

extern crate justlite;

use justlite::parser::ast::{
    BinaryOperator, BlockStatementData, ExpressionType, FunctionData, LiteralType, StatementType,
    VariableDeclarationData,
};
use justlite::parser::{JsParser, LowerError};
use pretty_assertions::assert_eq;

fn lower(code: &str) -> Vec<StatementType> {
    JsParser::parse_to_ast_from_str(code).unwrap().body
}

fn lower_err(code: &str) -> LowerError {
    match JsParser::parse_to_ast_from_str(code) {
        Ok(ast) => panic!("expected {:?} to be rejected, got {:?}", code, ast),
        Err(e) => e,
    }
}

/// Lowers a single expression statement and returns its expression.
fn lower_expr(code: &str) -> ExpressionType {
    match lower(code).as_slice() {
        [StatementType::ExpressionStatement(e)] => e.clone(),
        other => panic!("expected one expression statement, got {:?}", other),
    }
}

fn ident(name: &str) -> ExpressionType {
    ExpressionType::Identifier(name.to_string())
}

fn num(n: f64) -> ExpressionType {
    ExpressionType::Literal(LiteralType::NumberLiteral(n))
}

fn str_lit(s: &str) -> ExpressionType {
    ExpressionType::Literal(LiteralType::StringLiteral(s.to_string()))
}

fn undefined() -> ExpressionType {
    ExpressionType::Literal(LiteralType::UndefinedLiteral)
}

fn binary(operator: BinaryOperator, left: ExpressionType, right: ExpressionType) -> ExpressionType {
    ExpressionType::BinaryExpression {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn var_decl(name: &str, init: ExpressionType) -> StatementType {
    StatementType::VariableDeclaration(VariableDeclarationData {
        name: name.to_string(),
        init: Box::new(init),
    })
}

fn ret(argument: ExpressionType) -> StatementType {
    StatementType::ReturnStatement {
        argument: Some(Box::new(argument)),
    }
}

fn block(body: Vec<StatementType>) -> StatementType {
    StatementType::BlockStatement(BlockStatementData { body })
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_variable_statement_lowers_to_block_of_declarations() {
    assert_eq!(
        lower("var a = 1, b;"),
        vec![block(vec![var_decl("a", num(1.0)), var_decl("b", undefined())])]
    );
}

#[test]
fn test_let_and_const_lower_like_var() {
    assert_eq!(lower("let a = 1;"), lower("var a = 1;"));
    assert_eq!(lower("const a = 1"), lower("var a = 1;"));
}

#[test]
fn test_function_declaration() {
    assert_eq!(
        lower("function add(a, b) { return a + b; }"),
        vec![StatementType::FunctionDeclaration {
            name: "add".to_string(),
            function: FunctionData {
                params: vec!["a".to_string(), "b".to_string()],
                body: BlockStatementData {
                    body: vec![ret(binary(BinaryOperator::Add, ident("a"), ident("b")))],
                },
            },
        }]
    );
}

#[test]
fn test_if_else_if_chain() {
    let ast = lower("if (a) x; else if (b) { y; } else z;");
    assert_eq!(
        ast,
        vec![StatementType::IfStatement {
            test: Box::new(ident("a")),
            consequent: Box::new(StatementType::ExpressionStatement(ident("x"))),
            alternate: Some(Box::new(StatementType::IfStatement {
                test: Box::new(ident("b")),
                consequent: Box::new(block(vec![StatementType::ExpressionStatement(ident(
                    "y"
                ))])),
                alternate: Some(Box::new(StatementType::ExpressionStatement(ident("z")))),
            })),
        }]
    );
}

#[test]
fn test_if_with_empty_branch() {
    assert_eq!(
        lower("if (a) ;"),
        vec![StatementType::IfStatement {
            test: Box::new(ident("a")),
            consequent: Box::new(block(vec![])),
            alternate: None,
        }]
    );
}

#[test]
fn test_empty_statements_are_dropped() {
    assert_eq!(
        lower(";; 1; ;"),
        vec![StatementType::ExpressionStatement(num(1.0))]
    );
}

#[test]
fn test_bare_return_inside_function() {
    assert_eq!(
        lower("function f() { return; }"),
        vec![StatementType::FunctionDeclaration {
            name: "f".to_string(),
            function: FunctionData {
                params: vec![],
                body: BlockStatementData {
                    body: vec![StatementType::ReturnStatement { argument: None }],
                },
            },
        }]
    );
}

#[test]
fn test_line_break_after_return_ends_statement() {
    assert_eq!(
        lower("function f() { return\n 1; }"),
        vec![StatementType::FunctionDeclaration {
            name: "f".to_string(),
            function: FunctionData {
                params: vec![],
                body: BlockStatementData {
                    body: vec![
                        StatementType::ReturnStatement { argument: None },
                        StatementType::ExpressionStatement(num(1.0)),
                    ],
                },
            },
        }]
    );
}

#[test]
fn test_return_argument_on_same_line() {
    let expected = vec![StatementType::FunctionDeclaration {
        name: "f".to_string(),
        function: FunctionData {
            params: vec![],
            body: BlockStatementData {
                body: vec![ret(binary(BinaryOperator::Add, num(1.0), num(2.0)))],
            },
        },
    }];
    assert_eq!(lower("function f() { return /* note */ 1 +\n 2; }"), expected);
    assert_eq!(lower("function f() { return 1 + 2 }"), expected);
}

#[test]
fn test_statements_keep_source_order() {
    let ast = lower("var x = 1\nx = 2\nx");
    assert_eq!(ast.len(), 3);
    assert_eq!(ast[2], StatementType::ExpressionStatement(ident("x")));
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_binary_operators_fold_left() {
    assert_eq!(
        lower_expr("a - b + c;"),
        binary(
            BinaryOperator::Add,
            binary(BinaryOperator::Subtract, ident("a"), ident("b")),
            ident("c")
        )
    );
}

#[test]
fn test_equality_operators() {
    assert_eq!(
        lower_expr("a == null"),
        binary(
            BinaryOperator::LooseEquals,
            ident("a"),
            ExpressionType::Literal(LiteralType::NullLiteral)
        )
    );
    assert_eq!(
        lower_expr("a === b"),
        binary(BinaryOperator::StrictEquals, ident("a"), ident("b"))
    );
}

#[test]
fn test_relational_binds_tighter_than_equality() {
    assert_eq!(
        lower_expr("a < 2 == true"),
        binary(
            BinaryOperator::LooseEquals,
            binary(BinaryOperator::LessThan, ident("a"), num(2.0)),
            ExpressionType::Literal(LiteralType::BooleanLiteral(true))
        )
    );
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(
        lower_expr("a = b = 1"),
        binary(
            BinaryOperator::Assign,
            ident("a"),
            binary(BinaryOperator::Assign, ident("b"), num(1.0))
        )
    );
}

#[test]
fn test_parentheses_are_unwrapped() {
    assert_eq!(
        lower_expr("a - (b - c)"),
        binary(
            BinaryOperator::Subtract,
            ident("a"),
            binary(BinaryOperator::Subtract, ident("b"), ident("c"))
        )
    );
}

#[test]
fn test_member_access_forms() {
    assert_eq!(
        lower_expr("o.x"),
        ExpressionType::MemberExpression {
            object: Box::new(ident("o")),
            property: Box::new(str_lit("x")),
        }
    );
    assert_eq!(
        lower_expr("o[n]"),
        ExpressionType::MemberExpression {
            object: Box::new(ident("o")),
            property: Box::new(ident("n")),
        }
    );
}

#[test]
fn test_call_with_member_callee() {
    assert_eq!(
        lower_expr("o.f(1, g)"),
        ExpressionType::CallExpression {
            callee: Box::new(ExpressionType::MemberExpression {
                object: Box::new(ident("o")),
                property: Box::new(str_lit("f")),
            }),
            arguments: vec![num(1.0), ident("g")],
        }
    );
}

#[test]
fn test_named_function_expression() {
    assert_eq!(
        lower("var g = function h(x) { return x; };"),
        vec![block(vec![var_decl(
            "g",
            ExpressionType::FunctionExpression {
                name: Some("h".to_string()),
                function: FunctionData {
                    params: vec!["x".to_string()],
                    body: BlockStatementData {
                        body: vec![ret(ident("x"))],
                    },
                },
            }
        )])]
    );
}

#[test]
fn test_object_literal_keys_are_strings() {
    assert_eq!(
        lower("var o = {a: 1, 'b c': 2, 3: x, 1.50: y};"),
        vec![block(vec![var_decl(
            "o",
            ExpressionType::ObjectExpression {
                properties: vec![
                    ("a".to_string(), num(1.0)),
                    ("b c".to_string(), num(2.0)),
                    ("3".to_string(), ident("x")),
                    ("1.5".to_string(), ident("y")),
                ],
            }
        )])]
    );
}

#[test]
fn test_literals() {
    assert_eq!(lower_expr("0x1F"), num(31.0));
    assert_eq!(lower_expr("0x10000000000000000"), num(18446744073709551616.0));
    assert_eq!(lower_expr("2.5e2"), num(250.0));
    assert_eq!(lower_expr("undefined"), undefined());
    assert_eq!(
        lower_expr("false"),
        ExpressionType::Literal(LiteralType::BooleanLiteral(false))
    );
    assert_eq!(lower_expr(r#""tab\there""#), str_lit("tab\there"));
    assert_eq!(lower_expr(r"'\x41B\'c'"), str_lit("AB'c"));
}

// ============================================================================
// Construction-time failures
// ============================================================================

#[test]
fn test_unsupported_statement_names_rule_and_text() {
    match lower_err("while (x) {}") {
        LowerError::UnsupportedConstruct { kind, text } => {
            assert_eq!(kind, "while_statement");
            assert_eq!(text, "while (x) {}");
        }
        e => panic!("unexpected error {:?}", e),
    }
    assert_eq!(
        lower_err("while (x) {}").to_string(),
        "Unknown node while_statement: while (x) {}"
    );
}

#[test]
fn test_unknown_operator_token() {
    for (code, token) in &[("a * b", "*"), ("a != b", "!="), ("a += 1", "+="), ("a || b", "||")] {
        match lower_err(code) {
            LowerError::UnknownOperator { token: t } => assert_eq!(&t, token),
            e => panic!("unexpected error for {}: {:?}", code, e),
        }
    }
}

#[test]
fn test_unsupported_expressions() {
    let kind_of = |code: &str| match lower_err(code) {
        LowerError::UnsupportedConstruct { kind, .. } => kind,
        e => panic!("unexpected error for {}: {:?}", code, e),
    };
    assert_eq!(kind_of("-1"), "unary_expression");
    assert_eq!(kind_of("a ? b : c"), "conditional_expression");
    assert_eq!(kind_of("i++"), "postfix_expression");
    assert_eq!(kind_of("a, b"), "expression");
    assert_eq!(kind_of("[1, 2]"), "array_literal");
    assert_eq!(kind_of("new F()"), "new_expression");
    assert_eq!(kind_of("var o = {a};"), "shorthand_property");
    assert_eq!(kind_of("1 = 2"), "assignment_expression");
}

#[test]
fn test_only_identifier_parameters_are_supported() {
    match lower_err("function f(a = 1) {}") {
        LowerError::UnsupportedConstruct { kind, text } => {
            assert_eq!(kind, "default_parameter");
            assert_eq!(text, "a = 1");
        }
        e => panic!("unexpected error {:?}", e),
    }
    assert!(matches!(
        lower_err("var {a, b} = o;"),
        LowerError::UnsupportedConstruct { .. }
    ));
}

#[test]
fn test_return_outside_function_is_rejected() {
    assert!(matches!(
        lower_err("return 1;"),
        LowerError::ReturnOutsideFunction { .. }
    ));
    assert!(matches!(
        lower_err("if (a) { return; }"),
        LowerError::ReturnOutsideFunction { .. }
    ));
}

#[test]
fn test_syntax_error() {
    assert!(matches!(lower_err("var = ;"), LowerError::Syntax(_)));
    assert!(matches!(lower_err("f(1"), LowerError::Syntax(_)));
}

#[test]
fn test_lowering_error_aborts_whole_program() {
    assert!(JsParser::parse_to_ast_from_str("var a = 1; a * 2; var b = 3;").is_err());
}
