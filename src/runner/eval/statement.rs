//! Statement execution.
//!
//! Statements yield a [`Completion`]. A `Return` completion short-circuits
//! every enclosing block and `if` until [`call_function`] collapses it.
//!
//! [`call_function`]: super::function::call_function

use crate::parser::ast::{BlockStatementData, StatementType, VariableDeclarationData};
use crate::runner::ds::lex_env::EnvRef;
use crate::runner::ds::operations::lex_env::create_binding;
use crate::runner::ds::operations::type_conversion::to_boolean;
use crate::runner::ds::value::JsValue;

use super::expression::evaluate_expression;
use super::function::instantiate_function;
use super::types::Completion;

/// Execute a statement and return its completion.
pub fn execute_statement<'a>(stmt: &'a StatementType, env: &EnvRef<'a>) -> Completion<'a> {
    match stmt {
        StatementType::FunctionDeclaration { name, function } => {
            let lambda = instantiate_function(Some(name.as_str()), function, env);
            create_binding(env, name, lambda);
            Completion::normal()
        }

        StatementType::VariableDeclaration(decl) => execute_variable_declaration(decl, env),

        StatementType::IfStatement {
            test,
            consequent,
            alternate,
        } => {
            if to_boolean(&evaluate_expression(test, env)) {
                execute_statement(consequent, env)
            } else if let Some(alternate) = alternate {
                execute_statement(alternate, env)
            } else {
                Completion::normal()
            }
        }

        StatementType::ReturnStatement { argument } => {
            let value = match argument {
                Some(expr) => evaluate_expression(expr, env),
                None => JsValue::Undefined,
            };
            Completion::return_value(value)
        }

        StatementType::BlockStatement(block) => execute_block(block, env),

        StatementType::ExpressionStatement(expr) => {
            Completion::normal_with_value(evaluate_expression(expr, env))
        }
    }
}

/// Runs the statements of a block in `env` itself; blocks open no scope.
/// A block is not expression-valued, so it completes with undefined unless
/// something inside returned.
pub fn execute_block<'a>(block: &'a BlockStatementData, env: &EnvRef<'a>) -> Completion<'a> {
    for stmt in &block.body {
        let completion = execute_statement(stmt, env);
        if completion.is_abrupt() {
            return completion;
        }
    }
    Completion::normal()
}

fn execute_variable_declaration<'a>(
    decl: &'a VariableDeclarationData,
    env: &EnvRef<'a>,
) -> Completion<'a> {
    let value = evaluate_expression(&decl.init, env);
    create_binding(env, &decl.name, value);
    Completion::normal()
}
