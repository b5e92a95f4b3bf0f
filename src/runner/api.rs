use crate::parser::ast::StatementType;
use crate::parser::{JsParser, LowerError};
use crate::runner::ds::lex_env::EnvRef;
use crate::runner::ds::operations::lex_env::new_global_environment;
use crate::runner::ds::operations::type_conversion::{get_type, to_js_string};
use crate::runner::ds::value::JsValue;
use crate::runner::eval::statement::execute_statement;
use crate::runner::eval::Completion;

/// What a script evaluated to, detached from the AST it ran on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub type_name: String,
    pub display: String,
}

/// Runs `statements` in a fresh global environment and returns the value of
/// the last one (undefined for an empty program).
pub fn execute<'a>(statements: &'a [StatementType]) -> JsValue<'a> {
    execute_in(statements, &new_global_environment())
}

/// Like [`execute`], but in a caller-supplied environment so its bindings can
/// be inspected afterwards.
pub fn execute_in<'a>(statements: &'a [StatementType], env: &EnvRef<'a>) -> JsValue<'a> {
    let mut last = Completion::normal();
    for stmt in statements {
        last = execute_statement(stmt, env);
        if last.is_abrupt() {
            // Lowering rejects top-level `return`, so only a hand-built AST
            // gets here.
            tracing::warn!("return reached the top level outside any function");
            break;
        }
    }
    let value = last.into_value();
    tracing::debug!(result_type = get_type(&value), "program completed");
    value
}

/// Parses, lowers and runs `code`.
pub fn run_script(code: &str) -> Result<RunOutcome, LowerError> {
    let program = JsParser::parse_to_ast_from_str(code)?;
    let value = execute(&program.body);
    Ok(RunOutcome {
        type_name: get_type(&value).to_string(),
        display: to_js_string(&value),
    })
}
