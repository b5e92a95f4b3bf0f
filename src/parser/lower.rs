//! Lowering: reduces the pest parse tree to the restricted AST.
//!
//! Each `build_ast_from_*` function accepts exactly the pair shapes the
//! interpreter supports and reports anything else as an unsupported
//! construct, named by its grammar rule and carrying its source text.

use std::collections::HashMap;
use std::str::Chars;

use pest::iterators::{Pair, Pairs};

use super::api::Rule;
use super::ast::{
    BinaryOperator, BlockStatementData, ExpressionType, FunctionData, LiteralType, ProgramData,
    StatementType, VariableDeclarationData,
};
use super::error::LowerError;
use crate::runner::ds::operations::type_conversion::number_to_string;

lazy_static! {
    static ref BINARY_OPERATORS: HashMap<&'static str, BinaryOperator> = {
        let mut operators = HashMap::new();
        operators.insert("+", BinaryOperator::Add);
        operators.insert("-", BinaryOperator::Subtract);
        operators.insert("<", BinaryOperator::LessThan);
        operators.insert("=", BinaryOperator::Assign);
        operators.insert("==", BinaryOperator::LooseEquals);
        operators.insert("===", BinaryOperator::StrictEquals);
        operators
    };
}

const UNDEFINED_IDENTIFIER: &str = "undefined";

pub(crate) fn build_ast_from_script(pairs: Pairs<Rule>) -> Result<ProgramData, LowerError> {
    let mut body = vec![];
    for pair in pairs {
        match pair.as_rule() {
            Rule::script => body = build_ast_from_statement_list(pair.into_inner(), false)?,
            Rule::EOI => { /* Do nothing */ }
            _ => return Err(unsupported(&pair)),
        }
    }
    tracing::debug!(statements = body.len(), "lowered script");
    Ok(ProgramData { body })
}

/// Lowers statements in order, dropping the ones that lower to nothing.
fn build_ast_from_statement_list(
    pairs: Pairs<Rule>,
    in_function: bool,
) -> Result<Vec<StatementType>, LowerError> {
    let mut statements = vec![];
    for pair in pairs {
        if pair.as_rule() == Rule::EOI {
            continue;
        }
        if let Some(statement) = build_ast_from_statement(pair, in_function)? {
            statements.push(statement);
        }
    }
    Ok(statements)
}

fn build_ast_from_statement(
    pair: Pair<Rule>,
    in_function: bool,
) -> Result<Option<StatementType>, LowerError> {
    Ok(Some(match pair.as_rule() {
        Rule::function_declaration => build_ast_from_function_declaration(pair)?,
        Rule::block => StatementType::BlockStatement(build_ast_from_block(pair, in_function)?),
        Rule::if_statement => build_ast_from_if_statement(pair, in_function)?,
        Rule::return_statement => build_ast_from_return_statement(pair, in_function)?,
        Rule::variable_statement => build_ast_from_variable_statement(pair)?,
        Rule::expression_statement => {
            StatementType::ExpressionStatement(build_ast_from_expression(first_inner(&pair)?)?)
        }
        Rule::empty_statement => return Ok(None),
        _ => return Err(unsupported(&pair)),
    }))
}

fn build_ast_from_block(
    pair: Pair<Rule>,
    in_function: bool,
) -> Result<BlockStatementData, LowerError> {
    Ok(BlockStatementData {
        body: build_ast_from_statement_list(pair.into_inner(), in_function)?,
    })
}

fn build_ast_from_function_declaration(pair: Pair<Rule>) -> Result<StatementType, LowerError> {
    let parts: Vec<Pair<Rule>> = pair.clone().into_inner().collect();
    match parts.as_slice() {
        [name, params, body] if name.as_rule() == Rule::identifier => {
            Ok(StatementType::FunctionDeclaration {
                name: name.as_str().to_string(),
                function: build_function_data(params.clone(), body.clone())?,
            })
        }
        _ => Err(unsupported(&pair)),
    }
}

fn build_ast_from_function_expression(pair: Pair<Rule>) -> Result<ExpressionType, LowerError> {
    let parts: Vec<Pair<Rule>> = pair.clone().into_inner().collect();
    let (name, params, body) = match parts.as_slice() {
        [name, params, body] => (Some(name.as_str().to_string()), params, body),
        [params, body] => (None, params, body),
        _ => return Err(unsupported(&pair)),
    };
    Ok(ExpressionType::FunctionExpression {
        name,
        function: build_function_data(params.clone(), body.clone())?,
    })
}

fn build_function_data(params: Pair<Rule>, body: Pair<Rule>) -> Result<FunctionData, LowerError> {
    if body.as_rule() != Rule::block {
        return Err(unsupported(&body));
    }
    Ok(FunctionData {
        params: build_ast_from_formal_parameters(params)?,
        body: build_ast_from_block(body, true)?,
    })
}

/// Only plain identifiers are accepted as parameters.
fn build_ast_from_formal_parameters(pair: Pair<Rule>) -> Result<Vec<String>, LowerError> {
    if pair.as_rule() != Rule::formal_parameters {
        return Err(unsupported(&pair));
    }
    pair.into_inner()
        .map(|param| match param.as_rule() {
            Rule::identifier => Ok(param.as_str().to_string()),
            _ => Err(unsupported(&param)),
        })
        .collect()
}

fn build_ast_from_if_statement(
    pair: Pair<Rule>,
    in_function: bool,
) -> Result<StatementType, LowerError> {
    let parts: Vec<Pair<Rule>> = pair.clone().into_inner().collect();
    let (test, consequent, alternate) = match parts.as_slice() {
        [test, consequent] => (test, consequent, None),
        [test, consequent, alternate] => (test, consequent, Some(alternate)),
        _ => return Err(unsupported(&pair)),
    };
    let alternate = match alternate {
        Some(a) => Some(Box::new(build_ast_from_branch(a.clone(), in_function)?)),
        None => None,
    };
    Ok(StatementType::IfStatement {
        test: Box::new(build_ast_from_expression(test.clone())?),
        consequent: Box::new(build_ast_from_branch(consequent.clone(), in_function)?),
        alternate,
    })
}

/// A branch may be any statement; one that lowers to nothing becomes an
/// empty block.
fn build_ast_from_branch(pair: Pair<Rule>, in_function: bool) -> Result<StatementType, LowerError> {
    Ok(build_ast_from_statement(pair, in_function)?
        .unwrap_or_else(|| StatementType::BlockStatement(BlockStatementData::default())))
}

fn build_ast_from_return_statement(
    pair: Pair<Rule>,
    in_function: bool,
) -> Result<StatementType, LowerError> {
    if !in_function {
        return Err(LowerError::ReturnOutsideFunction {
            text: pair.as_str().to_string(),
        });
    }
    let argument = match pair.into_inner().next() {
        Some(expression) => Some(Box::new(build_ast_from_expression(expression)?)),
        None => None,
    };
    Ok(StatementType::ReturnStatement { argument })
}

/// `var a = 1, b;` becomes a block holding one declaration per declarator.
fn build_ast_from_variable_statement(pair: Pair<Rule>) -> Result<StatementType, LowerError> {
    let mut declarations = vec![];
    for var_pair in pair.into_inner() {
        match var_pair.as_rule() {
            Rule::var_kind => { /* let and const behave like var */ }
            Rule::variable_declaration_list => {
                for declaration in var_pair.into_inner() {
                    declarations.push(build_ast_from_variable_declaration(declaration)?);
                }
            }
            _ => return Err(unsupported(&var_pair)),
        }
    }
    Ok(StatementType::BlockStatement(BlockStatementData {
        body: declarations,
    }))
}

fn build_ast_from_variable_declaration(pair: Pair<Rule>) -> Result<StatementType, LowerError> {
    let mut inner = pair.clone().into_inner();
    let target = inner.next().ok_or_else(|| unsupported(&pair))?;
    if target.as_rule() != Rule::identifier {
        return Err(unsupported(&target));
    }
    let init = match inner.next() {
        Some(initializer) => build_ast_from_expression(initializer)?,
        None => ExpressionType::Literal(LiteralType::UndefinedLiteral),
    };
    Ok(StatementType::VariableDeclaration(VariableDeclarationData {
        name: target.as_str().to_string(),
        init: Box::new(init),
    }))
}

pub(crate) fn build_ast_from_expression(pair: Pair<Rule>) -> Result<ExpressionType, LowerError> {
    match pair.as_rule() {
        Rule::expression => {
            let mut inner = pair.clone().into_inner();
            match (inner.next(), inner.next()) {
                (Some(only), None) => build_ast_from_expression(only),
                _ => Err(unsupported(&pair)),
            }
        }
        Rule::assignment_expression => build_ast_from_assignment_expression(pair),
        Rule::conditional_expression | Rule::unary_expression | Rule::postfix_expression => {
            build_ast_from_single_child(pair)
        }
        Rule::logical_or_expression
        | Rule::logical_and_expression
        | Rule::equality_expression
        | Rule::relational_expression
        | Rule::additive_expression
        | Rule::multiplicative_expression => build_ast_from_binary_chain(pair),
        Rule::left_hand_side_expression => build_ast_from_left_hand_side_expression(pair),
        Rule::parenthesized_expression => build_ast_from_expression(first_inner(&pair)?),
        Rule::function_expression => build_ast_from_function_expression(pair),
        Rule::object_literal => build_ast_from_object_literal(pair),
        Rule::identifier => Ok(build_ast_from_identifier(&pair)),
        Rule::numeric_literal => Ok(ExpressionType::Literal(LiteralType::NumberLiteral(
            get_numeric_value(&pair)?,
        ))),
        Rule::string_literal => Ok(ExpressionType::Literal(LiteralType::StringLiteral(
            get_string_value(&pair)?,
        ))),
        Rule::boolean_literal => Ok(ExpressionType::Literal(LiteralType::BooleanLiteral(
            pair.as_str() == "true",
        ))),
        Rule::null_literal => Ok(ExpressionType::Literal(LiteralType::NullLiteral)),
        _ => Err(unsupported(&pair)),
    }
}

/// Precedence levels that only pass their operand through. Anything that
/// actually uses the level (`?:`, prefix and postfix operators) is rejected.
fn build_ast_from_single_child(pair: Pair<Rule>) -> Result<ExpressionType, LowerError> {
    let mut inner = pair.clone().into_inner();
    match (inner.next(), inner.next()) {
        (Some(only), None) => build_ast_from_expression(only),
        _ => Err(unsupported(&pair)),
    }
}

/// Folds `operand (operator operand)*` left-associatively.
fn build_ast_from_binary_chain(pair: Pair<Rule>) -> Result<ExpressionType, LowerError> {
    let mut inner = pair.clone().into_inner();
    let first = inner.next().ok_or_else(|| unsupported(&pair))?;
    let mut left = build_ast_from_expression(first)?;
    while let Some(operator_pair) = inner.next() {
        let operator = get_binary_operator(&operator_pair)?;
        let right = build_ast_from_expression(inner.next().ok_or_else(|| unsupported(&pair))?)?;
        left = ExpressionType::BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        };
    }
    Ok(left)
}

fn build_ast_from_assignment_expression(pair: Pair<Rule>) -> Result<ExpressionType, LowerError> {
    let mut inner = pair.clone().into_inner();
    let target_pair = inner.next().ok_or_else(|| unsupported(&pair))?;
    let target = build_ast_from_expression(target_pair)?;
    let operator_pair = match inner.next() {
        Some(p) => p,
        None => return Ok(target),
    };
    let operator = get_binary_operator(&operator_pair)?;
    match target {
        ExpressionType::Identifier(_) | ExpressionType::MemberExpression { .. } => {}
        _ => return Err(unsupported(&pair)),
    }
    let value = build_ast_from_expression(inner.next().ok_or_else(|| unsupported(&pair))?)?;
    Ok(ExpressionType::BinaryExpression {
        operator,
        left: Box::new(target),
        right: Box::new(value),
    })
}

/// Applies call, `.name` and `[key]` suffixes to the primary expression.
fn build_ast_from_left_hand_side_expression(
    pair: Pair<Rule>,
) -> Result<ExpressionType, LowerError> {
    let mut inner = pair.clone().into_inner();
    let mut obj = build_ast_from_expression(inner.next().ok_or_else(|| unsupported(&pair))?)?;
    for suffix in inner {
        obj = match suffix.as_rule() {
            Rule::arguments => ExpressionType::CallExpression {
                callee: Box::new(obj),
                arguments: suffix
                    .into_inner()
                    .map(build_ast_from_expression)
                    .collect::<Result<Vec<_>, _>>()?,
            },
            Rule::property_access => ExpressionType::MemberExpression {
                object: Box::new(obj),
                property: Box::new(ExpressionType::Literal(LiteralType::StringLiteral(
                    first_inner(&suffix)?.as_str().to_string(),
                ))),
            },
            Rule::element_access => ExpressionType::MemberExpression {
                object: Box::new(obj),
                property: Box::new(build_ast_from_expression(first_inner(&suffix)?)?),
            },
            _ => return Err(unsupported(&suffix)),
        };
    }
    Ok(obj)
}

fn build_ast_from_identifier(pair: &Pair<Rule>) -> ExpressionType {
    match pair.as_str() {
        UNDEFINED_IDENTIFIER => ExpressionType::Literal(LiteralType::UndefinedLiteral),
        name => ExpressionType::Identifier(name.to_string()),
    }
}

fn build_ast_from_object_literal(pair: Pair<Rule>) -> Result<ExpressionType, LowerError> {
    let mut properties = vec![];
    for property in pair.into_inner() {
        if property.as_rule() != Rule::property_assignment {
            return Err(unsupported(&property));
        }
        let mut inner = property.clone().into_inner();
        let key = inner.next().ok_or_else(|| unsupported(&property))?;
        let value = inner.next().ok_or_else(|| unsupported(&property))?;
        properties.push((get_property_key(&key)?, build_ast_from_expression(value)?));
    }
    Ok(ExpressionType::ObjectExpression { properties })
}

/// Object literal keys are always stored as strings; `{1: x}` uses `"1"`.
fn get_property_key(pair: &Pair<Rule>) -> Result<String, LowerError> {
    match pair.as_rule() {
        Rule::identifier_name => Ok(pair.as_str().to_string()),
        Rule::string_literal => get_string_value(pair),
        Rule::numeric_literal => Ok(number_to_string(get_numeric_value(pair)?)),
        _ => Err(unsupported(pair)),
    }
}

fn get_numeric_value(pair: &Pair<Rule>) -> Result<f64, LowerError> {
    let text = pair.as_str();
    let value = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => hex.chars().try_fold(0f64, |acc, c| {
            c.to_digit(16).map(|digit| acc * 16.0 + f64::from(digit))
        }),
        None => text.parse::<f64>().ok(),
    };
    value.ok_or_else(|| invalid_literal(pair))
}

fn get_string_value(pair: &Pair<Rule>) -> Result<String, LowerError> {
    let raw = match pair.clone().into_inner().next() {
        Some(characters) => characters.as_str(),
        None => "",
    };
    let mut value = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next().ok_or_else(|| invalid_literal(pair))? {
            'n' => value.push('\n'),
            't' => value.push('\t'),
            'r' => value.push('\r'),
            'b' => value.push('\u{8}'),
            'f' => value.push('\u{c}'),
            'v' => value.push('\u{b}'),
            '0' => value.push('\0'),
            'x' => value.push(read_hex_escape(&mut chars, 2, pair)?),
            'u' => value.push(read_hex_escape(&mut chars, 4, pair)?),
            '\n' => { /* Line continuation */ }
            other => value.push(other),
        }
    }
    Ok(value)
}

fn read_hex_escape(chars: &mut Chars, digits: usize, pair: &Pair<Rule>) -> Result<char, LowerError> {
    let hex: String = chars.by_ref().take(digits).collect();
    if hex.len() != digits {
        return Err(invalid_literal(pair));
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| invalid_literal(pair))
}

fn get_binary_operator(pair: &Pair<Rule>) -> Result<BinaryOperator, LowerError> {
    BINARY_OPERATORS
        .get(pair.as_str())
        .copied()
        .ok_or_else(|| LowerError::UnknownOperator {
            token: pair.as_str().to_string(),
        })
}

fn first_inner<'i>(pair: &Pair<'i, Rule>) -> Result<Pair<'i, Rule>, LowerError> {
    pair.clone().into_inner().next().ok_or_else(|| unsupported(pair))
}

fn unsupported(pair: &Pair<Rule>) -> LowerError {
    tracing::trace!(rule = ?pair.as_rule(), "rejecting unsupported construct");
    LowerError::UnsupportedConstruct {
        kind: format!("{:?}", pair.as_rule()),
        text: pair.as_str().to_string(),
    }
}

fn invalid_literal(pair: &Pair<Rule>) -> LowerError {
    LowerError::InvalidLiteral {
        kind: format!("{:?}", pair.as_rule()),
        text: pair.as_str().to_string(),
    }
}
