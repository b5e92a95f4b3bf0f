//! Expression evaluation.
//!
//! Every expression evaluates to exactly one value. Ill-typed operations do
//! not abort; they evaluate to a `JsValue::Error` that flows on like any
//! other value.

use crate::parser::ast::{BinaryOperator, ExpressionType, LiteralType};
use crate::runner::ds::lex_env::EnvRef;
use crate::runner::ds::object::JsObject;
use crate::runner::ds::operations::lex_env::{get_binding_value, set_mutable_binding};
use crate::runner::ds::operations::object::{get, is_object_like, set};
use crate::runner::ds::operations::test_and_comparison::{loose_equality, strict_equality};
use crate::runner::ds::operations::type_conversion::{get_type, to_property_key};
use crate::runner::ds::value::JsValue;

use super::function::{call_function, instantiate_function};

/// Evaluate an expression and return its value.
pub fn evaluate_expression<'a>(expr: &'a ExpressionType, env: &EnvRef<'a>) -> JsValue<'a> {
    match expr {
        ExpressionType::Literal(lit) => evaluate_literal(lit),

        ExpressionType::ObjectExpression { properties } => {
            evaluate_object_expression(properties, env)
        }

        ExpressionType::Identifier(name) => get_binding_value(env, name),

        ExpressionType::MemberExpression { object, property } => {
            evaluate_member_expression(object, property, env)
        }

        ExpressionType::FunctionExpression { name, function } => {
            instantiate_function(name.as_deref(), function, env)
        }

        ExpressionType::CallExpression { callee, arguments } => {
            evaluate_call_expression(callee, arguments, env)
        }

        ExpressionType::BinaryExpression {
            operator,
            left,
            right,
        } => evaluate_binary_expression(*operator, left, right, env),
    }
}

pub fn evaluate_literal<'a>(lit: &LiteralType) -> JsValue<'a> {
    match lit {
        LiteralType::NumberLiteral(n) => JsValue::Number(*n),
        LiteralType::StringLiteral(s) => JsValue::String(s.clone()),
        LiteralType::BooleanLiteral(b) => JsValue::Boolean(*b),
        LiteralType::UndefinedLiteral => JsValue::Undefined,
        LiteralType::NullLiteral => JsValue::Null,
    }
}

fn evaluate_object_expression<'a>(
    properties: &'a [(String, ExpressionType)],
    env: &EnvRef<'a>,
) -> JsValue<'a> {
    let obj = JsObject::new_ref();
    for (key, value_expr) in properties {
        let value = evaluate_expression(value_expr, env);
        obj.borrow_mut().set(key.clone(), value);
    }
    JsValue::Object(obj)
}

/// `object[property]`. The key is only evaluated when the base can hold
/// properties; any other base reads as undefined.
fn evaluate_member_expression<'a>(
    object: &'a ExpressionType,
    property: &'a ExpressionType,
    env: &EnvRef<'a>,
) -> JsValue<'a> {
    let base = evaluate_expression(object, env);
    if !is_object_like(&base) {
        return JsValue::Undefined;
    }
    let key = to_property_key(&evaluate_expression(property, env));
    get(&base, &key)
}

fn evaluate_call_expression<'a>(
    callee: &'a ExpressionType,
    arguments: &'a [ExpressionType],
    env: &EnvRef<'a>,
) -> JsValue<'a> {
    let func = evaluate_expression(callee, env);
    let lambda = match func {
        JsValue::Lambda(l) => l,
        other => {
            let described = describe_callee(callee);
            tracing::debug!(callee = %described, got = get_type(&other), "call of non-function");
            return JsValue::type_error(format!("{} is not a function", described));
        }
    };
    let args = arguments
        .iter()
        .map(|arg| evaluate_expression(arg, env))
        .collect::<Vec<_>>();
    call_function(&lambda, args)
}

/// Source-like rendering of a callee for "is not a function" messages.
fn describe_callee(callee: &ExpressionType) -> String {
    match callee {
        ExpressionType::Identifier(name) => name.clone(),
        ExpressionType::MemberExpression { object, property } => match property.as_ref() {
            ExpressionType::Literal(LiteralType::StringLiteral(key)) => {
                format!("{}.{}", describe_callee(object), key)
            }
            _ => format!("{}[...]", describe_callee(object)),
        },
        ExpressionType::CallExpression { callee, .. } => format!("{}(...)", describe_callee(callee)),
        ExpressionType::Literal(lit) => match evaluate_literal(lit) {
            JsValue::String(s) => format!("{:?}", s),
            v => v.to_string(),
        },
        _ => "expression".to_string(),
    }
}

fn evaluate_binary_expression<'a>(
    operator: BinaryOperator,
    left: &'a ExpressionType,
    right: &'a ExpressionType,
    env: &EnvRef<'a>,
) -> JsValue<'a> {
    match operator {
        BinaryOperator::Assign => evaluate_assignment_expression(left, right, env),
        BinaryOperator::LooseEquals => {
            let l = evaluate_expression(left, env);
            let r = evaluate_expression(right, env);
            loose_equality(&l, &r)
        }
        BinaryOperator::StrictEquals => {
            let l = evaluate_expression(left, env);
            let r = evaluate_expression(right, env);
            JsValue::Boolean(strict_equality(&l, &r))
        }
        BinaryOperator::Add => evaluate_numeric(operator, left, right, env, |a, b| {
            JsValue::Number(a + b)
        }),
        // a - b is a + (-b).
        BinaryOperator::Subtract => evaluate_numeric(operator, left, right, env, |a, b| {
            JsValue::Number(a + -b)
        }),
        BinaryOperator::LessThan => evaluate_numeric(operator, left, right, env, |a, b| {
            JsValue::Boolean(a < b)
        }),
    }
}

/// Evaluates both operands and applies `op` if both are numbers.
fn evaluate_numeric<'a, F>(
    operator: BinaryOperator,
    left: &'a ExpressionType,
    right: &'a ExpressionType,
    env: &EnvRef<'a>,
    op: F,
) -> JsValue<'a>
where
    F: FnOnce(f64, f64) -> JsValue<'a>,
{
    let l = evaluate_expression(left, env);
    let r = evaluate_expression(right, env);
    match (&l, &r) {
        (JsValue::Number(a), JsValue::Number(b)) => op(*a, *b),
        _ => {
            tracing::debug!(
                operator = operator.as_str(),
                left = get_type(&l),
                right = get_type(&r),
                "operand type mismatch"
            );
            JsValue::type_error(format!(
                "operands of '{}' must be numbers, got {} and {}",
                operator.as_str(),
                get_type(&l),
                get_type(&r)
            ))
        }
    }
}

/// `target = value`. Evaluates to undefined.
fn evaluate_assignment_expression<'a>(
    left: &'a ExpressionType,
    right: &'a ExpressionType,
    env: &EnvRef<'a>,
) -> JsValue<'a> {
    match left {
        ExpressionType::Identifier(name) => {
            let value = evaluate_expression(right, env);
            set_mutable_binding(env, name, value);
            JsValue::Undefined
        }
        ExpressionType::MemberExpression { object, property } => {
            let base = evaluate_expression(object, env);
            if is_object_like(&base) {
                let key = to_property_key(&evaluate_expression(property, env));
                let value = evaluate_expression(right, env);
                set(&base, key, value);
            }
            JsValue::Undefined
        }
        _ => JsValue::type_error("invalid assignment target"),
    }
}
