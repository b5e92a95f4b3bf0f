//! Core types for the evaluation engine.

use crate::runner::ds::value::JsValue;

/// Completion record.
/// Every statement evaluation returns one; only a function call turns a
/// `Return` back into a plain value.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion<'a> {
    /// Execution continues with the next statement.
    Normal(JsValue<'a>),
    /// A `return` is unwinding towards the nearest call boundary.
    Return(JsValue<'a>),
}

impl<'a> Completion<'a> {
    /// Create a normal completion with no value.
    pub fn normal() -> Self {
        Completion::Normal(JsValue::Undefined)
    }

    /// Create a normal completion with a value.
    pub fn normal_with_value(value: JsValue<'a>) -> Self {
        Completion::Normal(value)
    }

    /// Create a return completion.
    pub fn return_value(value: JsValue<'a>) -> Self {
        Completion::Return(value)
    }

    /// Check if this is an abrupt completion (not normal).
    pub fn is_abrupt(&self) -> bool {
        matches!(self, Completion::Return(_))
    }

    pub fn get_value(&self) -> &JsValue<'a> {
        match self {
            Completion::Normal(v) | Completion::Return(v) => v,
        }
    }

    pub fn into_value(self) -> JsValue<'a> {
        match self {
            Completion::Normal(v) | Completion::Return(v) => v,
        }
    }
}
