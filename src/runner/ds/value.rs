use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::function_object::Lambda;
use crate::runner::ds::object::JsObjectType;
use crate::runner::ds::operations::type_conversion::to_js_string;

/// A runtime value. Primitives are held by value; objects and lambdas are
/// shared, so every clone of one refers to the same underlying thing.
///
/// `'a` is the lifetime of the AST the program was lowered to: lambdas
/// borrow their bodies from it.
#[derive(Clone)]
pub enum JsValue<'a> {
    Undefined,
    Null,
    Boolean(bool),
    String(String),
    Number(f64),
    Object(JsObjectType<'a>),
    Lambda(Rc<Lambda<'a>>),
    Error(JErrorType),
}

impl<'a> JsValue<'a> {
    pub fn is_nullish(&self) -> bool {
        matches!(self, JsValue::Undefined | JsValue::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, JsValue::Error(_))
    }

    pub fn reference_error(message: impl Into<String>) -> Self {
        JsValue::Error(JErrorType::ReferenceError(message.into()))
    }

    pub fn type_error(message: impl Into<String>) -> Self {
        JsValue::Error(JErrorType::TypeError(message.into()))
    }

    pub fn range_error(message: impl Into<String>) -> Self {
        JsValue::Error(JErrorType::RangeError(message.into()))
    }
}

impl<'a> Display for JsValue<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", to_js_string(self))
    }
}

impl<'a> fmt::Debug for JsValue<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "JsValue::Undefined"),
            JsValue::Null => write!(f, "JsValue::Null"),
            JsValue::Boolean(b) => write!(f, "JsValue::Boolean({})", b),
            JsValue::String(s) => write!(f, "JsValue::String({:?})", s),
            JsValue::Number(n) => write!(f, "JsValue::Number({:?})", n),
            JsValue::Object(_) => write!(f, "JsValue::Object(...)"),
            JsValue::Lambda(l) => write!(f, "JsValue::Lambda({})", l.name.unwrap_or("<anonymous>")),
            JsValue::Error(e) => write!(f, "JsValue::Error({:?})", e),
        }
    }
}

/// Structural equality for tests and host code: primitives by value,
/// objects and lambdas by identity, errors by payload. The language's own
/// `==` and `===` live in `operations::test_and_comparison`.
impl<'a> PartialEq for JsValue<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::Object(a), JsValue::Object(b)) => Rc::ptr_eq(a, b),
            (JsValue::Lambda(a), JsValue::Lambda(b)) => Rc::ptr_eq(a, b),
            (JsValue::Error(a), JsValue::Error(b)) => a == b,
            _ => false,
        }
    }
}
