use std::rc::Rc;

use crate::runner::ds::operations::type_conversion::get_type;
use crate::runner::ds::value::JsValue;

/// Compares two values of the same kind. `None` when the kinds differ.
fn same_kind_equals<'a>(a: &JsValue<'a>, b: &JsValue<'a>) -> Option<bool> {
    Some(match (a, b) {
        (JsValue::Undefined, JsValue::Undefined) | (JsValue::Null, JsValue::Null) => true,
        (JsValue::Boolean(x), JsValue::Boolean(y)) => x == y,
        (JsValue::String(x), JsValue::String(y)) => x == y,
        // NaN is never equal to itself; IEEE comparison already says so.
        (JsValue::Number(x), JsValue::Number(y)) => x == y,
        (JsValue::Object(x), JsValue::Object(y)) => Rc::ptr_eq(x, y),
        (JsValue::Lambda(x), JsValue::Lambda(y)) => Rc::ptr_eq(x, y),
        _ => return None,
    })
}

/// `==` of the subset. Null and undefined only equal each other; any other
/// pair must be of the same kind. Cross-kind comparisons are not coerced and
/// yield a TypeError value. An Error operand is passed through.
pub fn loose_equality<'a>(a: &JsValue<'a>, b: &JsValue<'a>) -> JsValue<'a> {
    match (a.is_nullish(), b.is_nullish()) {
        (true, true) => return JsValue::Boolean(true),
        (true, false) | (false, true) => return JsValue::Boolean(false),
        (false, false) => {}
    }
    if a.is_error() {
        return a.clone();
    }
    if b.is_error() {
        return b.clone();
    }
    match same_kind_equals(a, b) {
        Some(eq) => JsValue::Boolean(eq),
        None => {
            tracing::debug!(left = get_type(a), right = get_type(b), "loose comparison across kinds");
            JsValue::type_error(format!(
                "cannot loosely compare {} with {}",
                get_type(a),
                get_type(b)
            ))
        }
    }
}

/// `===`: same kind and same value. Never fails.
pub fn strict_equality<'a>(a: &JsValue<'a>, b: &JsValue<'a>) -> bool {
    same_kind_equals(a, b).unwrap_or(false)
}
