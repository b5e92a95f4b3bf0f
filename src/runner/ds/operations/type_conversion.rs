use crate::runner::ds::value::JsValue;

pub const TYPE_STR_UNDEFINED: &str = "undefined";
pub const TYPE_STR_NULL: &str = "null";
pub const TYPE_STR_BOOLEAN: &str = "boolean";
pub const TYPE_STR_STRING: &str = "string";
pub const TYPE_STR_NUMBER: &str = "number";
pub const TYPE_STR_OBJECT: &str = "object";
pub const TYPE_STR_FUNCTION: &str = "function";
pub const TYPE_STR_ERROR: &str = "error";

const OBJECT_PLACEHOLDER: &str = "[object Object]";
const ERROR_PREFIX: &str = "ERROR: ";

pub fn get_type(a: &JsValue) -> &'static str {
    match a {
        JsValue::Undefined => TYPE_STR_UNDEFINED,
        JsValue::Null => TYPE_STR_NULL,
        JsValue::Boolean(_) => TYPE_STR_BOOLEAN,
        JsValue::String(_) => TYPE_STR_STRING,
        JsValue::Number(_) => TYPE_STR_NUMBER,
        JsValue::Object(_) => TYPE_STR_OBJECT,
        JsValue::Lambda(_) => TYPE_STR_FUNCTION,
        JsValue::Error(_) => TYPE_STR_ERROR,
    }
}

/// Truthiness. Objects, lambdas and error values are always truthy.
pub fn to_boolean(v: &JsValue) -> bool {
    match v {
        JsValue::Boolean(b) => *b,
        JsValue::Undefined | JsValue::Null => false,
        JsValue::Number(n) => !(*n == 0.0 || n.is_nan()),
        JsValue::String(s) => !s.is_empty(),
        JsValue::Object(_) | JsValue::Lambda(_) | JsValue::Error(_) => true,
    }
}

/// The display form of a value, also used to turn property keys into
/// strings.
pub fn to_js_string(v: &JsValue) -> String {
    match v {
        JsValue::Undefined => TYPE_STR_UNDEFINED.to_string(),
        JsValue::Null => TYPE_STR_NULL.to_string(),
        JsValue::Boolean(b) => b.to_string(),
        JsValue::String(s) => s.clone(),
        JsValue::Number(n) => number_to_string(*n),
        JsValue::Object(_) => OBJECT_PLACEHOLDER.to_string(),
        JsValue::Lambda(_) => TYPE_STR_FUNCTION.to_string(),
        JsValue::Error(e) => format!("{}{}", ERROR_PREFIX, e),
    }
}

pub fn to_property_key(v: &JsValue) -> String {
    to_js_string(v)
}

/// Formats a number the way scripts print it: no trailing `.0` on integral
/// values, exponent notation outside `[1e-6, 1e21)`.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Also covers -0.
        return "0".to_string();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let s = format!("{:e}", n);
        return match s.find('e') {
            Some(i) if !s[i + 1..].starts_with('-') => format!("{}e+{}", &s[..i], &s[i + 1..]),
            _ => s,
        };
    }
    format!("{}", n)
}
