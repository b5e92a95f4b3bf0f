use crate::runner::ds::value::JsValue;

/// Objects and lambdas both carry a property map.
pub fn is_object_like(base: &JsValue) -> bool {
    matches!(base, JsValue::Object(_) | JsValue::Lambda(_))
}

/// Property read. Missing keys and non-object bases give undefined.
pub fn get<'a>(base: &JsValue<'a>, key: &str) -> JsValue<'a> {
    let found = match base {
        JsValue::Object(o) => o.borrow().get(key).cloned(),
        JsValue::Lambda(l) => l.properties.borrow().get(key).cloned(),
        _ => None,
    };
    found.unwrap_or(JsValue::Undefined)
}

/// Property write. Returns false, writing nothing, if `base` has no
/// property map.
pub fn set<'a>(base: &JsValue<'a>, key: String, value: JsValue<'a>) -> bool {
    match base {
        JsValue::Object(o) => {
            o.borrow_mut().set(key, value);
            true
        }
        JsValue::Lambda(l) => {
            l.properties.borrow_mut().set(key, value);
            true
        }
        _ => false,
    }
}
