use std::cell::RefCell;
use std::rc::Rc;

use crate::runner::ds::lex_env::{EnvRef, LexEnvironment};
use crate::runner::ds::value::JsValue;

pub fn new_global_environment<'a>() -> EnvRef<'a> {
    Rc::new(RefCell::new(LexEnvironment::new(None)))
}

pub fn new_declarative_environment<'a>(outer_lex: &EnvRef<'a>) -> EnvRef<'a> {
    Rc::new(RefCell::new(LexEnvironment::new(Some(outer_lex.clone()))))
}

/// Finds the nearest environment in the chain that binds `name`.
pub fn resolve_binding<'a>(lex: &EnvRef<'a>, name: &str) -> Option<EnvRef<'a>> {
    let mut current = Some(lex.clone());
    while let Some(env) = current {
        if env.borrow().has_binding(name) {
            return Some(env);
        }
        current = env.borrow().outer.clone();
    }
    None
}

/// Value of `name`, or a ReferenceError value when nothing in the chain binds
/// it.
pub fn get_binding_value<'a>(lex: &EnvRef<'a>, name: &str) -> JsValue<'a> {
    match resolve_binding(lex, name) {
        Some(env) => env
            .borrow()
            .bindings
            .get(name)
            .cloned()
            .unwrap_or(JsValue::Undefined),
        None => {
            tracing::debug!(name, "unresolved identifier");
            JsValue::reference_error(format!("{} is not defined", name))
        }
    }
}

/// Binds `name` in `lex` itself, replacing any earlier binding there.
pub fn create_binding<'a>(lex: &EnvRef<'a>, name: &str, value: JsValue<'a>) {
    lex.borrow_mut().bindings.insert(name.to_string(), value);
}

/// Assignment to a plain name: an existing binding anywhere in the chain is
/// overwritten in place, otherwise a new one goes into `lex`.
pub fn set_mutable_binding<'a>(lex: &EnvRef<'a>, name: &str, value: JsValue<'a>) {
    let target = resolve_binding(lex, name).unwrap_or_else(|| lex.clone());
    create_binding(&target, name, value);
}
