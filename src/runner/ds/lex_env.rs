use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::runner::ds::value::JsValue;

/// Shared handle to an environment. Closures keep their defining
/// environment alive through it.
pub type EnvRef<'a> = Rc<RefCell<LexEnvironment<'a>>>;

pub struct LexEnvironment<'a> {
    pub bindings: HashMap<String, JsValue<'a>>,
    pub outer: Option<EnvRef<'a>>,
}

impl<'a> LexEnvironment<'a> {
    pub fn new(outer: Option<EnvRef<'a>>) -> Self {
        LexEnvironment {
            bindings: HashMap::new(),
            outer,
        }
    }

    pub fn has_binding(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }
}
