use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::runner::ds::value::JsValue;

pub type JsObjectType<'a> = Rc<RefCell<JsObject<'a>>>;

/// A string-keyed property map. Plain objects are one of these; lambdas
/// carry one for their own properties.
#[derive(Default)]
pub struct JsObject<'a> {
    properties: HashMap<String, JsValue<'a>>,
}

impl<'a> JsObject<'a> {
    pub fn new() -> Self {
        JsObject {
            properties: HashMap::new(),
        }
    }

    pub fn new_ref() -> JsObjectType<'a> {
        Rc::new(RefCell::new(JsObject::new()))
    }

    pub fn get(&self, key: &str) -> Option<&JsValue<'a>> {
        self.properties.get(key)
    }

    pub fn set(&mut self, key: String, value: JsValue<'a>) {
        self.properties.insert(key, value);
    }
}
