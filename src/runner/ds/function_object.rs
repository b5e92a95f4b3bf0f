use std::cell::RefCell;

use crate::parser::ast::FunctionData;
use crate::runner::ds::lex_env::EnvRef;
use crate::runner::ds::object::JsObject;

/// A function value: the code it runs plus the environment it was created
/// in. The environment is shared, never copied, so later writes to captured
/// variables are visible to the lambda.
pub struct Lambda<'a> {
    pub name: Option<&'a str>,
    pub def: &'a FunctionData,
    pub environment: EnvRef<'a>,
    /// Functions are objects too; properties may be attached to them.
    pub properties: RefCell<JsObject<'a>>,
}

impl<'a> Lambda<'a> {
    pub fn new(name: Option<&'a str>, def: &'a FunctionData, environment: EnvRef<'a>) -> Self {
        Lambda {
            name,
            def,
            environment,
            properties: RefCell::new(JsObject::new()),
        }
    }

    pub fn params(&self) -> &'a [String] {
        &self.def.params
    }
}
