//! Function creation and the call boundary.

use std::cell::Cell;
use std::rc::Rc;

use crate::parser::ast::FunctionData;
use crate::runner::ds::function_object::Lambda;
use crate::runner::ds::lex_env::EnvRef;
use crate::runner::ds::operations::lex_env::{create_binding, new_declarative_environment};
use crate::runner::ds::value::JsValue;

use super::statement::execute_block;

/// Nesting limit for user calls. Going past it yields a RangeError value.
pub const MAX_CALL_DEPTH: usize = 10_000;

/// Minimum stack space to keep available before entering a call.
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing.
const STACK_PER_RECURSION: usize = 1024 * 1024;

thread_local! {
    static CALL_DEPTH: Cell<usize> = Cell::new(0);
}

/// Holds one level of call depth; released on drop.
struct CallDepthGuard;

impl CallDepthGuard {
    fn enter() -> Option<CallDepthGuard> {
        CALL_DEPTH.with(|depth| {
            if depth.get() >= MAX_CALL_DEPTH {
                None
            } else {
                depth.set(depth.get() + 1);
                Some(CallDepthGuard)
            }
        })
    }
}

impl Drop for CallDepthGuard {
    fn drop(&mut self) {
        CALL_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

/// Creates a lambda closing over `env`. The environment is shared, not
/// copied.
pub fn instantiate_function<'a>(
    name: Option<&'a str>,
    def: &'a FunctionData,
    env: &EnvRef<'a>,
) -> JsValue<'a> {
    JsValue::Lambda(Rc::new(Lambda::new(name, def, env.clone())))
}

/// Call a function with already evaluated arguments.
///
/// The new environment's parent is the lambda's captured environment, not the
/// caller's. Parameters bind positionally; missing arguments are undefined and
/// extra ones are dropped. A `return` inside the body stops here.
///
/// Calls nested deeper than [`MAX_CALL_DEPTH`] evaluate to a RangeError value
/// without running the body. The native stack is grown on demand below that.
pub fn call_function<'a>(lambda: &Rc<Lambda<'a>>, args: Vec<JsValue<'a>>) -> JsValue<'a> {
    tracing::trace!(
        callee = lambda.name.unwrap_or("<anonymous>"),
        args = args.len(),
        "call"
    );
    let _guard = match CallDepthGuard::enter() {
        Some(guard) => guard,
        None => {
            tracing::debug!(limit = MAX_CALL_DEPTH, "call depth exceeded");
            return JsValue::range_error("Maximum call stack size exceeded");
        }
    };
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, || {
        let def: &'a FunctionData = lambda.def;
        let local_env = new_declarative_environment(&lambda.environment);
        let mut args = args.into_iter();
        for param in lambda.params() {
            create_binding(&local_env, param, args.next().unwrap_or(JsValue::Undefined));
        }
        let completion = execute_block(&def.body, &local_env);
        if completion.is_abrupt() {
            completion.into_value()
        } else {
            JsValue::Undefined
        }
    })
}
