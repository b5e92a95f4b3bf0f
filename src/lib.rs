//! # justlite - a tiny JavaScript-subset interpreter
//!
//! Scripts go through three stages:
//! - a PEG front end ([`parser::JsParser`]) producing a full parse tree,
//! - lowering of that tree into a small restricted AST ([`parser::ast`]),
//!   rejecting anything the interpreter does not support,
//! - a tree-walking evaluator ([`runner::eval`]) over chained, shared
//!   environments with lexical closures.
//!
//! Runtime faults such as calling a non-function or reading an unknown name
//! never abort evaluation. They produce `JsValue::Error` values that flow on
//! like any other value.
//!
//! ## Quick Start
//!
//! ```
//! use justlite::runner::api::run_script;
//!
//! let code = "
//!     function fib(n) {
//!         if (n < 2) { return n; }
//!         return fib(n - 1) + fib(n - 2);
//!     }
//!     fib(7);
//! ";
//! let outcome = run_script(code).unwrap();
//! assert_eq!(outcome.display, "13");
//! assert_eq!(outcome.type_name, "number");
//! ```
//!
//! ### Inspecting bindings after a run
//!
//! ```
//! use justlite::parser::JsParser;
//! use justlite::runner::api::execute_in;
//! use justlite::runner::ds::operations::lex_env::{get_binding_value, new_global_environment};
//! use justlite::runner::ds::value::JsValue;
//!
//! let ast = JsParser::parse_to_ast_from_str("var x = 5 + 3;").unwrap();
//! let env = new_global_environment();
//! execute_in(&ast.body, &env);
//! assert_eq!(get_binding_value(&env, "x"), JsValue::Number(8.0));
//! ```
//!
//! ## Architecture
//!
//! - **[`parser`]** - PEG grammar, lowering stage and AST types
//! - **[`runner`]** - Runtime
//!   - **[`runner::ds`]** - Data structures (values, objects, environments)
//!   - **[`runner::eval`]** - Tree-walking interpreter
//!   - **[`runner::api`]** - Program boundary

#[macro_use]
extern crate lazy_static;

pub mod parser;
pub mod runner;
