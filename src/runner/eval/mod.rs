//! Tree-walking evaluation of the restricted AST.
//!
//! Expressions always produce a value (possibly an in-band error value).
//! Statements produce a [`Completion`], which is how `return` travels up to
//! the call boundary in `function`.

pub mod expression;
pub mod function;
pub mod statement;
pub mod types;

pub use types::Completion;
