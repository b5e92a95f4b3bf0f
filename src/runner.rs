//! Runtime: values, environments and the tree-walking evaluator.

pub mod api;
pub mod ds;
pub mod eval;
