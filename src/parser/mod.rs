mod api;
pub mod ast;
mod error;
mod lower;

pub use api::{parse_to_ast, parse_to_pairs, parse_to_token_tree, JsParser, Rule};
pub use error::LowerError;
