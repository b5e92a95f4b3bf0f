use thiserror::Error;

use super::api::Rule;

/// A construction-time failure. Lowering stops at the first one; there is no
/// partial result.
#[derive(Debug, Error)]
pub enum LowerError {
    #[error("Parse error: {0}")]
    Syntax(Box<pest::error::Error<Rule>>),

    #[error("Unknown node {kind}: {text}")]
    UnsupportedConstruct { kind: String, text: String },

    #[error("Unknown binary operator token {token}")]
    UnknownOperator { token: String },

    #[error("Illegal return statement outside of a function body: {text}")]
    ReturnOutsideFunction { text: String },

    #[error("Invalid {kind}: {text}")]
    InvalidLiteral { kind: String, text: String },
}

impl From<pest::error::Error<Rule>> for LowerError {
    fn from(e: pest::error::Error<Rule>) -> Self {
        LowerError::Syntax(Box::new(e))
    }
}
