//! The restricted AST the interpreter runs.
//!
//! Nodes are plain owned data: every node belongs to exactly one parent and
//! the runtime only ever borrows them, so nothing evaluated can outlive the
//! [`ProgramData`] it came from.

/// Result of lowering a whole script: its top-level statements, in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgramData {
    pub body: Vec<StatementType>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementType {
    FunctionDeclaration {
        name: String,
        function: FunctionData,
    },
    VariableDeclaration(VariableDeclarationData),
    IfStatement {
        test: Box<ExpressionType>,
        consequent: Box<StatementType>,
        /// Either a plain statement or a nested `IfStatement` for `else if`.
        alternate: Option<Box<StatementType>>,
    },
    ReturnStatement {
        argument: Option<Box<ExpressionType>>,
    },
    BlockStatement(BlockStatementData),
    /// Any expression may stand where a statement is expected.
    ExpressionStatement(ExpressionType),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarationData {
    pub name: String,
    pub init: Box<ExpressionType>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatementData {
    pub body: Vec<StatementType>,
}

/// Parameters and body shared by declarations and function expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionData {
    pub params: Vec<String>,
    pub body: BlockStatementData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionType {
    Literal(LiteralType),
    /// Name/initializer pairs in source order; a later duplicate key wins.
    ObjectExpression {
        properties: Vec<(String, ExpressionType)>,
    },
    Identifier(String),
    /// Covers both `object.name` (the key is a string literal) and
    /// `object[key]`.
    MemberExpression {
        object: Box<ExpressionType>,
        property: Box<ExpressionType>,
    },
    FunctionExpression {
        name: Option<String>,
        function: FunctionData,
    },
    CallExpression {
        callee: Box<ExpressionType>,
        arguments: Vec<ExpressionType>,
    },
    BinaryExpression {
        operator: BinaryOperator,
        left: Box<ExpressionType>,
        right: Box<ExpressionType>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralType {
    NumberLiteral(f64),
    StringLiteral(String),
    BooleanLiteral(bool),
    UndefinedLiteral,
    NullLiteral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    LessThan,
    Assign,
    LooseEquals,
    StrictEquals,
}

impl BinaryOperator {
    /// The source token this operator is written as.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::LessThan => "<",
            BinaryOperator::Assign => "=",
            BinaryOperator::LooseEquals => "==",
            BinaryOperator::StrictEquals => "===",
        }
    }
}
