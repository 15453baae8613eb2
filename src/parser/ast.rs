// AST (Abstract Syntax Tree) definitions for the glint front end

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// AST nodes representing statements and expressions.
///
/// One closed enum covers both because the grammar lets some forms appear in
/// either position: a [`Node::FunctionCall`] is usable as a statement and as
/// an expression, and a bare `return;` wraps [`Node::EmptyStatement`] as its
/// value. Every node exclusively owns its children through `Box`/`Vec`, so
/// the result is a strict tree with no cycles or shared ownership.
///
/// Operator and type names are stored as the literal token text; there is no
/// later pass that would benefit from interning them.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    EmptyStatement,
    VariableDeclaration {
        /// Literal text of the declaring token (`let`, `var`, `const`, or a
        /// type-position name such as `int32`).
        qualifier: String,
        name: String,
        value: Box<Node>,
    },
    FunctionDeclaration {
        return_type: String,
        name: String,
        param_types: Vec<String>,
        param_names: Vec<String>,
        body: Box<Node>,
    },
    VariableAssignment {
        name: String,
        value: Box<Node>,
    },
    ScopeDeclaration {
        statements: Vec<Node>,
    },
    ConditionalStatement {
        condition: Box<Node>,
        on_true: Box<Node>,
        on_false: Option<Box<Node>>,
    },
    WhileLoopStatement {
        condition: Box<Node>,
        body: Box<Node>,
    },
    ReturnStatement {
        /// `EmptyStatement` for a bare `return;`.
        value: Box<Node>,
    },
    FunctionCall {
        name: String,
        args: Vec<Node>,
    },
    BinaryOperation {
        left: Box<Node>,
        op: String,
        right: Box<Node>,
    },
    UnaryOperation {
        op: String,
        operand: Box<Node>,
    },
    CastOperation {
        operand: Box<Node>,
        target_type: String,
    },
    IntegerLiteral(String),
    FloatLiteral(String),
    BooleanLiteral(bool),
    StringLiteral(String),
    VariableCall(String),
}
