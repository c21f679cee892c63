// AST (Abstract Syntax Tree) definitions for the S-expression compiler

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A single form: either a numeric leaf or a call with nested arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Decimal digits kept verbatim; numeric interpretation happens later, if ever.
    NumberLiteral { value: String },

    /// `(name params...)`
    CallExpression { name: String, params: Vec<Node> },
}

impl Node {
    pub fn number(value: impl Into<String>) -> Self {
        Node::NumberLiteral {
            value: value.into(),
        }
    }

    pub fn call(name: impl Into<String>, params: Vec<Node>) -> Self {
        Node::CallExpression {
            name: name.into(),
            params,
        }
    }

    /// Nesting depth of this node: literals are 0, a call is one more than
    /// its deepest parameter.
    pub fn depth(&self) -> usize {
        match self {
            Node::NumberLiteral { .. } => 0,
            Node::CallExpression { params, .. } => {
                1 + params.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Root of the tree; one per compilation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub body: Vec<Node>,
}

impl Program {
    pub fn new() -> Self {
        Program { body: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth() {
        assert_eq!(Node::number("7").depth(), 0);
        assert_eq!(Node::call("f", vec![]).depth(), 1);

        let nested = Node::call(
            "add",
            vec![
                Node::call("subtract", vec![Node::number("5"), Node::number("1")]),
                Node::number("2"),
            ],
        );
        assert_eq!(nested.depth(), 2);
    }

    #[test]
    fn test_empty_program() {
        let program = Program::new();
        assert!(program.is_empty());
        assert_eq!(program, Program::default());
    }
}
