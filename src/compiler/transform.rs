//! Tree-to-tree transformation stage
//!
//! A [`Transformer`] runs an ordered list of [`Pass`]es over the program.
//! With no passes registered it is the identity, which is what the default
//! pipeline uses.

use crate::parser::ast::Program;

/// A whole-program rewrite.
pub trait Pass: Send + Sync {
    fn name(&self) -> &str;

    fn run(&self, program: Program) -> Program;
}

/// Ordered collection of passes
#[derive(Default)]
pub struct Transformer {
    passes: Vec<Box<dyn Pass>>,
}

impl Transformer {
    pub fn new() -> Self {
        Transformer { passes: Vec::new() }
    }

    pub fn add_pass(&mut self, pass: Box<dyn Pass>) {
        self.passes.push(pass);
    }

    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    pub fn transform(&self, program: Program) -> Program {
        self.passes
            .iter()
            .fold(program, |program, pass| pass.run(program))
    }
}

/// Identity transform used by the default pipeline.
pub fn transform(program: Program) -> Program {
    program
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::Node;

    fn sample() -> Program {
        Program {
            body: vec![
                Node::call(
                    "add",
                    vec![
                        Node::call("subtract", vec![Node::number("5"), Node::number("1")]),
                        Node::number("2"),
                    ],
                ),
                Node::number("9"),
            ],
        }
    }

    #[test]
    fn test_identity_is_idempotent() {
        let once = transform(sample());
        assert_eq!(once, sample());
        assert_eq!(transform(once.clone()), once);
    }

    #[test]
    fn test_empty_transformer_is_identity() {
        let transformer = Transformer::new();
        assert!(transformer.pass_names().is_empty());
        assert_eq!(transformer.transform(sample()), sample());
    }

    struct Rename {
        from: &'static str,
        to: &'static str,
    }

    impl Rename {
        fn rename(&self, node: Node) -> Node {
            match node {
                Node::CallExpression { name, params } => {
                    let name = if name == self.from {
                        self.to.to_string()
                    } else {
                        name
                    };
                    Node::CallExpression {
                        name,
                        params: params.into_iter().map(|p| self.rename(p)).collect(),
                    }
                }
                literal @ Node::NumberLiteral { .. } => literal,
            }
        }
    }

    impl Pass for Rename {
        fn name(&self) -> &str {
            "rename"
        }

        fn run(&self, program: Program) -> Program {
            Program {
                body: program.body.into_iter().map(|n| self.rename(n)).collect(),
            }
        }
    }

    #[test]
    fn test_passes_run_in_order() {
        let mut transformer = Transformer::new();
        transformer.add_pass(Box::new(Rename {
            from: "subtract",
            to: "sub",
        }));
        transformer.add_pass(Box::new(Rename {
            from: "sub",
            to: "minus",
        }));

        assert_eq!(transformer.pass_names(), vec!["rename", "rename"]);

        let program = transformer.transform(sample());
        match &program.body[0] {
            Node::CallExpression { params, .. } => {
                assert!(matches!(&params[0], Node::CallExpression { name, .. } if name == "minus"));
            }
            other => panic!("Expected call expression, got {:?}", other),
        }
    }
}
