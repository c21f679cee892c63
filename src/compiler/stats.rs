//! Program statistics shown by `--stats` and the inspector output pane

use crate::parser::ast::{Node, Program};
use rustc_hash::FxHashMap;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramStats {
    /// Top-level forms
    pub forms: usize,
    pub calls: usize,
    pub literals: usize,
    pub max_depth: usize,
    /// Call count per callee name
    pub callees: FxHashMap<String, usize>,
}

impl ProgramStats {
    pub fn collect(program: &Program) -> Self {
        let mut stats = ProgramStats {
            forms: program.body.len(),
            ..Default::default()
        };
        for node in &program.body {
            stats.visit(node);
            stats.max_depth = stats.max_depth.max(node.depth());
        }
        stats
    }

    fn visit(&mut self, node: &Node) {
        match node {
            Node::NumberLiteral { .. } => self.literals += 1,
            Node::CallExpression { name, params } => {
                self.calls += 1;
                *self.callees.entry(name.clone()).or_insert(0) += 1;
                for param in params {
                    self.visit(param);
                }
            }
        }
    }

    /// Callees ordered by call count (highest first), ties by name.
    pub fn sorted_callees(&self) -> Vec<(&str, usize)> {
        let mut callees: Vec<(&str, usize)> = self
            .callees
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        callees.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        callees
    }
}

impl fmt::Display for ProgramStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} forms, {} calls, {} literals, max depth {}",
            self.forms, self.calls, self.literals, self.max_depth
        )?;
        let callees = self.sorted_callees();
        if !callees.is_empty() {
            let parts: Vec<String> = callees
                .iter()
                .map(|(name, count)| format!("{}: {}", name, count))
                .collect();
            write!(f, " ({})", parts.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_nested() {
        let program = Program {
            body: vec![Node::call(
                "add",
                vec![
                    Node::call("subtract", vec![Node::number("5"), Node::number("1")]),
                    Node::number("2"),
                ],
            )],
        };
        let stats = ProgramStats::collect(&program);

        assert_eq!(stats.forms, 1);
        assert_eq!(stats.calls, 2);
        assert_eq!(stats.literals, 3);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.sorted_callees(), vec![("add", 1), ("subtract", 1)]);
        assert_eq!(
            stats.to_string(),
            "1 forms, 2 calls, 3 literals, max depth 2 (add: 1, subtract: 1)"
        );
    }

    #[test]
    fn test_callee_ordering() {
        let program = Program {
            body: vec![
                Node::call("mul", vec![]),
                Node::call("add", vec![Node::call("add", vec![])]),
                Node::number("3"),
            ],
        };
        let stats = ProgramStats::collect(&program);
        assert_eq!(stats.sorted_callees(), vec![("add", 2), ("mul", 1)]);
        assert_eq!(stats.literals, 1);
    }

    #[test]
    fn test_empty_program() {
        let stats = ProgramStats::collect(&Program::new());
        assert_eq!(stats, ProgramStats::default());
        assert_eq!(stats.to_string(), "0 forms, 0 calls, 0 literals, max depth 0");
    }
}
