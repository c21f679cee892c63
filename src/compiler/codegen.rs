//! Code generation stage
//!
//! [`generate`] is the pipeline's final stage and hands the tree through
//! unchanged. [`render`] produces the C-style text: one line per top-level
//! form, a literal as its digits and a call as `name(arg, arg, ...)`.

use crate::parser::ast::{Node, Program};

/// Identity generation stage.
pub fn generate(program: Program) -> Program {
    program
}

/// Render a whole program, one line per top-level form.
pub fn render(program: &Program) -> String {
    render_lines(program).join("\n")
}

pub fn render_lines(program: &Program) -> Vec<String> {
    program.body.iter().map(render_node).collect()
}

/// Render a single form as a C-style expression.
pub fn render_node(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::NumberLiteral { value } => out.push_str(value),
        Node::CallExpression { name, params } => {
            out.push_str(name);
            out.push('(');
            for (i, param) in params.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_node(out, param);
            }
            out.push(')');
        }
    }
}

/// Indented tree dump of the AST, as printed by `--ast`.
pub fn dump_tree(program: &Program) -> Vec<String> {
    let mut lines = vec![format!("Program ({} forms)", program.body.len())];
    for node in &program.body {
        dump_node(&mut lines, node, 1);
    }
    lines
}

fn dump_node(lines: &mut Vec<String>, node: &Node, indent: usize) {
    let pad = "  ".repeat(indent);
    match node {
        Node::NumberLiteral { value } => lines.push(format!("{}NumberLiteral {}", pad, value)),
        Node::CallExpression { name, params } => {
            lines.push(format!(
                "{}CallExpression {} ({} params)",
                pad,
                name,
                params.len()
            ));
            for param in params {
                dump_node(lines, param, indent + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested() {
        let node = Node::call(
            "add",
            vec![
                Node::call("subtract", vec![Node::number("5"), Node::number("1")]),
                Node::number("2"),
            ],
        );
        assert_eq!(render_node(&node), "add(subtract(5, 1), 2)");
    }

    #[test]
    fn test_render_zero_args_and_literal() {
        let program = Program {
            body: vec![Node::call("now", vec![]), Node::number("42")],
        };
        assert_eq!(render(&program), "now()\n42");
        assert_eq!(render(&Program::new()), "");
    }

    #[test]
    fn test_generate_is_identity() {
        let program = Program {
            body: vec![Node::call("f", vec![Node::number("1")])],
        };
        let once = generate(program.clone());
        assert_eq!(once, program);
        assert_eq!(generate(once.clone()), once);
    }

    #[test]
    fn test_dump_tree() {
        let program = Program {
            body: vec![Node::call("add", vec![Node::number("2"), Node::number("3")])],
        };
        assert_eq!(
            dump_tree(&program),
            vec![
                "Program (1 forms)",
                "  CallExpression add (2 params)",
                "    NumberLiteral 2",
                "    NumberLiteral 3",
            ]
        );
    }
}
