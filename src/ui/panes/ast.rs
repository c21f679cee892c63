//! AST pane rendering
//!
//! Draws the selected form as a tree with box-drawing connectors:
//!
//! ```text
//! add
//! ├─ subtract
//! │  ├─ 5
//! │  └─ 1
//! └─ 2
//! ```

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::parser::ast::Node;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn node_span(node: &Node) -> Span<'static> {
    match node {
        Node::NumberLiteral { value } => {
            Span::styled(value.clone(), Style::default().fg(DEFAULT_THEME.number))
        }
        Node::CallExpression { name, params } => Span::styled(
            format!("{} /{}", name, params.len()),
            Style::default()
                .fg(DEFAULT_THEME.name)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn push_children(lines: &mut Vec<Line<'static>>, params: &[Node], prefix: &str) {
    for (i, child) in params.iter().enumerate() {
        let is_last = i + 1 == params.len();
        let connector = if is_last { "└─ " } else { "├─ " };

        lines.push(Line::from(vec![
            Span::styled(
                format!("{}{}", prefix, connector),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            node_span(child),
        ]));

        if let Node::CallExpression { params, .. } = child {
            let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
            push_children(lines, params, &child_prefix);
        }
    }
}

/// Tree lines for one form.
pub(crate) fn tree_lines(node: &Node) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(node_span(node))];
    if let Node::CallExpression { params, .. } = node {
        push_children(&mut lines, params, "");
    }
    lines
}

/// Render the AST of the selected form
pub fn render_ast_pane(
    frame: &mut Frame,
    area: Rect,
    node: Option<&Node>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match node {
        Some(node) => format!(" AST (depth {}) ", node.depth()),
        None => " AST ".to_string(),
    };
    let block = pane_block(title, is_focused);

    let Some(node) = node else {
        let paragraph = Paragraph::new("(no form selected)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let lines = tree_lines(node);
    let visible = visible_height(area);
    clamp_scroll(scroll_offset, lines.len(), visible, None);

    let visible_lines: Vec<Line> = lines.into_iter().skip(*scroll_offset).take(visible).collect();
    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_tree_lines() {
        let node = Node::call(
            "add",
            vec![
                Node::call("subtract", vec![Node::number("5"), Node::number("1")]),
                Node::number("2"),
            ],
        );

        assert_eq!(
            plain(&tree_lines(&node)),
            vec![
                "add /2",
                "├─ subtract /2",
                "│  ├─ 5",
                "│  └─ 1",
                "└─ 2",
            ]
        );
    }
}
