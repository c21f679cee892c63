//! Source code pane rendering with syntax highlighting
//!
//! Displays the program being inspected with line numbers. Lines belonging
//! to the selected top-level form are highlighted and marked with an arrow.
//! When compilation failed at a known location, a caret is drawn under the
//! offending column.

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::parser::ast::SourceLocation;
use crate::ui::inspection::FormView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the `▶ 1234 ` gutter
const GUTTER_WIDTH: usize = 7;

/// Split a line into styled runs using the lexer's character classes.
///
/// Characters the lexer would reject are shown in the error colour.
fn highlight_source_code(line: &str, bg: Option<Color>) -> Vec<Span<'static>> {
    let base = match bg {
        Some(bg) => Style::default().bg(bg),
        None => Style::default(),
    };

    let mut spans = Vec::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let start = i;

        let style = if c == '(' || c == ')' {
            i += 1;
            base.fg(DEFAULT_THEME.paren)
        } else if c.is_whitespace() {
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }
            base
        } else if c.is_ascii_digit() {
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            base.fg(DEFAULT_THEME.number)
        } else if c.is_ascii_alphabetic() {
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            base.fg(DEFAULT_THEME.name)
        } else {
            i += 1;
            base.fg(DEFAULT_THEME.error).add_modifier(Modifier::BOLD)
        };

        spans.push(Span::styled(chars[start..i].iter().collect::<String>(), style));
    }

    spans
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source: &str,
    selected: Option<&FormView>,
    error_location: Option<SourceLocation>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Source ".to_string(), is_focused);

    let mut lines: Vec<Line> = Vec::new();
    let mut anchor = None;

    for (idx, text) in source.lines().enumerate() {
        let line_no = idx + 1;
        let in_form = selected.is_some_and(|form| form.covers_line(line_no));
        let is_error_line = error_location.is_some_and(|loc| loc.line == line_no);

        if in_form && anchor.is_none() {
            anchor = Some(lines.len());
        }

        let bg = in_form.then_some(DEFAULT_THEME.selection_bg);
        let gutter_style = if is_error_line {
            Style::default().fg(DEFAULT_THEME.error).add_modifier(Modifier::BOLD)
        } else if in_form {
            Style::default().fg(DEFAULT_THEME.border_focused)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };

        let marker = if in_form { "▶" } else { " " };
        let mut spans = vec![Span::styled(format!("{} {:>4} ", marker, line_no), gutter_style)];
        spans.extend(highlight_source_code(text, bg));
        lines.push(Line::from(spans));

        if let Some(loc) = error_location.filter(|_| is_error_line) {
            let pad = " ".repeat(GUTTER_WIDTH + loc.column.saturating_sub(1));
            lines.push(Line::from(Span::styled(
                format!("{}^", pad),
                Style::default().fg(DEFAULT_THEME.error).add_modifier(Modifier::BOLD),
            )));
        }
    }

    if lines.is_empty() {
        let paragraph = Paragraph::new("(empty source)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible = visible_height(area);
    clamp_scroll(scroll_offset, lines.len(), visible, anchor);

    let visible_lines: Vec<Line> = lines.into_iter().skip(*scroll_offset).take(visible).collect();

    let paragraph = Paragraph::new(visible_lines)
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.fg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[Span]) -> Vec<String> {
        spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_highlight_runs() {
        let spans = highlight_source_code("(add 12 x9)", None);
        assert_eq!(
            texts(&spans),
            vec!["(", "add", " ", "12", " ", "x", "9", ")"]
        );
    }

    #[test]
    fn test_highlight_marks_bad_characters() {
        let spans = highlight_source_code("(a @)", None);
        assert_eq!(spans[3].content, "@");
        assert_eq!(spans[3].style.fg, Some(DEFAULT_THEME.error));
    }
}
