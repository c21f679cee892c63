//! Token stream pane rendering

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::parser::lexer::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};
use std::ops::Range;

fn kind_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Paren => Style::default().fg(DEFAULT_THEME.paren),
        TokenKind::Number => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::Name => Style::default().fg(DEFAULT_THEME.name),
    }
}

/// Render the token list, highlighting the tokens of the selected form
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    selected: Option<Range<usize>>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(format!(" Tokens ({}) ", tokens.len()), is_focused);

    if tokens.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible = visible_height(area);
    clamp_scroll(
        scroll_offset,
        tokens.len(),
        visible,
        selected.as_ref().map(|r| r.start),
    );

    let items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible)
        .map(|(idx, token)| {
            let in_form = selected.as_ref().is_some_and(|r| r.contains(&idx));
            let row_style = if in_form {
                Style::default().bg(DEFAULT_THEME.selection_bg)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{:>4}  ", idx),
                    row_style.fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:<7}", token.kind.to_string()),
                    row_style.add_modifier(Modifier::DIM),
                ),
                Span::styled(format!("{:<12}", token.value), row_style.patch(kind_style(token.kind))),
                Span::styled(
                    format!("{}:{}", token.location.line, token.location.column),
                    row_style.fg(DEFAULT_THEME.comment),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
