//! Generated output pane rendering

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::ui::inspection::Inspection;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the C-style output, one line per form, followed by any error
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    inspection: &Inspection,
    selected_form: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(format!(" Output ({}) ", inspection.stats), is_focused);

    let mut lines: Vec<Line> = inspection
        .forms
        .iter()
        .enumerate()
        .map(|(idx, form)| {
            if idx == selected_form {
                Line::from(vec![
                    Span::styled("▶ ", Style::default().fg(DEFAULT_THEME.border_focused)),
                    Span::styled(
                        form.rendered.clone(),
                        Style::default()
                            .fg(DEFAULT_THEME.fg)
                            .bg(DEFAULT_THEME.selection_bg)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(form.rendered.clone(), Style::default().fg(DEFAULT_THEME.fg)),
                ])
            }
        })
        .collect();

    if let Some(err) = &inspection.error {
        lines.push(Line::from(Span::styled(
            format!("error: {}", err),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )));
    }

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible = visible_height(area);
    clamp_scroll(scroll_offset, lines.len(), visible, Some(selected_form));

    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible)
        .map(ListItem::new)
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
