//! Helpers shared by the pane renderers

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border colour reflects focus.
pub(crate) fn pane_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rows available inside a bordered pane, min 1.
pub(crate) fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp a scroll offset to the content.
///
/// An offset of `usize::MAX` means "re-anchor": it is replaced by a position
/// that puts `anchor` a third of the way down the pane.
pub(crate) fn clamp_scroll(scroll: &mut usize, total: usize, visible: usize, anchor: Option<usize>) {
    if *scroll == usize::MAX {
        *scroll = anchor.map_or(0, |row| row.saturating_sub(visible / 3));
    }

    if total > visible {
        *scroll = (*scroll).min(total - visible);
    } else {
        *scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut scroll = 50;
        clamp_scroll(&mut scroll, 20, 10, None);
        assert_eq!(scroll, 10);

        let mut scroll = 3;
        clamp_scroll(&mut scroll, 5, 10, None);
        assert_eq!(scroll, 0);

        let mut scroll = usize::MAX;
        clamp_scroll(&mut scroll, 100, 30, Some(40));
        assert_eq!(scroll, 30);

        let mut scroll = usize::MAX;
        clamp_scroll(&mut scroll, 100, 30, None);
        assert_eq!(scroll, 0);
    }
}
