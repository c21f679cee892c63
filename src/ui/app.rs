//! Main TUI application state and logic

use crate::ui::constants::{EVENT_POLL_MS, PLAY_INTERVAL_MS, SPACE_DEBOUNCE_MS};
use crate::ui::inspection::Inspection;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Ast,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> output -> tokens -> ast)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Ast,
            FocusedPane::Ast => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Ast,
            FocusedPane::Output => FocusedPane::Source,
            FocusedPane::Tokens => FocusedPane::Output,
            FocusedPane::Ast => FocusedPane::Tokens,
        }
    }
}

/// The main application state
pub struct App {
    /// Pipeline results for the source being inspected
    pub inspection: Inspection,

    /// The source code being inspected
    pub source_code: String,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index of the selected top-level form
    pub selected_form: usize,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub tokens_scroll: usize,
    pub ast_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a form was advanced in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app for the given source code
    pub fn new(source_code: String) -> Self {
        let inspection = Inspection::build(&source_code);
        let status_message = match &inspection.error {
            Some(err) => format!("{} error: {}", err.stage(), err),
            None => String::from("Ready!"),
        };

        App {
            inspection,
            source_code,
            focused_pane: FocusedPane::Source,
            selected_form: 0,
            source_scroll: 0,
            tokens_scroll: 0,
            ast_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message,
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    pub fn form_count(&self) -> usize {
        self.inspection.forms.len()
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_millis(PLAY_INTERVAL_MS) {
                if self.select_next() {
                    self.status_message = "Playing...".to_string();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub(crate) fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Source (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Tokens (top) | AST (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[1]);

        let selected = self.inspection.forms.get(self.selected_form);

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            selected,
            self.inspection.error.as_ref().and_then(|e| e.location()),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_output_pane(
            frame,
            left_rows[1],
            &self.inspection,
            self.selected_form,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            right_rows[0],
            &self.inspection.tokens,
            selected.map(|f| f.tokens.clone()),
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_ast_pane(
            frame,
            right_rows[1],
            selected.map(|f| &f.node),
            self.focused_pane == FocusedPane::Ast,
            &mut self.ast_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.selected_form,
            self.form_count(),
            &self.inspection,
            self.is_playing,
        );
    }

    /// Handle keyboard events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.is_playing = false;
                if self.select_prev() {
                    self.status_message = "Previous form".to_string();
                } else {
                    self.status_message = "Already at first form".to_string();
                }
            }
            KeyCode::Right => {
                self.is_playing = false;
                if self.select_next() {
                    self.status_message = "Next form".to_string();
                } else {
                    self.status_message = "Already at last form".to_string();
                }
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (debounced to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(SPACE_DEBOUNCE_MS) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now();
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter | KeyCode::End => {
                self.is_playing = false;
                self.select(self.form_count().saturating_sub(1));
                self.status_message = "Jumped to last form".to_string();
            }
            KeyCode::Backspace | KeyCode::Home => {
                self.is_playing = false;
                self.select(0);
                self.status_message = "Jumped to first form".to_string();
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Tokens => &mut self.tokens_scroll,
            FocusedPane::Ast => &mut self.ast_scroll,
            FocusedPane::Output => &mut self.output_scroll,
        }
    }

    fn select(&mut self, index: usize) {
        self.selected_form = index;
        // Panes re-anchor on the new selection
        self.source_scroll = usize::MAX;
        self.tokens_scroll = usize::MAX;
        self.output_scroll = usize::MAX;
        self.ast_scroll = 0;
    }

    fn select_next(&mut self) -> bool {
        if self.selected_form + 1 < self.form_count() {
            self.select(self.selected_form + 1);
            true
        } else {
            false
        }
    }

    fn select_prev(&mut self) -> bool {
        if self.selected_form > 0 {
            self.select(self.selected_form - 1);
            true
        } else {
            false
        }
    }
}
