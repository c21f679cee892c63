//! Terminal inspector built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into layers:
//!
//! - **[`inspection`]**: runs the pipeline form by form and keeps the
//!   token range, tree and rendered text of each top-level form
//! - **[`app`]**: application state, keyboard event loop, pane focus, auto-play
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   tokens, AST, output, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with the source text
//! and call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod constants;
pub mod inspection;
pub mod panes;
pub mod theme;

pub use app::App;
