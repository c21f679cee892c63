//! TUI pane rendering modules
//!
//! Each pane is a stateless render function that takes the data to show,
//! whether it has focus, and a mutable scroll offset it clamps in place.
//!
//! # Pane Modules
//!
//! - [`source`]: Source text with highlighting and the selected form marked
//! - [`tokens`]: The lexer's token stream with kinds and locations
//! - [`ast`]: Tree view of the selected form
//! - [`output`]: Rendered C-style lines and any compile error
//! - [`status`]: Status bar with keybindings and navigation state
//! - `utils`: Shared block, scroll and layout helpers

mod utils;

pub mod ast;
pub mod output;
pub mod source;
pub mod status;
pub mod tokens;

pub use ast::render_ast_pane;
pub use output::render_output_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
