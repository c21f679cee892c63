//! # Introduction
//!
//! lispc compiles Lisp-style prefix calls into C-style call expressions:
//!
//! ```text
//! (add (subtract 5 1) 2)   ->   add(subtract(5, 1), 2)
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → Transformer → Code Generator
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds the AST.
//! 2. [`compiler`]: runs the stages in order, the transformer and generator
//!    being identity passes, and renders the tree as C-style text.
//! 3. [`ui`]: ratatui-based inspector; not part of the stable library API.
//!
//! ## Language
//!
//! Unsigned decimal literals and parenthesised calls whose first element is
//! an ASCII-letter name. Anything else is rejected with the offending
//! character or token.
//!
//! ```
//! assert_eq!(lispc::compiler::compile("(add 2 3)").unwrap(), "add(2, 3)");
//! ```

pub mod compiler;
pub mod parser;
pub mod ui;
