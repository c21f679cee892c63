//! S-expression front end
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parser`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! Nested prefix calls over unsigned decimal literals:
//!
//! ```text
//! (add (subtract 5 1) 2)
//! ```
//!
//! Names are ASCII letters only, numbers are ASCII digits only. There are no
//! strings, operators, comments or keywords.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with an explicitly threaded cursor.
//! No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{Node, Program, SourceLocation};
pub use lexer::{tokenize, LexError, Lexer, Token, TokenKind};
pub use parser::{parse, parse_forms, parse_node, ParseError, ParsedForms, Parser};
