//! Compile error type
//!
//! [`CompileError`] wraps the error of whichever stage failed. Every error is
//! fatal: the pipeline stops at the first one and produces no partial output.

use crate::parser::ast::SourceLocation;
use crate::parser::lexer::LexError;
use crate::parser::parser::ParseError;
use std::fmt;

/// Errors that can abort a compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Tokenizing failed
    Lex(LexError),

    /// Parsing failed
    Parse(ParseError),
}

impl CompileError {
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            CompileError::Lex(err) => Some(err.location()),
            CompileError::Parse(err) => err.location(),
        }
    }

    /// Name of the stage that failed, for status lines.
    pub fn stage(&self) -> &'static str {
        match self {
            CompileError::Lex(_) => "lexer",
            CompileError::Parse(_) => "parser",
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Lex(err) => write!(f, "{}", err),
            CompileError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Lex(err) => Some(err),
            CompileError::Parse(err) => Some(err),
        }
    }
}

impl From<LexError> for CompileError {
    fn from(err: LexError) -> Self {
        CompileError::Lex(err)
    }
}

impl From<ParseError> for CompileError {
    fn from(err: ParseError) -> Self {
        CompileError::Parse(err)
    }
}
