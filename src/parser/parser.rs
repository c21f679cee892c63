//! Recursive descent parser
//!
//! Turns the lexer's token stream into a [`Program`]. The grammar is tiny:
//!
//! ```text
//! program := node*
//! node    := NUMBER | '(' NAME node* ')'
//! ```
//!
//! The cursor is threaded explicitly: [`parse_node`] takes a position and
//! returns the node together with the position just past it. Recursion depth
//! equals nesting depth of the input.

use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};
use std::fmt;
use std::ops::Range;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token appeared where it cannot start a node (or name a callee).
    UnexpectedToken { token: Token },

    /// The tokens ran out inside an unfinished call expression.
    OutOfTokens {
        expected: &'static str,
        /// Location of the last token seen, if there was one.
        after: Option<SourceLocation>,
    },
}

impl ParseError {
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            ParseError::UnexpectedToken { token } => Some(token.location),
            ParseError::OutOfTokens { after, .. } => *after,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { token } => write!(
                f,
                "Parse error at line {}, column {}: unexpected {} ({} {:?})",
                token.location.line, token.location.column, token, token.kind, token.value
            ),
            ParseError::OutOfTokens { expected, .. } => {
                write!(f, "Parse error: ran out of tokens, expected {}", expected)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Top-level forms parsed before the first error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedForms {
    /// Each form with the token indices it covers, in source order
    pub forms: Vec<(Range<usize>, Node)>,
    pub error: Option<ParseError>,
}

impl ParsedForms {
    pub fn into_program(self) -> Result<Program, ParseError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(Program {
                body: self.forms.into_iter().map(|(_, node)| node).collect(),
            }),
        }
    }
}

/// Parse top-level forms until the tokens run out or a form fails.
///
/// Forms parsed before a failure are kept alongside the error.
pub fn parse_forms(tokens: &[Token]) -> ParsedForms {
    let mut parsed = ParsedForms::default();
    let mut position = 0;

    while position < tokens.len() {
        match parse_node(tokens, position) {
            Ok((node, next)) => {
                parsed.forms.push((position..next, node));
                position = next;
            }
            Err(err) => {
                parsed.error = Some(err);
                break;
            }
        }
    }

    parsed
}

/// Parse a complete token sequence into a [`Program`].
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    parse_forms(tokens).into_program()
}

/// Parse one node starting at `position`.
///
/// Returns the node and the index of the first token after it.
pub fn parse_node(tokens: &[Token], position: usize) -> Result<(Node, usize), ParseError> {
    let token = token_at(tokens, position, "a number or '('")?;

    match token.kind {
        TokenKind::Number => Ok((Node::number(token.value.clone()), position + 1)),
        TokenKind::Paren if token.is_open_paren() => parse_call(tokens, position + 1),
        TokenKind::Paren | TokenKind::Name => Err(ParseError::UnexpectedToken {
            token: token.clone(),
        }),
    }
}

/// Parse the rest of a call after its opening paren.
fn parse_call(tokens: &[Token], mut position: usize) -> Result<(Node, usize), ParseError> {
    let callee = token_at(tokens, position, "a callee name")?;
    let name = match callee.kind {
        TokenKind::Name => callee.value.clone(),
        TokenKind::Number | TokenKind::Paren => {
            return Err(ParseError::UnexpectedToken {
                token: callee.clone(),
            });
        }
    };
    position += 1;

    let mut params = Vec::new();
    while !token_at(tokens, position, "')' or a parameter")?.is_close_paren() {
        let (param, next) = parse_node(tokens, position)?;
        params.push(param);
        position = next;
    }

    // Skip the closing paren
    Ok((Node::call(name, params), position + 1))
}

fn token_at<'a>(
    tokens: &'a [Token],
    position: usize,
    expected: &'static str,
) -> Result<&'a Token, ParseError> {
    tokens.get(position).ok_or_else(|| ParseError::OutOfTokens {
        expected,
        after: tokens.last().map(|t| t.location),
    })
}

/// Recursive descent parser over an owned token sequence.
///
/// Thin wrapper around [`parse`] for callers that want to keep the tokens
/// around after parsing (the inspector shows both).
pub struct Parser {
    tokens: Vec<Token>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Parse the entire program (top-level forms)
    pub fn parse_program(&self) -> Result<Program, ParseError> {
        parse(&self.tokens)
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}
