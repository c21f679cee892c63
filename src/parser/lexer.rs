//! Lexer (tokenizer) for S-expression source
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! At each position the rules are tried in a fixed order: parenthesis,
//! whitespace run, digit run, letter run. Runs are consumed maximally, and
//! digits never join letters, so `abc123` is a name followed by a number.

use super::ast::SourceLocation;
use std::fmt;

/// The three token categories of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Paren,
    Number,
    Name,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Paren => write!(f, "paren"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Name => write!(f, "name"),
        }
    }
}

/// A token produced by the lexer.
///
/// `value` is the exact matched text. The [`SourceLocation`] is diagnostic
/// metadata only; two tokens with the same kind and value are the same token
/// as far as the parser is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, location: SourceLocation) -> Self {
        Token {
            kind,
            value: value.into(),
            location,
        }
    }

    pub fn is_open_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.value == "("
    }

    pub fn is_close_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.value == ")"
    }

    /// Kind and value, without the location.
    pub fn lexeme(&self) -> (TokenKind, &str) {
        (self.kind, self.value.as_str())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Paren => write!(f, "'{}'", self.value),
            TokenKind::Number => write!(f, "number {}", self.value),
            TokenKind::Name => write!(f, "name '{}'", self.value),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The next character starts none of the recognized token categories.
    UnrecognizedCharacter {
        character: char,
        location: SourceLocation,
    },
}

impl LexError {
    pub fn location(&self) -> SourceLocation {
        match self {
            LexError::UnrecognizedCharacter { location, .. } => *location,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnrecognizedCharacter {
                character,
                location,
            } => write!(
                f,
                "Lexer error at line {}, column {}: unrecognized character {:?}",
                location.line, location.column, character
            ),
        }
    }
}

impl std::error::Error for LexError {}

/// Convenience wrapper: tokenize a whole source string.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Lexer for S-expression source
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            let loc = self.current_location();

            if ch == '(' || ch == ')' {
                self.advance();
                tokens.push(Token::new(TokenKind::Paren, ch, loc));
            } else if ch.is_whitespace() {
                self.take_while(char::is_whitespace);
            } else if ch.is_ascii_digit() {
                let digits = self.take_while(|c| c.is_ascii_digit());
                tokens.push(Token::new(TokenKind::Number, digits, loc));
            } else if ch.is_ascii_alphabetic() {
                let letters = self.take_while(|c| c.is_ascii_alphabetic());
                tokens.push(Token::new(TokenKind::Name, letters, loc));
            } else {
                return Err(LexError::UnrecognizedCharacter {
                    character: ch,
                    location: loc,
                });
            }
        }

        Ok(tokens)
    }

    /// Consume the maximal run of characters satisfying `pred`.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut run = String::new();
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            run.push(ch);
            self.advance();
        }
        run
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens.iter().map(Token::lexeme).collect()
    }

    #[test]
    fn test_nested_call_tokens() {
        let tokens = tokenize("(add (subtract 5 1) 2)").unwrap();

        assert_eq!(tokens.len(), 9);
        assert_eq!(
            lexemes(&tokens),
            vec![
                (TokenKind::Paren, "("),
                (TokenKind::Name, "add"),
                (TokenKind::Paren, "("),
                (TokenKind::Name, "subtract"),
                (TokenKind::Number, "5"),
                (TokenKind::Number, "1"),
                (TokenKind::Paren, ")"),
                (TokenKind::Number, "2"),
                (TokenKind::Paren, ")"),
            ]
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \t\r\n  ").unwrap().is_empty());
    }

    #[test]
    fn test_maximal_munch() {
        let tokens = tokenize("12345 HelloWorld").unwrap();
        assert_eq!(
            lexemes(&tokens),
            vec![(TokenKind::Number, "12345"), (TokenKind::Name, "HelloWorld")]
        );
    }

    #[test]
    fn test_letters_and_digits_split() {
        let tokens = tokenize("abc123").unwrap();
        assert_eq!(
            lexemes(&tokens),
            vec![(TokenKind::Name, "abc"), (TokenKind::Number, "123")]
        );

        let tokens = tokenize("12ab").unwrap();
        assert_eq!(
            lexemes(&tokens),
            vec![(TokenKind::Number, "12"), (TokenKind::Name, "ab")]
        );
    }

    #[test]
    fn test_parens_need_no_whitespace() {
        let tokens = tokenize("((f))").unwrap();
        assert_eq!(tokens.len(), 5);
        assert!(tokens[0].is_open_paren());
        assert!(tokens[1].is_open_paren());
        assert_eq!(tokens[2].lexeme(), (TokenKind::Name, "f"));
        assert!(tokens[3].is_close_paren());
        assert!(tokens[4].is_close_paren());
    }

    #[test]
    fn test_unrecognized_character() {
        let err = tokenize("(add 1 @)").unwrap_err();
        assert_eq!(
            err,
            LexError::UnrecognizedCharacter {
                character: '@',
                location: SourceLocation::new(1, 8),
            }
        );
    }

    #[test]
    fn test_non_ascii_letters_rejected() {
        let err = tokenize("(café 1)").unwrap_err();
        assert!(matches!(
            err,
            LexError::UnrecognizedCharacter { character: 'é', .. }
        ));
    }

    #[test]
    fn test_locations() {
        let tokens = tokenize("(add\n  42)").unwrap();
        assert_eq!(tokens[0].location, SourceLocation::new(1, 1));
        assert_eq!(tokens[1].location, SourceLocation::new(1, 2));
        assert_eq!(tokens[2].location, SourceLocation::new(2, 3));
        assert_eq!(tokens[3].location, SourceLocation::new(2, 5));
    }
}
