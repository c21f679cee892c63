//! Compilation pipeline
//!
//! ```text
//! Source → Lexer → Parser → Transformer → Code Generator
//! ```
//!
//! The stages run strictly in sequence, each consuming the previous stage's
//! whole output. Everything here is a pure function of the source text:
//! nothing is printed and no state is shared between compilations.
//!
//! - [`errors`]: [`CompileError`], the union of lexer and parser errors
//! - [`transform`]: tree-to-tree pass seam (identity by default)
//! - [`codegen`]: identity generation plus the C-style renderer
//! - [`stats`]: counts and per-callee tallies for a parsed program

pub mod codegen;
pub mod errors;
pub mod stats;
pub mod transform;

pub use errors::CompileError;
pub use stats::ProgramStats;
pub use transform::{Pass, Transformer};

use crate::parser::ast::Program;
use crate::parser::lexer::{Lexer, Token};
use crate::parser::parser::Parser;

/// Result of a successful compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub program: Program,
}

impl Compilation {
    /// C-style text, one line per top-level form.
    pub fn render(&self) -> String {
        codegen::render(&self.program)
    }

    pub fn stats(&self) -> ProgramStats {
        ProgramStats::collect(&self.program)
    }
}

/// Runs the four stages over a source string
#[derive(Default)]
pub struct Compiler {
    transformer: Transformer,
}

impl Compiler {
    pub fn new() -> Self {
        Compiler {
            transformer: Transformer::new(),
        }
    }

    pub fn compile(&self, source: &str) -> Result<Compilation, CompileError> {
        let tokens = Lexer::new(source).tokenize()?;
        let parser = Parser::new(tokens);
        let program = parser.parse_program()?;
        let program = self.transformer.transform(program);
        let program = codegen::generate(program);

        Ok(Compilation {
            tokens: parser.into_tokens(),
            program,
        })
    }
}

/// Compile `source` with the default pipeline and render it.
pub fn compile(source: &str) -> Result<String, CompileError> {
    Ok(Compiler::new().compile(source)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::LexError;
    use crate::parser::parser::ParseError;

    #[test]
    fn test_compile_examples() {
        assert_eq!(compile("(add 2 3)").unwrap(), "add(2, 3)");
        assert_eq!(compile("(subtract 5 1)").unwrap(), "subtract(5, 1)");
        assert_eq!(
            compile("(add (subtract 5 1) 2)").unwrap(),
            "add(subtract(5, 1), 2)"
        );
    }

    #[test]
    fn test_compilation_keeps_tokens() {
        let compilation = Compiler::new().compile("(add 2 3)").unwrap();
        assert_eq!(compilation.tokens.len(), 5);
        assert_eq!(compilation.program.len(), 1);
        assert_eq!(compilation.stats().calls, 1);
    }

    #[test]
    fn test_lex_error_stops_before_parsing() {
        let err = compile("(add 1 @)").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Lex(LexError::UnrecognizedCharacter { character: '@', .. })
        ));
        assert_eq!(err.stage(), "lexer");
    }

    #[test]
    fn test_parse_error_propagates() {
        let err = compile("(add 1").unwrap_err();
        assert!(matches!(err, CompileError::Parse(ParseError::OutOfTokens { .. })));
        assert_eq!(err.stage(), "parser");
    }

    #[test]
    fn test_error_location() {
        let err = compile("(add\n  $)").unwrap_err();
        let loc = err.location().unwrap();
        assert_eq!((loc.line, loc.column), (2, 3));
    }
}
