//! Inspector view model
//!
//! Runs the pipeline form by form so the inspector can map each top-level
//! form back to its tokens and source lines. Unlike [`Compiler::compile`],
//! a failure does not discard the forms that parsed before it: they are kept
//! for display next to the error.
//!
//! [`Compiler::compile`]: crate::compiler::Compiler::compile

use crate::compiler::codegen;
use crate::compiler::stats::ProgramStats;
use crate::compiler::transform::transform;
use crate::compiler::CompileError;
use crate::parser::ast::{Node, Program, SourceLocation};
use crate::parser::lexer::{tokenize, Token};
use crate::parser::parser::parse_forms;
use std::ops::Range;

/// One top-level form and everything derived from it
#[derive(Debug, Clone)]
pub struct FormView {
    /// Token indices covered by this form
    pub tokens: Range<usize>,
    pub node: Node,
    pub rendered: String,
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl FormView {
    /// Whether `line` (1-based) falls inside this form.
    pub fn covers_line(&self, line: usize) -> bool {
        self.start.line <= line && line <= self.end.line
    }
}

#[derive(Debug, Clone)]
pub struct Inspection {
    pub tokens: Vec<Token>,
    pub forms: Vec<FormView>,
    pub error: Option<CompileError>,
    pub stats: ProgramStats,
}

impl Inspection {
    pub fn build(source: &str) -> Self {
        let tokens = match tokenize(source) {
            Ok(tokens) => tokens,
            Err(err) => {
                return Inspection {
                    tokens: Vec::new(),
                    forms: Vec::new(),
                    error: Some(err.into()),
                    stats: ProgramStats::default(),
                };
            }
        };

        let parsed = parse_forms(&tokens);
        let (spans, body): (Vec<Range<usize>>, Vec<Node>) = parsed.forms.into_iter().unzip();
        let error = parsed.error.map(CompileError::from);

        let program = codegen::generate(transform(Program { body }));
        let stats = ProgramStats::collect(&program);

        let forms = spans
            .into_iter()
            .zip(program.body)
            .map(|(range, node)| FormView {
                start: tokens[range.start].location,
                end: tokens[range.end - 1].location,
                rendered: codegen::render_node(&node),
                tokens: range,
                node,
            })
            .collect();

        Inspection {
            tokens,
            forms,
            error,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forms_map_to_tokens_and_lines() {
        let inspection = Inspection::build("(add 2 3)\n42\n(sub\n  5 1)");

        assert!(inspection.error.is_none());
        assert_eq!(inspection.forms.len(), 3);
        assert_eq!(inspection.forms[0].tokens, 0..5);
        assert_eq!(inspection.forms[1].rendered, "42");
        assert_eq!(inspection.forms[2].rendered, "sub(5, 1)");
        assert_eq!(inspection.forms[2].start.line, 3);
        assert_eq!(inspection.forms[2].end.line, 4);
        assert!(inspection.forms[2].covers_line(4));
        assert_eq!(inspection.forms[1].tokens, 5..6);
        assert_eq!(inspection.stats.forms, 3);
    }

    #[test]
    fn test_parse_error_keeps_earlier_forms() {
        let inspection = Inspection::build("(add 2 3) (sub 1");

        assert_eq!(inspection.forms.len(), 1);
        assert_eq!(inspection.forms[0].rendered, "add(2, 3)");
        assert_eq!(inspection.stats.forms, 1);
        assert_eq!(inspection.tokens.len(), 8);
        assert!(matches!(inspection.error, Some(CompileError::Parse(_))));
    }

    #[test]
    fn test_lex_error_has_no_tokens() {
        let inspection = Inspection::build("(add 1 #)");

        assert!(inspection.tokens.is_empty());
        assert!(inspection.forms.is_empty());
        assert!(matches!(inspection.error, Some(CompileError::Lex(_))));
    }
}
