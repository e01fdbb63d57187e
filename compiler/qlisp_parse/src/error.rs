//! Parse errors.

use qlisp_ir::Span;

/// Why a source text could not be turned into a syntax tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected character `{text}`")]
    UnexpectedCharacter { text: String, span: Span },

    #[error("unterminated string literal")]
    UnterminatedString { span: Span },

    #[error("unclosed `{open}`")]
    Unclosed { open: char, span: Span },

    #[error("unexpected `{found}` with no matching opening bracket")]
    UnexpectedClose { found: char, span: Span },

    #[error("expected `{expected}` but found `{found}`")]
    MismatchedClose {
        expected: char,
        found: char,
        span: Span,
    },
}

impl ParseError {
    /// Where in the source the error was detected.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedCharacter { span, .. }
            | ParseError::UnterminatedString { span }
            | ParseError::Unclosed { span, .. }
            | ParseError::UnexpectedClose { span, .. }
            | ParseError::MismatchedClose { span, .. } => *span,
        }
    }

    /// Short label to attach to the span in rendered diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            ParseError::UnexpectedCharacter { .. } => "not valid in a symbol or literal",
            ParseError::UnterminatedString { .. } => "string starts here",
            ParseError::Unclosed { .. } => "opened here",
            ParseError::UnexpectedClose { .. } => "nothing to close",
            ParseError::MismatchedClose { .. } => "wrong closing bracket",
        }
    }
}
