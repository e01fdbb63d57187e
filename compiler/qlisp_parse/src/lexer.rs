//! Token definitions for the logos-generated lexer.

use logos::Logos;
use qlisp_ir::Span;

use crate::ParseError;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r";[^\r\n]*")]
    Comment,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[token("#t")]
    #[token("#f")]
    Boolean,

    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,

    #[regex(r"-?[0-9]+")]
    Number,

    // A symbol never starts with a digit or `-digit`, so `1+` splits
    // into a number and a symbol.
    #[regex(r"[\^%a-zA-Z_+*/\\=<>!&?][\^%a-zA-Z0-9_+\-*/\\=<>!&?]*")]
    #[regex(r"-([\^%a-zA-Z_+\-*/\\=<>!&?][\^%a-zA-Z0-9_+\-*/\\=<>!&?]*)?")]
    Symbol,
}

/// A token with its source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Token<'src> {
    pub kind: RawToken,
    pub text: &'src str,
    pub span: Span,
}

/// Split `source` into tokens, stopping at the first unrecognized input.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let text = lexer.slice();
        match result {
            Ok(kind) => tokens.push(Token { kind, text, span }),
            Err(()) if text.starts_with('"') => {
                return Err(ParseError::UnterminatedString { span });
            }
            Err(()) => {
                return Err(ParseError::UnexpectedCharacter {
                    text: text.to_string(),
                    span,
                });
            }
        }
    }

    Ok(tokens)
}
