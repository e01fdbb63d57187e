//! qlisp Parse - turns source text into a [`SyntaxNode`] tree.
//!
//! Grammar:
//!
//! ```text
//! number   : /-?[0-9]+/
//! string   : /"(\\.|[^"])*"/
//! comment  : /;[^\r\n]*/
//! boolean  : /#[tf]/
//! symbol   : /[\^%a-zA-Z0-9_+\-*\/\\=<>!&?]+/
//! sexpr    : '(' <expr>* ')'
//! qexpr    : '{' <expr>* '}'
//! expr     : <number> | <string> | <comment> | <boolean> | <symbol> | <sexpr> | <qexpr>
//! program  : /^/ <expr>* /$/
//! ```
//!
//! The tree keeps comments and brackets as trivia nodes; consumers skip them
//! with [`SyntaxNode::forms`].

mod error;
mod lexer;
mod parser;

pub use error::ParseError;
pub use parser::parse;

pub use qlisp_ir::{NodeTag, Span, SyntaxNode};
