//! qlisp IR - the syntax tree handed from the parser to the evaluator.
//!
//! The evaluator never sees source text. A parser produces a tree of
//! [`SyntaxNode`]s, each tagged with a [`NodeTag`] and carrying the literal
//! text of terminal nodes; the evaluator's reader turns that tree into
//! runtime values.
//!
//! ```text
//! source ──► qlisp_parse::parse ──► SyntaxNode (Program)
//!                                       │
//!                                       ▼
//!                          qlisp_eval::reader::read ──► Value
//! ```

mod span;
mod syntax;

pub use span::Span;
pub use syntax::{NodeTag, SyntaxNode};
