//! Tagged syntax tree nodes.

use std::fmt;

use crate::Span;

/// What a syntax node represents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeTag {
    /// Root of a parsed source: all top-level forms in order.
    Program,
    /// Integer literal, text as written (`-12`).
    Number,
    /// String literal, text as written including the surrounding quotes.
    String,
    /// `#t` or `#f`.
    Boolean,
    Symbol,
    /// `; ...` up to the end of the line.
    Comment,
    /// `( ... )`
    EvaluableList,
    /// `{ ... }`
    QuotedList,
    /// A bracket: `(`, `)`, `{` or `}`.
    Punctuation,
}

impl NodeTag {
    /// Whether nodes with this tag carry no meaning for evaluation.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, NodeTag::Comment | NodeTag::Punctuation)
    }

    /// Whether nodes with this tag hold children rather than text.
    #[inline]
    pub fn is_branch(self) -> bool {
        matches!(
            self,
            NodeTag::Program | NodeTag::EvaluableList | NodeTag::QuotedList
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            NodeTag::Program => "program",
            NodeTag::Number => "number",
            NodeTag::String => "string",
            NodeTag::Boolean => "boolean",
            NodeTag::Symbol => "symbol",
            NodeTag::Comment => "comment",
            NodeTag::EvaluableList => "sexpr",
            NodeTag::QuotedList => "qexpr",
            NodeTag::Punctuation => "punct",
        }
    }
}

impl fmt::Display for NodeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the syntax tree.
///
/// Terminal nodes keep their literal source text in `text` and have no
/// children. Branch nodes (`Program`, `EvaluableList`, `QuotedList`) keep
/// their children in source order, including comment and bracket nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    pub tag: NodeTag,
    pub text: String,
    pub span: Span,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create a terminal node.
    pub fn leaf(tag: NodeTag, text: impl Into<String>, span: Span) -> Self {
        SyntaxNode {
            tag,
            text: text.into(),
            span,
            children: Vec::new(),
        }
    }

    /// Create a branch node.
    pub fn branch(tag: NodeTag, children: Vec<SyntaxNode>, span: Span) -> Self {
        SyntaxNode {
            tag,
            text: String::new(),
            span,
            children,
        }
    }

    /// Children that carry meaning, skipping comments and brackets.
    pub fn forms(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter(|child| !child.tag.is_trivia())
    }
}

/// Frees descendants from a heap work list so deep trees never recurse.
impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Compact s-expression dump of the tree, trivia omitted.
///
/// `(+ 1 {a})` dumps as `(program (sexpr symbol:+ number:1 (qexpr symbol:a)))`.
impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.tag.is_branch() {
            return write!(f, "{}:{}", self.tag, self.text);
        }
        write!(f, "({}", self.tag)?;
        for child in self.forms() {
            write!(f, " {child}")?;
        }
        write!(f, ")")
    }
}
