//! Recursive-descent parser over the token stream.

use qlisp_ir::{NodeTag, Span, SyntaxNode};
use qlisp_stack::ensure_sufficient_stack;

use crate::lexer::{tokenize, RawToken, Token};
use crate::ParseError;

/// Parse a whole source text into a `Program` node.
///
/// The program's children are the top-level forms in source order, with
/// comments kept as trivia. An empty source yields an empty program.
pub fn parse(source: &str) -> Result<SyntaxNode, ParseError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
    };
    let children = parser.parse_until(None)?;
    let end = u32::try_from(source.len()).unwrap_or(u32::MAX);
    Ok(SyntaxNode::branch(
        NodeTag::Program,
        children,
        Span::new(0, end),
    ))
}

struct Parser<'t, 'src> {
    tokens: &'t [Token<'src>],
    pos: usize,
}

/// An opening bracket waiting for its partner.
#[derive(Clone, Copy)]
struct Open {
    ch: char,
    close: char,
    span: Span,
}

impl<'src> Parser<'_, 'src> {
    fn next(&mut self) -> Option<Token<'src>> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos = self.pos.saturating_add(1);
        }
        token
    }

    /// Parse expressions until the closing bracket of `open`, or the end of
    /// input when `open` is `None`. The closing bracket is included in the
    /// returned children.
    fn parse_until(&mut self, open: Option<Open>) -> Result<Vec<SyntaxNode>, ParseError> {
        let mut children = Vec::new();
        loop {
            let Some(token) = self.next() else {
                return match open {
                    Some(open) => Err(ParseError::Unclosed {
                        open: open.ch,
                        span: open.span,
                    }),
                    None => Ok(children),
                };
            };

            match token.kind {
                RawToken::LParen => {
                    children.push(self.parse_list(token, NodeTag::EvaluableList, ')')?);
                }
                RawToken::LBrace => {
                    children.push(self.parse_list(token, NodeTag::QuotedList, '}')?);
                }
                RawToken::RParen | RawToken::RBrace => {
                    let found = if token.kind == RawToken::RParen { ')' } else { '}' };
                    return match open {
                        Some(open) if open.close == found => {
                            children.push(SyntaxNode::leaf(
                                NodeTag::Punctuation,
                                token.text,
                                token.span,
                            ));
                            Ok(children)
                        }
                        Some(open) => Err(ParseError::MismatchedClose {
                            expected: open.close,
                            found,
                            span: token.span,
                        }),
                        None => Err(ParseError::UnexpectedClose {
                            found,
                            span: token.span,
                        }),
                    };
                }
                RawToken::Comment => {
                    children.push(SyntaxNode::leaf(NodeTag::Comment, token.text, token.span));
                }
                RawToken::Boolean => {
                    children.push(SyntaxNode::leaf(NodeTag::Boolean, token.text, token.span));
                }
                RawToken::Str => {
                    children.push(SyntaxNode::leaf(NodeTag::String, token.text, token.span));
                }
                RawToken::Number => {
                    children.push(SyntaxNode::leaf(NodeTag::Number, token.text, token.span));
                }
                RawToken::Symbol => {
                    children.push(SyntaxNode::leaf(NodeTag::Symbol, token.text, token.span));
                }
            }
        }
    }

    fn parse_list(
        &mut self,
        open_token: Token<'src>,
        tag: NodeTag,
        close: char,
    ) -> Result<SyntaxNode, ParseError> {
        let open = Open {
            ch: if close == ')' { '(' } else { '{' },
            close,
            span: open_token.span,
        };
        let mut children = vec![SyntaxNode::leaf(
            NodeTag::Punctuation,
            open_token.text,
            open_token.span,
        )];
        let rest = ensure_sufficient_stack(|| self.parse_until(Some(open)))?;
        let end = rest.last().map_or(open.span, |node| node.span);
        children.extend(rest);
        Ok(SyntaxNode::branch(tag, children, open.span.merge(end)))
    }
}
