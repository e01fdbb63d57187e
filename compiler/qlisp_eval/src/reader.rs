//! Builds runtime values from a syntax tree.
//!
//! Comments and brackets are skipped. A number literal that does not fit in
//! an `i64` becomes a `ParseFailure` error value in place, so a single bad
//! literal does not abort reading the rest of the tree.

use qlisp_ir::{NodeTag, SyntaxNode};
use qlisp_stack::ensure_sufficient_stack;

use crate::errors::parse_failure;
use crate::value::Value;

/// Read one node.
///
/// `Program` and `(...)` become evaluable lists, `{...}` a quoted list.
pub fn read(node: &SyntaxNode) -> Value {
    match node.tag {
        NodeTag::Number => read_number(&node.text),
        NodeTag::String => Value::Str(read_string(&node.text)),
        NodeTag::Boolean => Value::Boolean(node.text == "#t"),
        NodeTag::Symbol => Value::Symbol(node.text.clone()),
        NodeTag::Program | NodeTag::EvaluableList => Value::evaluable(read_forms(node)),
        NodeTag::QuotedList => Value::quoted(read_forms(node)),
        NodeTag::Comment | NodeTag::Punctuation => {
            Value::from(parse_failure(format!("a {} has no value", node.tag)))
        }
    }
}

/// Read the meaningful children of a branch node, in order.
///
/// Applied to a `Program` root this yields the top-level forms.
pub fn read_forms(node: &SyntaxNode) -> Vec<Value> {
    ensure_sufficient_stack(|| node.forms().map(read).collect())
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::from(parse_failure(format!("invalid number '{text}'"))),
    }
}

/// Strip the surrounding quotes and decode escapes.
fn read_string(text: &str) -> String {
    let inner = text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(text);
    unescape(inner)
}

/// Decode `\a \b \f \n \r \t \v \\ \' \" \0`. Unknown escapes are kept as written.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('a') => out.push('\u{7}'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('v') => out.push('\u{b}'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('0') => out.push('\0'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
