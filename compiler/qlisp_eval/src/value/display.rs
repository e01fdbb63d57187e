//! Printed form of values.

use std::fmt::{self, Write};

use super::{Function, Value};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Boolean(true) => f.write_str("#t"),
            Value::Boolean(false) => f.write_str("#f"),
            Value::Str(s) => {
                f.write_char('"')?;
                f.write_str(&escape(s))?;
                f.write_char('"')
            }
            Value::Symbol(name) => f.write_str(name),
            Value::Error(err) => write!(f, "Error: {err}"),
            Value::EvaluableList(items) => write_list(f, '(', items, ')'),
            Value::QuotedList(items) => write_list(f, '{', items, '}'),
            Value::Function(Function::Builtin(_)) => f.write_str("<builtin>"),
            Value::Function(Function::Closure(closure)) => {
                f.write_str("(\\ {")?;
                for (i, formal) in closure.formals.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    f.write_str(formal)?;
                }
                f.write_str("} ")?;
                write_list(f, '{', &closure.body, '}')?;
                f.write_char(')')
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, open: char, items: &[Value], close: char) -> fmt::Result {
    f.write_char(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        qlisp_stack::ensure_sufficient_stack(|| write!(f, "{item}"))?;
    }
    f.write_char(close)
}

/// Escape a string for printing between double quotes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out
}
