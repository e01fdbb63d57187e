//! Owned element storage for list values.
//!
//! Lists nest without bound, so every operation here that walks nested
//! lists either runs on a heap work list (`Drop`) or grows the stack
//! (`Clone`, `PartialEq`, `Debug`).

use std::fmt;
use std::ops::{Deref, DerefMut};

use qlisp_stack::ensure_sufficient_stack;

use super::{Function, Value};

/// Elements of an evaluable or quoted list.
#[derive(Default)]
pub struct ValueList(Vec<Value>);

impl ValueList {
    pub fn new() -> Self {
        ValueList(Vec::new())
    }

    /// Take the elements out, leaving nothing for `Drop` to walk.
    pub fn into_vec(mut self) -> Vec<Value> {
        std::mem::take(&mut self.0)
    }
}

/// Nested lists and closure bodies are flattened onto one work list, so
/// dropping a list nested a million deep uses constant stack.
impl Drop for ValueList {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.0);
        while let Some(value) = pending.pop() {
            match value {
                Value::EvaluableList(mut items) | Value::QuotedList(mut items) => {
                    pending.append(&mut items.0);
                }
                Value::Function(Function::Closure(mut closure)) => {
                    pending.append(&mut closure.body);
                }
                _ => {}
            }
        }
    }
}

impl Clone for ValueList {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| ValueList(self.0.clone()))
    }
}

impl PartialEq for ValueList {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.0 == other.0)
    }
}

impl fmt::Debug for ValueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| f.debug_list().entries(&self.0).finish())
    }
}

impl Deref for ValueList {
    type Target = Vec<Value>;

    fn deref(&self) -> &Vec<Value> {
        &self.0
    }
}

impl DerefMut for ValueList {
    fn deref_mut(&mut self) -> &mut Vec<Value> {
        &mut self.0
    }
}

impl From<Vec<Value>> for ValueList {
    fn from(items: Vec<Value>) -> Self {
        ValueList(items)
    }
}

impl FromIterator<Value> for ValueList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        ValueList(iter.into_iter().collect())
    }
}

impl IntoIterator for ValueList {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueList {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
