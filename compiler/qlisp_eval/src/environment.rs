//! Lexically chained symbol tables.
//!
//! An [`Environment`] is a shared handle to one [`Scope`]. Scopes link to a
//! parent; lookups walk the chain outward until they reach the root. Cloning
//! an `Environment` shares the scope; [`Environment::copy`] produces an
//! independent one.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::errors::{unbound_symbol, EvalResult};
use crate::value::{Name, Value};

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All scope allocations go through [`LocalScope::new`]. Built on `Rc`, so
/// environments are `!Send` and one root is never shared across threads.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bindings of one scope, kept in insertion order.
#[derive(Default)]
pub struct Scope {
    bindings: Vec<(Name, Value)>,
    /// Position of each name in `bindings`.
    index: FxHashMap<Name, usize>,
    parent: Option<Environment>,
}

impl Scope {
    #[inline]
    fn get(&self, name: &str) -> Option<&Value> {
        self.index.get(name).map(|&slot| &self.bindings[slot].1)
    }

    /// Replace an existing binding in place, or append a new one.
    fn upsert(&mut self, name: Name, value: Value) {
        if let Some(&slot) = self.index.get(&name) {
            self.bindings[slot].1 = value;
        } else {
            self.index.insert(name.clone(), self.bindings.len());
            self.bindings.push((name, value));
        }
    }
}

/// Shared handle to a scope.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A root environment: no parent, no bindings.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::default()))
    }

    /// An empty environment whose lookups fall back to `parent`.
    pub fn with_parent(parent: &Environment) -> Self {
        Environment(LocalScope::new(Scope {
            parent: Some(parent.clone()),
            ..Scope::default()
        }))
    }

    /// Resolve `name`, innermost scope first. Returns a copy of the bound value.
    pub fn lookup(&self, name: &str) -> EvalResult<Value> {
        let mut scope = self.0.clone();
        loop {
            let parent = {
                let current = scope.borrow();
                if let Some(value) = current.get(name) {
                    return Ok(value.clone());
                }
                current.parent.as_ref().map(|parent| parent.0.clone())
            };
            match parent {
                Some(parent) => scope = parent,
                None => return Err(unbound_symbol(name)),
            }
        }
    }

    /// Bind `name` in this scope, replacing any existing local binding.
    pub fn define_local(&self, name: impl Into<Name>, value: Value) {
        self.0.borrow_mut().upsert(name.into(), value);
    }

    /// Bind `name` in the root of this environment's chain.
    pub fn define_global(&self, name: impl Into<Name>, value: Value) {
        self.root().define_local(name, value);
    }

    /// The outermost environment of the chain.
    pub fn root(&self) -> Environment {
        let mut env = self.clone();
        while let Some(parent) = env.parent() {
            env = parent;
        }
        env
    }

    /// Independent copy: same parent handle, deep-copied bindings.
    pub fn copy(&self) -> Environment {
        let scope = self.0.borrow();
        Environment(LocalScope::new(Scope {
            bindings: scope.bindings.clone(),
            index: scope.index.clone(),
            parent: scope.parent.clone(),
        }))
    }

    pub fn parent(&self) -> Option<Environment> {
        self.0.borrow().parent.clone()
    }

    /// Re-link this scope. `None` detaches it.
    pub fn set_parent(&self, parent: Option<&Environment>) {
        self.0.borrow_mut().parent = parent.cloned();
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.borrow().parent.is_none()
    }

    /// Number of local bindings.
    pub fn len(&self) -> usize {
        self.0.borrow().bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Locally bound names in insertion order.
    pub fn names(&self) -> Vec<Name> {
        self.0
            .borrow()
            .bindings
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Whether `name` is bound in this scope (parents not consulted).
    pub fn contains_local(&self, name: &str) -> bool {
        self.0.borrow().index.contains_key(name)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.names())
            .field("root", &self.is_root())
            .finish()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
