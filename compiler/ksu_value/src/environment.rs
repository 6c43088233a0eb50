//! Captured environments.
//!
//! An environment is a flat, immutable snapshot of every variable a closure
//! needs, resolved ahead of time by the code generator. There is no parent
//! chain: lookup is one linear scan. Mutable variables are boxes, so sharing
//! a snapshot between closures still lets `set!` through one be seen by the
//! others.

use std::fmt;
use std::mem;
use std::rc::Rc;

use crate::errors::{unbound_variable, EvalError};
use crate::value::{defer, release, Value};

/// Variable name as emitted by the code generator.
pub type Name = &'static str;

/// One entry of an environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub name: Name,
    pub value: Value,
}

/// Flat, ordered list of bindings shared by every closure that captured it.
#[derive(Clone)]
pub struct Environment(Rc<[Binding]>);

thread_local! {
    static EMPTY: Environment = Environment(Rc::from(Vec::new()));
}

impl Environment {
    /// Build an environment from `(name, value)` pairs, in order.
    ///
    /// Duplicate names are allowed; lookup finds the first one.
    pub fn new<I>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (Name, Value)>,
    {
        let bindings: Vec<Binding> = bindings
            .into_iter()
            .map(|(name, value)| Binding { name, value })
            .collect();
        if bindings.is_empty() {
            return Self::empty();
        }
        Environment(Rc::from(bindings))
    }

    /// The environment of a closure that captures nothing.
    ///
    /// All empty environments on a thread share one allocation.
    pub fn empty() -> Self {
        EMPTY.with(Clone::clone)
    }

    /// Value bound to `name`: the first binding with that name.
    pub fn lookup(&self, name: &str) -> Result<&Value, EvalError> {
        self.0
            .iter()
            .find(|binding| binding.name == name)
            .map(|binding| &binding.value)
            .ok_or_else(|| unbound_variable(name))
    }

    /// Binding at `index`, in construction order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Binding> {
        self.0.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bound names, in construction order.
    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        self.0.iter().map(|binding| binding.name)
    }

    /// Whether two handles share one snapshot.
    #[inline]
    pub fn ptr_eq(a: &Environment, b: &Environment) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    /// Move the bound values out if this is the last handle to the snapshot.
    pub(crate) fn release_bindings(&mut self, pending: &mut Vec<Value>) {
        if let Some(bindings) = Rc::get_mut(&mut self.0) {
            for binding in bindings.iter_mut() {
                defer(mem::replace(&mut binding.value, Value::Nil), pending);
            }
        }
    }
}

impl Drop for Environment {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.release_bindings(&mut pending);
        release(pending);
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
