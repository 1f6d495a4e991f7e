use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::value::core::Value;

/// A single frame: its own bindings plus the frame it was created inside.
struct Frame {
    store: HashMap<String, Value>,
    outer: Option<Environment>,
}

/// A lexical scope.
///
/// `Environment` is a cheap handle; clones share the same frame. Lookups
/// check the local bindings first and then walk the chain of outer frames.
/// The outermost (global) frame has no outer link and holds the builtins and
/// top-level `let`s.
///
/// A closure keeps its defining frame alive through such a handle, which is
/// what gives functions lexical rather than dynamic scope.
#[derive(Clone)]
pub struct Environment(Rc<RefCell<Frame>>);

impl Environment {
    /// Creates an empty global environment.
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Frame { store: HashMap::new(),
                                          outer: None, })))
    }

    /// Creates an empty frame whose lookups fall back to `outer`.
    #[must_use]
    pub fn enclosed(outer: &Self) -> Self {
        Self(Rc::new(RefCell::new(Frame { store: HashMap::new(),
                                          outer: Some(outer.clone()), })))
    }

    /// Looks `name` up in this frame, then in each outer frame in turn.
    ///
    /// # Example
    /// ```
    /// use squid::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let global = Environment::new();
    /// global.set("x", Value::Integer(1));
    ///
    /// let local = Environment::enclosed(&global);
    /// assert_eq!(local.get("x"), Some(Value::Integer(1)));
    ///
    /// local.set("x", Value::Integer(2));
    /// assert_eq!(local.get("x"), Some(Value::Integer(2)));
    /// assert_eq!(global.get("x"), Some(Value::Integer(1)));
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        let frame = self.0.borrow();
        if let Some(value) = frame.store.get(name) {
            return Some(value.clone());
        }
        frame.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Binds `name` in this frame, shadowing any outer binding and replacing
    /// a local one.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().store.insert(name.into(), value);
    }

    /// Replaces the nearest existing binding of `name`.
    ///
    /// Returns `false`, leaving every frame untouched, when `name` is bound
    /// nowhere in the chain.
    pub fn assign(&self, name: &str, value: Value) -> bool {
        let mut frame = self.0.borrow_mut();
        if let Some(slot) = frame.store.get_mut(name) {
            *slot = value;
            return true;
        }
        match &frame.outer {
            Some(outer) => outer.assign(name, value),
            None => false,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

/// Frames can be reachable from their own bindings through closures, so
/// only the local names are printed.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = self.0.borrow();
        let mut names: Vec<&String> = frame.store.keys().collect();
        names.sort();

        f.debug_struct("Environment")
         .field("bindings", &names)
         .field("global", &frame.outer.is_none())
         .finish()
    }
}
