// ABOUTME: Environment module for managing variable bindings and scopes

use crate::value::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// An immutable frame linking a name -> value mapping to a parent frame.
///
/// Bindings may only be added before the frame is sealed; the evaluator
/// seals a frame immediately before entering the lambda body it was built
/// for (spec §3 invariants, §5). After sealing, a frame is read-only and may
/// be shared freely between closures via `Rc`.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: Option<Rc<Environment>>,
    sealed: Cell<bool>,
}

impl Environment {
    /// Creates the primordial environment: no parent, empty bindings.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: None,
            sealed: Cell::new(false),
        })
    }

    /// Creates a fresh child frame with the given parent.
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(parent),
            sealed: Cell::new(false),
        })
    }

    /// Binds a name in this frame. Legal only before the frame is sealed.
    ///
    /// # Panics
    ///
    /// Panics if the frame has already been sealed — this would be an
    /// evaluator bug (a closure body mutating its own captured frame),
    /// never a reachable RPAL-program-level error.
    pub fn bind(&self, name: String, value: Value) {
        assert!(!self.sealed.get(), "cannot bind into a sealed environment");
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Seals the frame: no further bindings may be added. Idempotent.
    pub fn seal(&self) {
        self.sealed.set(true);
    }

    /// Looks up `name` in this frame and its ancestors. Returns a deep copy
    /// of the bound value (tuples are structurally cloned; lambda/eta
    /// closures share their captured environment by `Rc`, which is safe
    /// because environments are immutable once sealed).
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|p| p.lookup(name))
    }
}
